use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tera::Tera;

use crate::domain::formatting;

/// Template engine wrapper for rendering HTML pages.
///
/// Registers the display helpers as filters so templates format amounts and
/// dates the same way the printable documents do.
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  /// Create a new template engine instance
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::new("templates/**/*.html.tera")?;
    tera.autoescape_on(vec!["html.tera", ".html"]);
    tera.register_filter("rupiah", rupiah_filter);
    tera.register_filter("dmy", dmy_filter);
    tera.register_filter("long_date", long_date_filter);
    tera.register_filter("escape_html", escape_html_filter);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  /// Render a template with the given context
  pub fn render(&self, template: &str, context: &tera::Context) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }
}

/// `{{ amount | rupiah }}` — zero, null, and non-numeric input all render
/// the placeholder dash instead of failing the page.
fn rupiah_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
  let amount = match value {
    Value::Number(n) => n.as_i64(),
    _ => None,
  };
  Ok(Value::String(formatting::rupiah(amount)))
}

fn parse_date(value: &Value, filter: &str) -> tera::Result<NaiveDate> {
  let text = value
    .as_str()
    .ok_or_else(|| tera::Error::msg(format!("{} expects an ISO date string", filter)))?;
  text
    .parse::<NaiveDate>()
    .map_err(|e| tera::Error::msg(format!("{}: invalid date '{}': {}", filter, text, e)))
}

/// `{{ date | dmy }}` — `05/03/2024`.
fn dmy_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
  Ok(Value::String(formatting::dmy(parse_date(value, "dmy")?)))
}

/// `{{ date | long_date }}` — `5 March 2024`.
fn long_date_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
  Ok(Value::String(formatting::long_date(parse_date(
    value,
    "long_date",
  )?)))
}

/// `{{ text | escape_html }}` — for the odd spot rendered with autoescape
/// off; uses the same fixed entity table as the printable documents.
fn escape_html_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
  let text = value
    .as_str()
    .ok_or_else(|| tera::Error::msg("escape_html expects a string"))?;
  Ok(Value::String(formatting::escape_html(text)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_rupiah_filter_sentinel_cases() {
    let args = HashMap::new();
    assert_eq!(
      rupiah_filter(&json!(null), &args).unwrap(),
      json!("-")
    );
    assert_eq!(rupiah_filter(&json!(0), &args).unwrap(), json!("-"));
    assert_eq!(
      rupiah_filter(&json!("not a number"), &args).unwrap(),
      json!("-")
    );
  }

  #[test]
  fn test_rupiah_filter_formats_amounts() {
    let args = HashMap::new();
    assert_eq!(
      rupiah_filter(&json!(1_000_000), &args).unwrap(),
      json!("Rp 1.000.000,-")
    );
  }

  #[test]
  fn test_date_filters() {
    let args = HashMap::new();
    assert_eq!(
      dmy_filter(&json!("2024-03-05"), &args).unwrap(),
      json!("05/03/2024")
    );
    assert_eq!(
      long_date_filter(&json!("2024-03-05"), &args).unwrap(),
      json!("5 March 2024")
    );
    assert!(dmy_filter(&json!("yesterday"), &args).is_err());
  }

  #[test]
  fn test_escape_html_filter() {
    let args = HashMap::new();
    assert_eq!(
      escape_html_filter(&json!("<a>&'\""), &args).unwrap(),
      json!("&lt;a&gt;&amp;&#039;&quot;")
    );
  }
}
