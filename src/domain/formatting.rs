use chrono::{Datelike, NaiveDate};

/// Placeholder rendered wherever an amount is zero or missing.
pub const AMOUNT_PLACEHOLDER: &str = "-";

/// Format an amount of Indonesian Rupiah for display.
///
/// Zero and missing amounts render as the placeholder dash, matching how the
/// price list shows the free trial entry. Everything else gets the local
/// convention: `Rp` prefix, dot-grouped thousands, `,-` suffix.
pub fn rupiah(amount: Option<i64>) -> String {
  match amount {
    None | Some(0) => AMOUNT_PLACEHOLDER.to_string(),
    Some(value) => format!("Rp {},-", group_thousands(value)),
  }
}

fn group_thousands(value: i64) -> String {
  let digits = value.unsigned_abs().to_string();
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(ch);
  }
  if value < 0 {
    format!("-{}", grouped)
  } else {
    grouped
  }
}

/// Numeric day/month/year, zero padded: `05/03/2024`.
pub fn dmy(date: NaiveDate) -> String {
  date.format("%d/%m/%Y").to_string()
}

/// Long form with unpadded day and English month name: `5 March 2024`.
pub fn long_date(date: NaiveDate) -> String {
  format!("{} {}", date.day(), date.format("%B %Y"))
}

/// Replace the five HTML-reserved characters with their entities.
///
/// Only `& < > " '` are touched; all other characters pass through unchanged.
pub fn escape_html(input: &str) -> String {
  let mut escaped = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#039;"),
      _ => escaped.push(ch),
    }
  }
  escaped
}
