//! Firestore typed-value mapping.
//!
//! The REST API wraps every field in a type tag (`{"stringValue": ...}`,
//! `{"integerValue": "42"}`, ...). These helpers convert between that wire
//! representation and plain JSON so the repositories can lean on serde.

use serde_json::{Map, Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
  #[error("Unsupported JSON value: {0}")]
  Unsupported(String),
  #[error("Malformed Firestore value: {0}")]
  Malformed(String),
}

/// Wrap a plain JSON object into a Firestore `fields` map.
pub fn to_fields(object: &Map<String, Value>) -> Result<Value, DocumentError> {
  let mut fields = Map::with_capacity(object.len());
  for (key, value) in object {
    fields.insert(key.clone(), to_value(value)?);
  }
  Ok(Value::Object(fields))
}

/// Wrap a single plain JSON value into its typed Firestore form.
pub fn to_value(value: &Value) -> Result<Value, DocumentError> {
  match value {
    Value::Null => Ok(json!({ "nullValue": null })),
    Value::Bool(b) => Ok(json!({ "booleanValue": b })),
    Value::Number(n) => {
      if let Some(i) = n.as_i64() {
        // Integers travel as strings on the wire.
        Ok(json!({ "integerValue": i.to_string() }))
      } else if let Some(f) = n.as_f64() {
        Ok(json!({ "doubleValue": f }))
      } else {
        Err(DocumentError::Unsupported(format!("number {}", n)))
      }
    }
    Value::String(s) => Ok(json!({ "stringValue": s })),
    Value::Array(items) => {
      let values = items.iter().map(to_value).collect::<Result<Vec<_>, _>>()?;
      Ok(json!({ "arrayValue": { "values": values } }))
    }
    Value::Object(object) => Ok(json!({ "mapValue": { "fields": to_fields(object)? } })),
  }
}

/// Unwrap a Firestore `fields` map back into a plain JSON object.
pub fn from_fields(fields: &Value) -> Result<Map<String, Value>, DocumentError> {
  let fields = fields
    .as_object()
    .ok_or_else(|| DocumentError::Malformed("fields is not an object".to_string()))?;

  let mut object = Map::with_capacity(fields.len());
  for (key, value) in fields {
    object.insert(key.clone(), from_value(value)?);
  }
  Ok(object)
}

/// Unwrap a single typed Firestore value.
pub fn from_value(value: &Value) -> Result<Value, DocumentError> {
  let object = value
    .as_object()
    .ok_or_else(|| DocumentError::Malformed(format!("not a typed value: {}", value)))?;

  let (kind, inner) = object
    .iter()
    .next()
    .ok_or_else(|| DocumentError::Malformed("empty typed value".to_string()))?;

  match kind.as_str() {
    "nullValue" => Ok(Value::Null),
    "booleanValue" => Ok(inner.clone()),
    "integerValue" => {
      let i = match inner {
        Value::String(s) => s
          .parse::<i64>()
          .map_err(|e| DocumentError::Malformed(format!("integerValue '{}': {}", s, e)))?,
        Value::Number(n) => n
          .as_i64()
          .ok_or_else(|| DocumentError::Malformed(format!("integerValue {}", n)))?,
        other => {
          return Err(DocumentError::Malformed(format!("integerValue {}", other)));
        }
      };
      Ok(json!(i))
    }
    "doubleValue" => Ok(inner.clone()),
    // Timestamps and dates are kept as their RFC 3339 text.
    "stringValue" | "timestampValue" | "referenceValue" => Ok(inner.clone()),
    "arrayValue" => {
      let items = match inner.get("values") {
        Some(Value::Array(values)) => values.iter().map(from_value).collect::<Result<Vec<_>, _>>()?,
        // An empty arrayValue omits `values` entirely.
        None => Vec::new(),
        Some(other) => {
          return Err(DocumentError::Malformed(format!("arrayValue {}", other)));
        }
      };
      Ok(Value::Array(items))
    }
    "mapValue" => {
      let fields = match inner.get("fields") {
        Some(fields) => from_fields(fields)?,
        None => Map::new(),
      };
      Ok(Value::Object(fields))
    }
    other => Err(DocumentError::Unsupported(format!("value kind {}", other))),
  }
}
