//! Serde helpers for upstream scalars that arrive as either strings or numbers.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserializes a required scalar as a `String`, accepting numbers and booleans.
///
/// # Examples
///
/// ```
/// use jx3calc_domain::common::lenient_string;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(deserialize_with = "lenient_string")]
///     quality: String,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"quality": 12450}"#).unwrap();
/// assert_eq!(row.quality, "12450");
/// ```
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value)
        .ok_or_else(|| serde::de::Error::custom("expected a string or number scalar"))
}

/// Like [`lenient_string`], for fields annotated `#[serde(default)]`.
pub fn lenient_string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(value) => scalar_to_string(value)
            .ok_or_else(|| serde::de::Error::custom("expected a string or number scalar")),
        None => Ok(String::new()),
    }
}
