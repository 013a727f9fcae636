//! Semantic emptiness of JSON values.
//!
//! Used to prune placeholder fields before a snapshot leaves the pipeline.

use serde_json::{Map, Value};

/// Returns `true` when `value` carries no meaningful content.
///
/// - `null` is empty
/// - a boolean is empty iff `false`
/// - a number is empty iff it is exactly zero
/// - a string is empty iff it has zero length
/// - an array is empty iff it has no elements or its *first* element is empty
/// - an object is empty iff it has no keys or every value is empty
///
/// Arrays are inspected shallowly: only the first element decides. Placeholder
/// lists from the upstream API carry a single default-constructed element, and
/// pruning relies on exactly this check.
///
/// # Examples
///
/// ```
/// use jx3calc_domain::common::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!([0])));
/// assert!(is_empty(&json!({"a": 0, "b": ""})));
/// assert!(!is_empty(&json!({"a": 1})));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.first().map_or(true, is_empty),
        Value::Object(map) => map.values().all(is_empty),
    }
}

/// Returns `true` when `key` is absent from `map` or maps to an empty value.
pub fn check_key_empty(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).map_or(true, is_empty)
}
