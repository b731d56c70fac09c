//! Custom serde deserializers for lenient data handling.
//!
//! The upstream datasets are not under our control, so these helpers turn
//! unexpected shapes into empty values instead of hard errors.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes any JSON value, keeping its elements if it is an array.
///
/// Anything else (object, string, number, `null`) becomes an empty vector.
///
/// # Examples
/// ```text
/// Input:  [{"asn": 1}, 2]
/// Output: vec![{"asn": 1}, 2]
///
/// Input:  {"asn": 1}
/// Output: vec![]
/// ```
pub fn array_or_empty<'a, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'a>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        other => {
            log::warn!(
                "Expected an array of records but found {}, treating it as empty",
                type_name(&other)
            );
            Ok(Vec::new())
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
