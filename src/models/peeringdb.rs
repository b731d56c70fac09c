use super::serde_helpers::array_or_empty;
use serde::Deserialize;
use serde_json::Value;

/// Response of the PeeringDB `net` endpoint.
///
/// Records are kept as raw JSON values so that a single odd record is skipped
/// on its own instead of failing the whole document.
#[derive(Debug, Deserialize, Default)]
pub struct NetworkList {
    #[serde(default, deserialize_with = "array_or_empty")]
    pub data: Vec<Value>,
}
