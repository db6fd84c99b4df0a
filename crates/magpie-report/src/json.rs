//! JSON serialization of the data artifact.

use crate::data::DataArtifact;

/// Serialize the data artifact as pretty-printed JSON.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn to_json_pretty(data: &DataArtifact) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
