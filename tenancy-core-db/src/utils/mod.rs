use serde::de::DeserializeOwned;
use serde::Serialize;
use tenancy_core_api::{ModelError, ModelResult};

/// Encodes a record as a JSON document for the persistence layer.
pub fn to_json<T: Serialize>(record: &T) -> ModelResult<String> {
    serde_json::to_string(record).map_err(|e| ModelError::Serialization(e.to_string()))
}

/// Decodes a record from a JSON document.
///
/// Audit attributes missing from the payload decode as empty strings; all
/// other missing fields decode as absent. Tenant links are never decoded.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> ModelResult<T> {
    serde_json::from_str(payload).map_err(|e| {
        tracing::debug!(error = %e, "failed to decode record payload");
        ModelError::Deserialization(e.to_string())
    })
}
