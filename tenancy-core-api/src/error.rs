use thiserror::Error;

/// Errors raised while moving records across the persistence boundary.
///
/// Record accessors never fail; only encoding and decoding do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
