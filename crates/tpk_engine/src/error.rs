//! Error types for the engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while constructing definitions or formatting output.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid third-party definition: {0}")]
    InvalidDefinition(String),

    #[error("Malformed base URL '{url}': {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Attribute not set: {0}")]
    AttributeNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
