//! Error types for the integration pack.

use thiserror::Error;
use tpk_engine::EngineError;

/// Result type alias for integration operations.
pub type IntegrationResult<T> = Result<T, IntegrationError>;

/// Errors that can occur while loading or resolving integrations.
#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Unknown integration: {0}")]
    Unknown(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
