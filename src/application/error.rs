//! Application-level errors (wraps domain and infrastructure errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::error::{EngineError, StoreError};

/// Application errors wrap the lower layers and add orchestration
/// concerns. The CLI maps these onto the three user-facing failure
/// messages.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("failed to read user input: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    #[error("layer name must not be empty")]
    EmptyLayerName,

    #[error("output name must not be empty")]
    EmptyOutputName,

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
