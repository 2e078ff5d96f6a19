//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::error::StoreError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// The message shown to the user. Three recognized failure kinds:
    /// a bad weight entry gets the fixed parse message, engine and
    /// store diagnostics are relayed verbatim, everything else gets
    /// the generic message.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Application(ApplicationError::Domain(
                DomainError::WeightNotNumeric { .. },
            )) => "Weight must be a number".to_string(),
            CliError::Application(ApplicationError::Engine(e)) => e.to_string(),
            CliError::Application(ApplicationError::Store(e)) => e.to_string(),
            CliError::InvalidArgs(_) => self.to_string(),
            _ => "There was an unexpected error".to_string(),
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::Engine(_) => crate::exitcode::SOFTWARE,
                ApplicationError::Store(StoreError::Io { .. }) => crate::exitcode::IOERR,
                ApplicationError::Store(_) => crate::exitcode::DATAERR,
                ApplicationError::Prompt { .. } => crate::exitcode::IOERR,
                ApplicationError::EmptyLayerName => crate::exitcode::USAGE,
                ApplicationError::EmptyOutputName => crate::exitcode::USAGE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_parse_failure_maps_to_fixed_message() {
        let err = CliError::Application(
            DomainError::WeightNotNumeric {
                input: "abc".to_string(),
            }
            .into(),
        );
        assert_eq!(err.user_message(), "Weight must be a number");
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn engine_failures_are_relayed_verbatim() {
        let err = CliError::Application(
            crate::infrastructure::error::EngineError::EmptyLayer("swamp".to_string()).into(),
        );
        assert_eq!(err.user_message(), "layer \"swamp\" contains no polygon geometry");
    }

    #[test]
    fn other_failures_get_the_generic_message() {
        let err = CliError::Application(ApplicationError::Prompt {
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed"),
        });
        assert_eq!(err.user_message(), "There was an unexpected error");
    }
}
