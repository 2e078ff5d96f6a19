//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("weight is not a number: {input:?}")]
    WeightNotNumeric { input: String },

    #[error("at least two layers are required, got {count}")]
    TooFewLayers { count: usize },

    #[error("coverage arity mismatch: {coverage} indicators for {bindings} layer bindings")]
    CoverageArity { coverage: usize, bindings: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
