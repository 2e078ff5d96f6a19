//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading).

pub mod entities;
pub mod error;
pub mod scoring;

/// Minimum number of input layers for a meaningful overlay.
pub const MIN_LAYERS: usize = 2;

pub use entities::*;
pub use error::{DomainError, DomainResult};
