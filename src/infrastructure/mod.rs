//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements the I/O boundary traits and wires up services.

pub mod di;
pub mod engine;
pub mod error;
pub mod store;
pub mod traits;

pub use engine::GeoOverlayEngine;
pub use error::{EngineError, EngineResult, StoreError, StoreResult};
pub use store::GeoJsonStore;
