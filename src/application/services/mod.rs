//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (Prompter, LayerStore,
//! OverlayEngine) but are themselves concrete structs, not traits.

mod analysis;
mod collector;

pub use analysis::{AnalysisReport, AnalysisService};
pub use collector::CollectorService;
