//! polysuit: weighted suitability analysis for polygon vector layers
//!
//! Collects ≥2 polygon layers and per-layer weights, computes the
//! planar union overlay (geometric kernel delegated to `geo`), scores
//! every output fragment with the sum of the weights of the layers
//! covering it, and writes the scored dataset back to the workspace.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
