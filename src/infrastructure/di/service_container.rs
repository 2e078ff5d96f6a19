//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{AnalysisService, CollectorService};
use crate::config::Settings;
use crate::infrastructure::engine::GeoOverlayEngine;
use crate::infrastructure::store::GeoJsonStore;
use crate::infrastructure::traits::{LayerStore, OverlayEngine, Prompter, StdinPrompter};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Interactive input collection
    pub collector: CollectorService,

    /// Overlay + scoring pipeline
    pub analysis: AnalysisService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(StdinPrompter),
            Arc::new(GeoJsonStore),
            Arc::new(GeoOverlayEngine),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        prompter: Arc<dyn Prompter>,
        store: Arc<dyn LayerStore>,
        engine: Arc<dyn OverlayEngine>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            collector: CollectorService::new(Arc::clone(&prompter)),
            analysis: AnalysisService::new(Arc::clone(&settings), store, engine),
            settings,
        }
    }
}
