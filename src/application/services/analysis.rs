//! Analysis pipeline service
//!
//! Orchestrates the forward path: load layer geometry, invoke the
//! overlay engine, score the merged fragments, write the output
//! dataset. The scored dataset is written in one shot after
//! aggregation succeeds, so a failed run leaves no partial output.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{scoring, DomainError, Layer, SourceLayer, MIN_LAYERS};
use crate::infrastructure::traits::{LayerStore, OverlayEngine};

/// Summary of one completed analysis, for the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Where the scored dataset was written
    pub output_path: PathBuf,
    /// Number of fragments in the planar partition
    pub fragment_count: usize,
    /// Number of input layers
    pub layer_count: usize,
}

/// Service running the overlay + scoring pipeline.
pub struct AnalysisService {
    settings: Arc<Settings>,
    store: Arc<dyn LayerStore>,
    engine: Arc<dyn OverlayEngine>,
}

impl AnalysisService {
    /// Create a new analysis service.
    pub fn new(
        settings: Arc<Settings>,
        store: Arc<dyn LayerStore>,
        engine: Arc<dyn OverlayEngine>,
    ) -> Self {
        Self {
            settings,
            store,
            engine,
        }
    }

    /// Layer files available in the workspace.
    pub fn available_layers(&self) -> ApplicationResult<Vec<PathBuf>> {
        Ok(self.store.list_layers(
            &self.settings.workspace_dir,
            &self.settings.layer_extension,
        )?)
    }

    /// Run the full pipeline and write the scored dataset into the
    /// workspace under `output_name`.
    pub fn run(&self, layers: &[Layer], output_name: &str) -> ApplicationResult<AnalysisReport> {
        if layers.len() < MIN_LAYERS {
            return Err(DomainError::TooFewLayers {
                count: layers.len(),
            }
            .into());
        }

        let sources = layers
            .iter()
            .map(|layer| {
                let path = self.store.resolve(
                    &self.settings.workspace_dir,
                    &layer.name,
                    &self.settings.layer_extension,
                );
                debug!(layer = %layer.name, path = %path.display(), "loading layer");
                let geometry = self.store.load(&path)?;
                Ok(SourceLayer {
                    layer: layer.clone(),
                    geometry,
                })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        let merged = self.engine.union(&sources)?;
        debug!(fragments = merged.fragments.len(), "overlay complete");

        let scored = scoring::score_layer(&merged)?;

        let output_path = self.store.resolve(
            &self.settings.workspace_dir,
            output_name,
            &self.settings.layer_extension,
        );
        self.store
            .write_scored(&output_path, &scored, &self.settings.suitability_field)?;

        Ok(AnalysisReport {
            output_path,
            fragment_count: scored.fragments.len(),
            layer_count: layers.len(),
        })
    }
}
