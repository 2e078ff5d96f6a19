//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::{Path, PathBuf};

use geo::MultiPolygon;

use crate::domain::{MergedLayer, ScoredLayer, SourceLayer};
use crate::infrastructure::error::{EngineResult, StoreResult};

/// Interactive input abstraction.
pub trait Prompter: Send + Sync {
    /// Show `message` and return the user's answer, trimmed.
    /// Closed stdin surfaces as an `UnexpectedEof` error.
    fn input(&self, message: &str) -> io::Result<String>;
}

/// Stdin-backed prompter.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn input(&self, message: &str) -> io::Result<String> {
        crate::cli::output::prompt(message);
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Persistence boundary for layer datasets.
pub trait LayerStore: Send + Sync {
    /// List the layer files directly inside `dir`, sorted by name.
    fn list_layers(&self, dir: &Path, extension: &str) -> StoreResult<Vec<PathBuf>>;

    /// Load all polygon geometry of one layer file.
    fn load(&self, path: &Path) -> StoreResult<MultiPolygon<f64>>;

    /// Write the scored dataset in one shot.
    fn write_scored(
        &self,
        path: &Path,
        scored: &ScoredLayer,
        suitability_field: &str,
    ) -> StoreResult<()>;

    /// Resolve a user-entered layer name against the workspace,
    /// appending the default extension when none was given.
    fn resolve(&self, dir: &Path, name: &str, extension: &str) -> PathBuf {
        let mut path = dir.join(name);
        if path.extension().is_none() {
            path.set_extension(extension);
        }
        path
    }
}

/// The external geometry capability: given N polygon layers, return
/// the planar partition into fragments, each tagged with which inputs
/// cover it.
pub trait OverlayEngine: Send + Sync {
    fn union(&self, layers: &[SourceLayer]) -> EngineResult<MergedLayer>;
}
