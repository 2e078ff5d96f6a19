//! Infrastructure-level errors: geometry engine and layer store

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the overlay engine. These are relayed to the user
/// verbatim, so the messages name the offending layer.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("overlay requires at least two layers, got {0}")]
    TooFewLayers(usize),

    #[error("layer {0:?} contains no polygon geometry")]
    EmptyLayer(String),

    #[error("layer {layer:?} has invalid geometry: {reason}")]
    InvalidGeometry { layer: String, reason: String },
}

/// Result type for overlay engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors from reading or writing layer datasets. Also relayed to the
/// user verbatim.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("no polygon features found in {0}")]
    NoPolygons(PathBuf),

    #[error("unclosed ring in {0}")]
    RingNotClosed(PathBuf),
}

impl StoreError {
    /// Create an I/O error tagged with the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for layer store operations.
pub type StoreResult<T> = Result<T, StoreError>;
