//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/polysuit/polysuit.toml`
//! 3. Environment variables: `POLYSUIT_*` prefix
//! 4. CLI `-C/--workspace` override
//!
//! The workspace is always an explicit setting; no component reads or
//! mutates the process current directory.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory where layer files are discovered and the output is written
    pub workspace_dir: PathBuf,
    /// File extension of layer datasets
    pub layer_extension: String,
    /// Name of the summed suitability property on output fragments
    pub suitability_field: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::from("."),
            layer_extension: "geojson".to_string(),
            suitability_field: "suitability".to_string(),
        }
    }
}

impl Settings {
    /// Path of the global config file, if a home directory exists.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "polysuit").map(|dirs| dirs.config_dir().join("polysuit.toml"))
    }

    /// Load settings with the standard layering.
    pub fn load(workspace_override: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_file(Self::global_config_path().as_deref(), workspace_override)
    }

    /// Load settings from an explicit config file (test seam).
    pub fn load_with_file(
        config_file: Option<&Path>,
        workspace_override: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default(
                "workspace_dir",
                defaults.workspace_dir.to_string_lossy().into_owned(),
            )?
            .set_default("layer_extension", defaults.layer_extension)?
            .set_default("suitability_field", defaults.suitability_field)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("POLYSUIT"));

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if let Some(workspace) = workspace_override {
            settings.workspace_dir = workspace.to_path_buf();
        }
        Ok(settings)
    }
}
