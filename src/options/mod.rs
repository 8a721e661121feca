//! Centralized viewer options with TOML preset support.
//!
//! Camera projection and orbit-control settings are consolidated here.
//! Options serialize to/from TOML for view presets, and expose a JSON
//! schema for UI surfaces.

mod camera;
mod controls;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Orbit control limits, speeds, and toggles.
    pub controls: ControlOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`OrreryError::Io`] on read failure, [`OrreryError::OptionsParse`]
    /// on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        log::info!("loaded options preset from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`OrreryError::OptionsParse`] on serialization failure,
    /// [`OrreryError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
