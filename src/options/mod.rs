//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (palette, scene geometry, camera, lighting,
//! section transitions, debug panel) are consolidated here. Options
//! serialize to/from TOML for presets stored in `assets/presets/`, and
//! from JSON for the web build's `data-options` attribute.

mod camera;
mod debug;
mod lighting;
mod palette;
mod scene;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use lighting::LightingOptions;
pub use palette::PaletteOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::ScrollscapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[palette]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Material and per-section colors.
    pub palette: PaletteOptions,
    /// Scene layout and particle cloud parameters.
    #[schemars(skip)]
    pub scene: SceneOptions,
    /// Camera projection and parallax parameters.
    pub camera: CameraOptions,
    /// Directional light and toon shading parameters.
    pub lighting: LightingOptions,
    /// Section transition tween parameters.
    #[schemars(skip)]
    pub transition: TransitionOptions,
    /// Developer-only debug panel toggles.
    pub debug: DebugOptions,
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
    /// Returns [`ScrollscapeError::Io`] if the file cannot be read and
    /// [`ScrollscapeError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ScrollscapeError> {
        let content =
            std::fs::read_to_string(path).map_err(ScrollscapeError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, ScrollscapeError> {
        toml::from_str(content)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))
    }

    /// Parse options from a JSON string (the web `data-options`
    /// attribute). Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::OptionsParse`] on malformed input.
    pub fn from_json(content: &str) -> Result<Self, ScrollscapeError> {
        serde_json::from_str(content)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))
    }

    /// Serialize to pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::OptionsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ScrollscapeError> {
        toml::to_string_pretty(self)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError`] if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), ScrollscapeError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ScrollscapeError::Io)?;
        }
        std::fs::write(path, content).map_err(ScrollscapeError::Io)
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
