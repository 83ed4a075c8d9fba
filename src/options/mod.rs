//! Trackball configuration with TOML preset and JSON override support.
//!
//! [`TrackballOptions`] is the single immutable configuration a
//! [`Trackball`](crate::Trackball) is built from. Defaults come from its
//! `Default` impl; files and inline strings only need to carry the fields
//! they change.

mod trackball;

use std::path::Path;

pub use trackball::TrackballOptions;

use crate::error::TrackballError;

impl TrackballOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(TrackballOptions)
    }

    /// Parse a (possibly partial) TOML document. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, TrackballError> {
        toml::from_str(content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))
    }

    /// Parse a (possibly partial) JSON object. Missing fields use defaults.
    pub fn from_json_str(content: &str) -> Result<Self, TrackballError> {
        serde_json::from_str(content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TrackballError> {
        let content =
            std::fs::read_to_string(path).map_err(TrackballError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("Loaded trackball options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TrackballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrackballError::Io)?;
        }
        std::fs::write(path, content).map_err(TrackballError::Io)?;
        log::info!("Saved trackball options to {}", path.display());
        Ok(())
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
