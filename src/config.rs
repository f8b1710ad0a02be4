//! Settings for the legend export tool.
//!
//! Settings are stored as JSON. Missing fields take their defaults, so a file
//! containing only `{"scheme": "RdYlGn"}` is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scheme::SCHEME_SPECTRAL;
use crate::stops::DEFAULT_MAX_MINUTES;

const CONFIG_DIR: &str = "transit-palette";
const CONFIG_FILE: &str = "config.json";

/// Export settings. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Name of the gradient scheme to export.
    pub scheme: String,
    /// Upper end of the travel-time axis, in minutes.
    pub max_minutes: f64,
    /// Number of ramp samples in the continuous legend.
    pub samples: usize,
    /// Drawn for lines missing from the rail colour table.
    pub fallback_rail_color: [u8; 3],
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scheme: SCHEME_SPECTRAL.name.to_string(),
            max_minutes: DEFAULT_MAX_MINUTES,
            samples: 16,
            fallback_rail_color: [128, 128, 128],
        }
    }
}

impl ExportConfig {
    /// Default location: `<config dir>/transit-palette/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Reads settings from `path`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Reads settings from the default location, falling back to defaults when
    /// the file is missing or invalid.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_path(&path).unwrap_or_else(|e| {
            log::warn!("{:#}; using default settings", e);
            Self::default()
        })
    }

    /// Writes settings as pretty JSON, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
