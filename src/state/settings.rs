use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Default location of the settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "sensor-chart.json";

/// User-tunable settings for the chart shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Label of the plotted series, also used as the y-axis legend.
    pub series_id: String,
    /// Unit appended to values in the tooltip.
    pub unit: String,
    pub width: f32,
    pub height: f32,
    /// Line and legend color while the pointer is over the chart.
    pub primary: [u8; 4],
    /// Line and legend color while idle.
    pub dark: [u8; 4],
    /// Number of readings in the built-in sample dataset.
    pub sample_points: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            series_id: "Temperature".to_string(),
            unit: "°C".to_string(),
            width: 620.0,
            height: 240.0,
            primary: [2, 158, 116, 255],
            dark: [0, 0, 0, 77],
            sample_points: 48,
        }
    }
}

impl AppSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path` if it exists, falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                tracing::info!("Settings loaded from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file {:?}: {e}", path);
                Self::default()
            }
        }
    }
}
