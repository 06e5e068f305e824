//! User settings - cosmetic options persisted as JSON in the config dir.
//!
//! Settings never change engine semantics (zoom steps and clamp bounds are
//! fixed); they only affect presentation. Missing or malformed files fall
//! back to defaults rather than erroring.

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::settings_watcher::default_settings_path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show the id label inside each tracking dot
    pub show_point_labels: bool,
    /// Show rounded coordinates next to each dot
    pub show_coordinates: bool,
    /// Dark canvas background behind the image
    pub dark_canvas: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_point_labels: true,
            show_coordinates: false,
            dark_canvas: true,
        }
    }
}

impl Settings {
    /// Load settings from the config directory, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed settings file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write settings back to the config directory.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = default_settings_path().context("no config directory available")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
