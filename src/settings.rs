//! User preferences
//!
//! Gameplay tuning is fixed in [`crate::consts`]; these are the knobs a
//! player or a test harness is allowed to turn. Stored as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Debug ===
    /// Ask the host to draw physics bodies
    pub debug_bodies: bool,

    // === Run ===
    /// Fixed run seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            debug_bodies: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "CARROT_HOP_SETTINGS";

    /// Effective cue volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from the file named by `CARROT_HOP_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
