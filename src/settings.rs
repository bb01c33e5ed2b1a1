//! Sandbox settings
//!
//! Persisted in LocalStorage on the web; read from an optional JSON file by
//! the native binary. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{CIRCLE_SEGMENTS, GRAVITY, LAUNCH_SPEED};
use crate::platform::Margins;
use crate::renderer::{Color, palette};
use crate::sim::{BodyConfig, default_scene};

/// Sandbox settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Gravitational constant (simulation-tuned, not physical)
    pub gravity: f64,
    /// Speed of a launched body in pixels per frame
    pub launch_speed: f64,

    // === Display ===
    pub background: Color,
    /// Triangles per circle
    pub circle_segments: u32,
    /// Space left around the canvas
    pub layout: Margins,

    // === Run ===
    /// RNG seed for new body colors (time-based when absent)
    pub seed: Option<u64>,
    /// Bodies present at startup
    pub scene: Vec<BodyConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            launch_speed: LAUNCH_SPEED,

            background: palette::BACKGROUND,
            circle_segments: CIRCLE_SEGMENTS,
            layout: Margins::default(),

            seed: None,
            scene: default_scene(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "gravity_sandbox_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
