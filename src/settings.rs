//! Game settings and preferences
//!
//! Persisted as JSON next to the high scores. A missing or malformed file
//! falls back to defaults and is rewritten in place.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Pan the camera to a turret when it becomes active
    pub turret_focus: bool,
    /// Camera pan speed (scaled ×10 into world units per tick)
    pub pan_speed: f32,
    /// Camera zoom speed per wheel notch
    pub zoom_speed: f32,
    /// Fullscreen window
    pub fullscreen: bool,
    /// Sound effects volume (0.0 - 1.0)
    pub sound_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            turret_focus: true,
            pan_speed: 0.6,
            zoom_speed: 0.1,
            fullscreen: true,
            sound_volume: 1.0,
            music_volume: 1.0,
        }
    }
}

impl Settings {
    /// Load settings from disk. Any failure logs, rewrites the file with
    /// defaults, and returns them - settings are never a fatal error.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("invalid settings file ({err}), rewriting defaults");
                    let settings = Self::default();
                    settings.save(path);
                    settings
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, creating one", path.display());
                let settings = Self::default();
                settings.save(path);
                settings
            }
        }
    }

    /// Save settings to disk. Failures are logged, never propagated.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to save settings: {err}");
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }

    /// Clamp volume fields into range after UI edits.
    pub fn clamp_volumes(&mut self) {
        self.sound_volume = self.sound_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
    }
}
