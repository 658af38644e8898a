//! Settings with persistence
//!
//! Settings are saved to `~/.config/versatile/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use versatile_core::TimeConfig;
use versatile_game::{CameraConfig, CharacterConfig};

/// All tunable settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub camera: CameraConfig,
    pub character: CharacterConfig,
    pub time: TimeConfig,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("versatile"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found at {:?}, using defaults", path);
            return Self::default();
        }

        let settings = match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<GameSettings>(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        };
        settings.sanitized()
    }

    /// Replace camera tunables that fail validation with defaults
    fn sanitized(mut self) -> Self {
        if let Err(e) = self.camera.validate() {
            warn!("Invalid camera settings: {}, using default camera", e);
            self.camera = CameraConfig::default();
        }
        self
    }

    /// Save settings to a file, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::settings_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)
    }
}
