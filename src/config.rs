use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::traits::Button;

/// Player movement tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Walking speed in units per second; running doubles it
    pub speed: f32,
    /// Downward bias that keeps the body on slopes and ledges
    pub gravity: f32,
    /// Maximum turn rate in degrees per second
    pub rotation_speed: f32,
    /// Modifier held to run
    pub run_button: Button,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: 10.0,
            gravity: 100.0,
            rotation_speed: 360.0,
            run_button: Button::Shift,
        }
    }
}

impl PlayerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("player.speed", self.speed)?;
        non_negative("player.gravity", self.gravity)?;
        non_negative("player.rotation_speed", self.rotation_speed)?;
        Ok(())
    }
}

/// Top-down camera tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Follow speed; the lerp factor per frame is `speed * dt`
    pub speed: f32,
    /// Height above and distance behind the target
    pub distance: f32,
    /// Pitch around the X axis in degrees
    pub rotation: f32,
    /// Fade objects that sit between the camera and the target
    pub fade_objects: bool,
    /// Alpha applied to faded objects
    pub alpha: f32,
    /// Length of the occlusion ray
    pub max_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            speed: 10.0,
            distance: 15.0,
            rotation: 45.0,
            fade_objects: true,
            alpha: 0.3,
            max_distance: 100.0,
        }
    }
}

impl CameraSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("camera.speed", self.speed)?;
        non_negative("camera.distance", self.distance)?;
        non_negative("camera.max_distance", self.max_distance)?;
        if !self.rotation.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "camera.rotation",
                value: self.rotation,
            });
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::OutOfUnitRange {
                field: "camera.alpha",
                value: self.alpha,
            });
        }
        Ok(())
    }
}

/// Complete tunable set, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub camera: CameraSettings,
}

impl Settings {
    /// Load and validate settings from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))?;
        settings.validate()?;
        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("Failed to write settings file: {:?}", path))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        self.camera.validate()
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
