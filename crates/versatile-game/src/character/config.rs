//! Character input rates and view limits

use serde::{Deserialize, Serialize};

/// Character configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Base turn rate in degrees per second at full stick deflection
    pub base_turn_rate: f32,
    /// Base look up/down rate in degrees per second at full stick deflection
    pub base_look_up_rate: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
    /// Mouse sensitivity (degrees per pixel)
    pub mouse_sensitivity: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            base_turn_rate: 45.0,
            base_look_up_rate: 45.0,
            pitch_min: -89.0,
            pitch_max: 89.0,
            mouse_sensitivity: 0.15,
        }
    }
}

impl CharacterConfig {
    /// Yaw for this frame from a normalized turn rate
    pub fn turn_delta(&self, rate: f32, dt: f32) -> f32 {
        rate * self.base_turn_rate * dt
    }

    /// Pitch for this frame from a normalized look-up rate
    pub fn look_up_delta(&self, rate: f32, dt: f32) -> f32 {
        rate * self.base_look_up_rate * dt
    }
}
