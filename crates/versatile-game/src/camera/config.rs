//! Camera configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Camera tunables, fixed at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Smooth follow turn speed
    pub follow_turn_rate: f32,
    /// Shapes the smooth follow response against divergence angle
    pub follow_turn_angle_exponent: f32,
    /// Convergence rate for a requested reset
    pub reset_speed: f32,
    /// Convergence rate for an idle-triggered reset
    pub auto_reset_speed: f32,
    /// Whether smooth follow recenters behind the character after idling
    pub auto_reset_when_idle: bool,
    /// Idle time before an automatic reset, in seconds
    pub auto_reset_delay_seconds: f32,
    /// Minimum boom length for follow cameras
    pub zoom_min: f32,
    /// Maximum boom length for follow cameras
    pub zoom_max: f32,
    /// Boom length change per zoom step
    pub zoom_increment: f32,
    /// Boom length at spawn
    pub zoom_default: f32,
    /// Fixed boom length of the over-shoulder camera
    pub over_shoulder_boom_length: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_turn_rate: 0.3,
            follow_turn_angle_exponent: 0.25,
            reset_speed: 1.0,
            auto_reset_speed: 0.15,
            auto_reset_when_idle: true,
            auto_reset_delay_seconds: 2.5,
            zoom_min: 100.0,
            zoom_max: 600.0,
            zoom_increment: 20.0,
            zoom_default: 300.0,
            over_shoulder_boom_length: 75.0,
        }
    }
}

impl CameraConfig {
    /// Check that every tunable is usable by the tick logic
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("follow_turn_rate", self.follow_turn_rate),
            ("follow_turn_angle_exponent", self.follow_turn_angle_exponent),
            ("reset_speed", self.reset_speed),
            ("auto_reset_speed", self.auto_reset_speed),
            ("auto_reset_delay_seconds", self.auto_reset_delay_seconds),
            ("zoom_min", self.zoom_min),
            ("zoom_max", self.zoom_max),
            ("zoom_increment", self.zoom_increment),
            ("zoom_default", self.zoom_default),
            ("over_shoulder_boom_length", self.over_shoulder_boom_length),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
            if value < 0.0 {
                return Err(ConfigError::Negative(name, value));
            }
        }

        if self.zoom_min > self.zoom_max {
            return Err(ConfigError::InvertedZoomBounds {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        if !(self.zoom_min..=self.zoom_max).contains(&self.zoom_default) {
            return Err(ConfigError::DefaultZoomOutOfBounds {
                value: self.zoom_default,
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        Ok(())
    }

    /// Clamp a boom length into the zoom bounds.
    ///
    /// Inverted bounds are swapped and a NaN bound is ignored, so an
    /// unvalidated config never panics here.
    pub fn clamp_zoom(&self, distance: f32) -> f32 {
        let lo = self.zoom_min.min(self.zoom_max);
        let hi = self.zoom_max.max(self.zoom_min);
        distance.max(lo).min(hi)
    }
}
