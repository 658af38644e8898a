//! Core types shared by the camera and character

use glam::Vec2;

use crate::heading::{right_of_yaw, wrap_yaw, yaw_to_direction};

/// Control rotation of the possessing controller, in degrees.
///
/// Yaw accumulates and is kept wrapped to [0, 360). Pitch is clamped to the
/// configured limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotator {
    pub yaw: f32,
    pub pitch: f32,
    pitch_min: f32,
    pitch_max: f32,
}

impl Default for Rotator {
    fn default() -> Self {
        Self::new(-89.0, 89.0)
    }
}

impl Rotator {
    /// Create a level rotator facing yaw 0 with the given pitch limits
    pub fn new(pitch_min: f32, pitch_max: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            pitch_min: pitch_min.min(pitch_max),
            pitch_max: pitch_max.max(pitch_min),
        }
    }

    /// Accumulate a yaw command for this tick
    pub fn add_yaw_input(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            return;
        }
        self.yaw = wrap_yaw(self.yaw + degrees);
    }

    /// Accumulate a pitch command for this tick
    pub fn add_pitch_input(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            return;
        }
        self.pitch = (self.pitch + degrees).clamp(self.pitch_min, self.pitch_max);
    }

    /// Set the yaw directly (spawn/teleport)
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_yaw(yaw);
    }

    /// Forward axis of the yaw-only frame
    pub fn forward(&self) -> Vec2 {
        yaw_to_direction(self.yaw)
    }

    /// Right axis of the yaw-only frame
    pub fn right(&self) -> Vec2 {
        right_of_yaw(self.yaw)
    }
}
