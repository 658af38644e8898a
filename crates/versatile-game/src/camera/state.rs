//! Mutable camera state and the idle auto-reset timer

use super::{CameraConfig, CameraMode};

/// Camera state owned by a single controller
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Active camera mode
    pub mode: CameraMode,
    /// A reset back behind the character is in progress
    pub is_resetting: bool,
    /// The current reset was triggered by idling
    pub is_auto_reset: bool,
    /// Clock reading of the last heading-affecting input
    pub last_movement_timestamp: f64,
    /// Current follow boom length
    pub current_zoom_distance: f32,
}

impl CameraState {
    /// Fresh state in the default mode
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            mode: CameraMode::ThirdPersonDefault,
            is_resetting: false,
            is_auto_reset: false,
            last_movement_timestamp: 0.0,
            current_zoom_distance: config.clamp_zoom(config.zoom_default),
        }
    }

    /// Note a heading-affecting input, pushing back the idle timeout
    pub fn record_activity(&mut self, now: f64) {
        self.last_movement_timestamp = now;
    }

    /// Whether the idle threshold has passed in smooth-follow mode
    pub fn check_idle(&self, now: f64, config: &CameraConfig) -> bool {
        config.auto_reset_when_idle
            && self.mode == CameraMode::ThirdPersonSmoothFollow
            && now > self.last_movement_timestamp + config.auto_reset_delay_seconds as f64
    }

    /// Start a reset, automatic or requested
    pub fn begin_reset(&mut self, automatic: bool) {
        self.is_resetting = true;
        self.is_auto_reset = automatic;
    }

    /// End any reset in progress
    pub fn clear_reset(&mut self) {
        self.is_resetting = false;
        self.is_auto_reset = false;
    }
}
