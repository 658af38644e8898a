/// Errors raised by the camera state machine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("invalid camera mode index: {0}")]
    InvalidMode(u8),
}

/// Errors raised when validating camera tunables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("camera setting '{0}' must be a finite number")]
    NotFinite(&'static str),

    #[error("camera setting '{0}' must not be negative (got {1})")]
    Negative(&'static str, f32),

    #[error("zoom minimum {min} is greater than zoom maximum {max}")]
    InvertedZoomBounds { min: f32, max: f32 },

    #[error("default zoom {value} lies outside [{min}, {max}]")]
    DefaultZoomOutOfBounds { value: f32, min: f32, max: f32 },
}
