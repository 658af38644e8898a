//! Camera system module
//!
//! Provides four camera modes, smooth follow behind the direction of travel,
//! and an idle-triggered reset back behind the character.

mod config;
mod controller;
pub mod follow;
mod mode;
pub mod reset;
mod state;

pub use config::CameraConfig;
pub use controller::CameraController;
pub use mode::{side_effects_for, ActiveCamera, CameraMode, ModeEffects};
pub use state::CameraState;
