//! Character module
//!
//! Routes player input into the control rotation, the movement backend, and
//! the camera.

mod config;
mod controller;

pub use config::CharacterConfig;
pub use controller::Character;
