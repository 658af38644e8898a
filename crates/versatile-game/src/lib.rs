//! Versatile Game - Character camera logic
//!
//! Provides the camera mode state machine, smooth follow, idle reset, the
//! character input handlers, and the rig seam to the engine.

pub mod camera;
pub mod character;
pub mod error;
pub mod input;
pub mod rig;

pub use camera::{
    side_effects_for, ActiveCamera, CameraConfig, CameraController, CameraMode, CameraState,
    ModeEffects,
};
pub use character::{Character, CharacterConfig};
pub use error::{CameraError, ConfigError};
pub use input::{InputAction, InputBindings, InputHandler, InputState};
pub use rig::{CharacterRig, SimulatedRig};
