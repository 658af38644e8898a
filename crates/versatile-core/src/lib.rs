//! Versatile Core - Core types and utilities for the Versatile camera
//!
//! This crate provides the foundational types used by the game crate:
//! - Mathematical primitives (re-exported from glam)
//! - Heading math for yaw-only camera control
//! - Control rotation accumulated from yaw/pitch commands
//! - Time system supplying tick deltas and a monotonic clock

pub mod heading;
pub mod time;
pub mod types;

pub use glam::Vec2;
pub use heading::{
    direction_to_yaw, normalize_yaw_delta, right_of_yaw, shortest_yaw_correction, wrap_yaw,
    yaw_to_direction,
};
pub use time::{GameTime, TimeConfig};
pub use types::Rotator;
