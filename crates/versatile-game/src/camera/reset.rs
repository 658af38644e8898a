//! Reset convergence: swing the camera back behind the character

use versatile_core::heading::{shortest_yaw_correction, wrap_yaw};

/// Correction from mesh forward to the character's logical facing, in degrees
pub const MESH_FACING_CORRECTION: f32 = 90.0;

/// Remaining divergence at which a reset counts as finished, in degrees
pub const RESET_TOLERANCE: f32 = 1.0;

/// Outcome of one reset tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResetStep {
    /// Camera is behind the character; the reset is over
    Converged,
    /// Yaw to add this tick
    Turn(f32),
}

/// Logical facing of the character from its mesh forward yaw
pub fn facing_yaw(mesh_forward_yaw: f32) -> f32 {
    wrap_yaw(mesh_forward_yaw + MESH_FACING_CORRECTION)
}

/// One tick of first-order convergence toward `facing`.
///
/// Only yaw is corrected; the controller keeps its pitch.
pub fn reset_step(facing: f32, controller_yaw: f32, dt: f32, speed: f32) -> ResetStep {
    let delta = shortest_yaw_correction(controller_yaw, facing);
    if delta.abs() <= RESET_TOLERANCE {
        ResetStep::Converged
    } else {
        ResetStep::Turn(delta * dt.max(0.0) * speed)
    }
}
