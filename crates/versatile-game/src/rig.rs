//! Character rig: the movement and presentation backend the camera drives
//!
//! The engine owns meshes, cameras and locomotion. The camera only issues
//! fire-and-forget commands through [`CharacterRig`] and reads back the body
//! mesh heading.

use std::collections::HashSet;

use glam::Vec2;
use versatile_core::heading::{direction_to_yaw, shortest_yaw_correction, wrap_yaw};

use crate::camera::ActiveCamera;

/// Yaw of the body mesh relative to the character's logical facing.
///
/// The mesh is authored facing +Y, a quarter turn off the facing axis.
pub const MESH_YAW_OFFSET: f32 = -90.0;

/// Movement and presentation sinks for one character
pub trait CharacterRig {
    /// Turn the body toward the direction of movement
    fn set_orient_rotation_to_movement(&mut self, orient: bool);

    /// Add planar movement input for this tick
    fn add_movement_input(&mut self, direction: Vec2, scale: f32);

    fn jump(&mut self);

    fn stop_jumping(&mut self);

    /// World yaw of the body mesh's forward axis, in degrees
    fn mesh_forward_yaw(&self) -> f32;

    /// Activate or deactivate one of the character's cameras
    fn set_camera_active(&mut self, camera: ActiveCamera, active: bool);

    fn set_arms_visible(&mut self, visible: bool);

    /// Hide the body mesh from its owner (other players still see it)
    fn set_body_owner_no_see(&mut self, hidden: bool);

    /// Set the boom length carrying the given camera
    fn set_boom_length(&mut self, camera: ActiveCamera, length: f32);

    /// Called once the character finished its tick
    fn end_tick(&mut self, _dt: f32) {}
}

/// In-memory rig that records every command.
///
/// Integrates body yaw toward the movement direction at a fixed rotation
/// rate when orient-to-movement is on.
#[derive(Debug, Clone)]
pub struct SimulatedRig {
    /// Body turns toward movement
    pub orient_rotation_to_movement: bool,
    /// Currently active cameras
    pub active_cameras: HashSet<ActiveCamera>,
    pub arms_visible: bool,
    pub body_owner_no_see: bool,
    /// Follow camera boom length
    pub follow_boom_length: f32,
    /// Over-shoulder camera boom length
    pub shoulder_boom_length: f32,
    /// Logical facing of the character body
    pub body_yaw: f32,
    /// Body rotation rate in degrees per second
    pub rotation_rate: f32,
    /// Whether a jump is being held
    pub jumping: bool,
    /// Number of jumps started
    pub jump_count: u32,
    /// Movement input accumulated this tick
    pending_movement: Vec2,
}

impl Default for SimulatedRig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedRig {
    pub fn new() -> Self {
        Self {
            orient_rotation_to_movement: false,
            active_cameras: HashSet::new(),
            arms_visible: false,
            body_owner_no_see: false,
            follow_boom_length: 0.0,
            shoulder_boom_length: 0.0,
            body_yaw: 0.0,
            rotation_rate: 540.0,
            jumping: false,
            jump_count: 0,
            pending_movement: Vec2::ZERO,
        }
    }

    /// Check whether a camera is active
    pub fn is_active(&self, camera: ActiveCamera) -> bool {
        self.active_cameras.contains(&camera)
    }

    /// Movement input accumulated since the last tick
    pub fn pending_movement(&self) -> Vec2 {
        self.pending_movement
    }
}

impl CharacterRig for SimulatedRig {
    fn set_orient_rotation_to_movement(&mut self, orient: bool) {
        self.orient_rotation_to_movement = orient;
    }

    fn add_movement_input(&mut self, direction: Vec2, scale: f32) {
        self.pending_movement += direction * scale;
    }

    fn jump(&mut self) {
        if !self.jumping {
            self.jump_count += 1;
        }
        self.jumping = true;
    }

    fn stop_jumping(&mut self) {
        self.jumping = false;
    }

    fn mesh_forward_yaw(&self) -> f32 {
        wrap_yaw(self.body_yaw + MESH_YAW_OFFSET)
    }

    fn set_camera_active(&mut self, camera: ActiveCamera, active: bool) {
        if active {
            self.active_cameras.insert(camera);
        } else {
            self.active_cameras.remove(&camera);
        }
    }

    fn set_arms_visible(&mut self, visible: bool) {
        self.arms_visible = visible;
    }

    fn set_body_owner_no_see(&mut self, hidden: bool) {
        self.body_owner_no_see = hidden;
    }

    fn set_boom_length(&mut self, camera: ActiveCamera, length: f32) {
        match camera {
            ActiveCamera::Follow => self.follow_boom_length = length,
            ActiveCamera::OverShoulder => self.shoulder_boom_length = length,
            ActiveCamera::FirstPerson => {}
        }
    }

    fn end_tick(&mut self, dt: f32) {
        let movement = std::mem::take(&mut self.pending_movement);
        if !self.orient_rotation_to_movement {
            return;
        }
        let Some(target) = direction_to_yaw(movement) else {
            return;
        };

        let delta = shortest_yaw_correction(self.body_yaw, target);
        let max_step = self.rotation_rate * dt.max(0.0);
        let step = delta.clamp(-max_step, max_step);
        self.body_yaw = wrap_yaw(self.body_yaw + step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_forward_is_offset_from_body() {
        let mut rig = SimulatedRig::new();
        rig.body_yaw = 10.0;
        assert!((rig.mesh_forward_yaw() - 280.0).abs() < 1e-4);
    }

    #[test]
    fn test_body_turns_toward_movement_at_rotation_rate() {
        let mut rig = SimulatedRig::new();
        rig.set_orient_rotation_to_movement(true);
        rig.add_movement_input(Vec2::Y, 1.0);
        rig.end_tick(0.1);
        assert!((rig.body_yaw - 54.0).abs() < 1e-3);
        assert_eq!(rig.pending_movement(), Vec2::ZERO);

        rig.add_movement_input(Vec2::Y, 1.0);
        rig.end_tick(1.0);
        assert!((rig.body_yaw - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_body_holds_without_orientation() {
        let mut rig = SimulatedRig::new();
        rig.add_movement_input(Vec2::Y, 1.0);
        rig.end_tick(0.1);
        assert_eq!(rig.body_yaw, 0.0);
    }

    #[test]
    fn test_jump_counts_presses() {
        let mut rig = SimulatedRig::new();
        rig.jump();
        rig.jump();
        rig.stop_jumping();
        rig.jump();
        assert_eq!(rig.jump_count, 2);
        assert!(rig.jumping);
    }
}
