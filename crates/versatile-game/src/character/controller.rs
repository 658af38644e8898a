//! Character wrapper: input handlers, control rotation, and camera tick

use versatile_core::Rotator;

use crate::camera::{CameraConfig, CameraController, CameraMode};
use crate::error::CameraError;
use crate::input::{InputAction, InputState};
use crate::rig::{CharacterRig, SimulatedRig};

use super::CharacterConfig;

/// Player character owning its control rotation and camera
pub struct Character<R: CharacterRig = SimulatedRig> {
    /// Input rates and view limits
    pub config: CharacterConfig,
    /// Camera modes, smooth follow and reset
    camera: CameraController,
    /// Control rotation of the possessing controller
    rotation: Rotator,
    /// Movement and presentation backend
    rig: R,
}

impl<R: CharacterRig> Character<R> {
    /// Create a character with default config
    pub fn new(rig: R) -> Self {
        Self::with_config(CharacterConfig::default(), CameraConfig::default(), rig)
    }

    /// Create a character with custom config
    pub fn with_config(config: CharacterConfig, camera: CameraConfig, rig: R) -> Self {
        let rotation = Rotator::new(config.pitch_min, config.pitch_max);
        Self {
            config,
            camera: CameraController::with_config(camera),
            rotation,
            rig,
        }
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn rotation(&self) -> &Rotator {
        &self.rotation
    }

    /// Mutable control rotation, for spawn placement or external steering
    pub fn rotation_mut(&mut self) -> &mut Rotator {
        &mut self.rotation
    }

    pub fn rig(&self) -> &R {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut R {
        &mut self.rig
    }

    /// Apply the starting camera mode and start the idle clock
    pub fn on_spawn(&mut self, now: f64) {
        self.camera.on_spawn(&mut self.rig, now);
    }

    /// Forward/backward input along the camera's yaw
    pub fn move_forward(&mut self, value: f32, now: f64) {
        if value == 0.0 {
            return;
        }
        self.rig.add_movement_input(self.rotation.forward(), value);
        self.camera.record_activity(now);
    }

    /// Side to side input along the camera's yaw
    pub fn move_right(&mut self, value: f32, now: f64) {
        if value == 0.0 {
            return;
        }
        self.rig.add_movement_input(self.rotation.right(), value);
        self.camera.record_activity(now);
    }

    /// Turn at a normalized rate; 1.0 is the full base turn rate
    pub fn turn_at_rate(&mut self, rate: f32, dt: f32, now: f64) {
        if rate == 0.0 || self.camera.is_resetting() {
            return;
        }
        self.rotation.add_yaw_input(self.config.turn_delta(rate, dt));
        self.camera.record_activity(now);
    }

    /// Look up/down at a normalized rate; 1.0 is the full base look rate
    pub fn look_up_at_rate(&mut self, rate: f32, dt: f32, now: f64) {
        if rate == 0.0 {
            return;
        }
        self.rotation.add_pitch_input(self.config.look_up_delta(rate, dt));
        self.camera.record_activity(now);
    }

    /// Absolute yaw delta, e.g. from a mouse
    pub fn handle_yaw_input(&mut self, turn: f32, now: f64) {
        if turn == 0.0 || self.camera.is_resetting() {
            return;
        }
        self.rotation.add_yaw_input(turn);
        self.camera.record_activity(now);
    }

    /// Absolute pitch delta, e.g. from a mouse
    pub fn add_pitch_input(&mut self, pitch: f32) {
        self.rotation.add_pitch_input(pitch);
    }

    /// A touch began: jump
    pub fn touch_started(&mut self, now: f64) {
        self.rig.jump();
        self.camera.record_activity(now);
    }

    /// A touch ended: release the jump
    pub fn touch_stopped(&mut self, now: f64) {
        self.rig.stop_jumping();
        self.camera.record_activity(now);
    }

    pub fn cycle_camera(&mut self) -> CameraMode {
        self.camera.cycle_mode(&mut self.rig)
    }

    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.camera.set_mode(mode, &mut self.rig);
    }

    pub fn set_camera_mode_index(&mut self, index: u8) -> Result<CameraMode, CameraError> {
        self.camera.set_mode_index(index, &mut self.rig)
    }

    pub fn reset_camera(&mut self) {
        self.camera.request_reset();
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.camera.zoom_in(&mut self.rig)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.camera.zoom_out(&mut self.rig)
    }

    /// Route input for one simulation step of `dt` seconds ending at `now`,
    /// then run the camera tick
    pub fn on_tick(&mut self, input: &InputState, dt: f32, now: f64) {

        if input.is_just_pressed(InputAction::CycleCamera) {
            self.cycle_camera();
        }
        if input.is_just_pressed(InputAction::ResetCamera) {
            self.reset_camera();
        }
        if input.is_just_pressed(InputAction::ZoomIn) {
            self.zoom_in();
        }
        if input.is_just_pressed(InputAction::ZoomOut) {
            self.zoom_out();
        }

        if input.is_just_pressed(InputAction::Jump) {
            self.rig.jump();
        }
        if input.is_just_released(InputAction::Jump) {
            self.rig.stop_jumping();
        }
        if input.touch_started {
            self.touch_started(now);
        }
        if input.touch_stopped {
            self.touch_stopped(now);
        }

        let forward = input.forward_axis();
        let right = input.right_axis();
        self.move_forward(forward, now);
        self.move_right(right, now);

        if input.cursor_captured {
            let sensitivity = self.config.mouse_sensitivity;
            self.handle_yaw_input(input.mouse_delta.x * sensitivity, now);
            self.add_pitch_input(-input.mouse_delta.y * sensitivity);
        }
        self.turn_at_rate(input.turn_rate_axis(), dt, now);
        self.look_up_at_rate(input.look_up_rate_axis(), dt, now);

        self.camera
            .on_tick(dt, now, forward, right, &mut self.rotation, &self.rig);
        self.rig.end_tick(dt);
    }
}
