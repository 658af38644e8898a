//! Camera controller: mode state machine, zoom, and the smooth-follow tick

use versatile_core::Rotator;

use crate::error::CameraError;
use crate::rig::CharacterRig;

use super::follow::follow_correction;
use super::mode::{side_effects_for, ActiveCamera};
use super::reset::{facing_yaw, reset_step, ResetStep};
use super::{CameraConfig, CameraMode, CameraState};

/// Camera controller
#[derive(Debug, Clone)]
pub struct CameraController {
    /// Configuration
    config: CameraConfig,
    /// Mode, reset flags, idle timestamp and zoom
    state: CameraState,
}

impl CameraController {
    /// Create a new camera controller
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera controller with custom config.
    ///
    /// An invalid config is logged and used as is; zoom stays within the
    /// ordered bounds either way.
    pub fn with_config(config: CameraConfig) -> Self {
        if let Err(e) = config.validate() {
            tracing::warn!("Camera config is invalid: {}", e);
        }
        let state = CameraState::new(&config);
        Self { config, state }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn mode(&self) -> CameraMode {
        self.state.mode
    }

    pub fn is_resetting(&self) -> bool {
        self.state.is_resetting
    }

    /// Apply the starting mode's presentation and start the idle clock
    pub fn on_spawn<R: CharacterRig + ?Sized>(&mut self, rig: &mut R, now: f64) {
        self.state.record_activity(now);
        self.apply_mode_effects(rig);
    }

    /// Advance to the next mode, wrapping round
    pub fn cycle_mode<R: CharacterRig + ?Sized>(&mut self, rig: &mut R) -> CameraMode {
        let next = self.state.mode.next();
        self.set_mode(next, rig);
        next
    }

    /// Switch to `mode` and apply its presentation
    pub fn set_mode<R: CharacterRig + ?Sized>(&mut self, mode: CameraMode, rig: &mut R) {
        tracing::info!("Setting camera mode to {}", mode);
        self.state.mode = mode;
        self.apply_mode_effects(rig);
    }

    /// Switch mode by cycling index; an unknown index leaves everything as is
    pub fn set_mode_index<R: CharacterRig + ?Sized>(
        &mut self,
        index: u8,
        rig: &mut R,
    ) -> Result<CameraMode, CameraError> {
        let mode = CameraMode::try_from(index)?;
        self.set_mode(mode, rig);
        Ok(mode)
    }

    fn apply_mode_effects<R: CharacterRig + ?Sized>(&mut self, rig: &mut R) {
        let effects = side_effects_for(self.state.mode);
        if effects.clears_reset {
            self.state.clear_reset();
        }

        rig.set_orient_rotation_to_movement(effects.orient_rotation_to_movement);
        rig.set_arms_visible(effects.arms_visible);
        rig.set_body_owner_no_see(effects.body_owner_no_see);
        for camera in ActiveCamera::ALL {
            rig.set_camera_active(camera, camera == effects.camera);
        }
        rig.set_boom_length(ActiveCamera::Follow, self.state.current_zoom_distance);
        rig.set_boom_length(ActiveCamera::OverShoulder, self.config.over_shoulder_boom_length);
    }

    /// Ask smooth follow to swing back behind the character
    pub fn request_reset(&mut self) {
        if self.state.mode != CameraMode::ThirdPersonSmoothFollow {
            tracing::debug!("Ignoring camera reset in {}", self.state.mode);
            return;
        }
        tracing::debug!("Camera reset requested");
        self.state.begin_reset(false);
    }

    /// Note a heading-affecting input
    pub fn record_activity(&mut self, now: f64) {
        self.state.record_activity(now);
    }

    /// Whether the idle threshold has passed in smooth-follow mode
    pub fn check_idle(&self, now: f64) -> bool {
        self.state.check_idle(now, &self.config)
    }

    /// Pull the follow camera in by one step
    pub fn zoom_in<R: CharacterRig + ?Sized>(&mut self, rig: &mut R) -> f32 {
        self.set_zoom(self.state.current_zoom_distance - self.config.zoom_increment, rig)
    }

    /// Push the follow camera out by one step
    pub fn zoom_out<R: CharacterRig + ?Sized>(&mut self, rig: &mut R) -> f32 {
        self.set_zoom(self.state.current_zoom_distance + self.config.zoom_increment, rig)
    }

    /// Set the follow boom length, clamped to the zoom bounds
    pub fn set_zoom<R: CharacterRig + ?Sized>(&mut self, distance: f32, rig: &mut R) -> f32 {
        if !distance.is_finite() {
            return self.state.current_zoom_distance;
        }
        let clamped = self.config.clamp_zoom(distance);
        if clamped != self.state.current_zoom_distance {
            tracing::debug!("Camera zoom {} -> {}", self.state.current_zoom_distance, clamped);
        }
        self.state.current_zoom_distance = clamped;
        rig.set_boom_length(ActiveCamera::Follow, clamped);
        clamped
    }

    /// Per-tick camera update.
    ///
    /// Only smooth follow steers the camera; the other modes leave the
    /// control rotation to the player.
    pub fn on_tick<R: CharacterRig + ?Sized>(
        &mut self,
        dt: f32,
        now: f64,
        forward: f32,
        right: f32,
        rotation: &mut Rotator,
        rig: &R,
    ) {
        if self.state.mode != CameraMode::ThirdPersonSmoothFollow {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        // Stays armed every tick until a heading input is recorded
        if self.check_idle(now) {
            self.state.begin_reset(true);
        }
        if self.state.is_resetting {
            self.reset_tick(dt, rotation, rig);
            return;
        }

        let yaw = follow_correction(rotation.yaw, forward, right, dt, &self.config);
        if yaw != 0.0 {
            rotation.add_yaw_input(yaw);
        }
    }

    fn reset_tick<R: CharacterRig + ?Sized>(&mut self, dt: f32, rotation: &mut Rotator, rig: &R) {
        let speed = if self.state.is_auto_reset {
            self.config.auto_reset_speed
        } else {
            self.config.reset_speed
        };

        let facing = facing_yaw(rig.mesh_forward_yaw());
        match reset_step(facing, rotation.yaw, dt, speed) {
            ResetStep::Converged => {
                if !self.state.is_auto_reset {
                    tracing::debug!("Camera reset converged");
                }
                self.state.clear_reset();
            }
            ResetStep::Turn(yaw) => rotation.add_yaw_input(yaw),
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::SimulatedRig;
    use versatile_core::heading::shortest_yaw_correction;

    fn spawned(config: CameraConfig) -> (CameraController, SimulatedRig) {
        let mut camera = CameraController::with_config(config);
        let mut rig = SimulatedRig::new();
        camera.on_spawn(&mut rig, 0.0);
        (camera, rig)
    }

    fn assert_exclusive(rig: &SimulatedRig, expected: ActiveCamera) {
        assert_eq!(rig.active_cameras.len(), 1);
        assert!(rig.is_active(expected));
    }

    #[test]
    fn test_spawn_applies_default_mode() {
        let (camera, rig) = spawned(CameraConfig::default());
        assert_eq!(camera.mode(), CameraMode::ThirdPersonDefault);
        assert_exclusive(&rig, ActiveCamera::Follow);
        assert!(rig.orient_rotation_to_movement);
        assert!(!rig.arms_visible);
        assert_eq!(rig.follow_boom_length, 300.0);
        assert_eq!(rig.shoulder_boom_length, 75.0);
    }

    #[test]
    fn test_cycle_wraps_through_all_modes() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        let start = camera.mode();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(camera.cycle_mode(&mut rig));
        }
        assert_eq!(
            seen,
            vec![
                CameraMode::FirstPerson,
                CameraMode::ThirdPersonSmoothFollow,
                CameraMode::ThirdPersonOverShoulder,
                CameraMode::ThirdPersonDefault,
            ]
        );
        assert_eq!(camera.mode(), start);
    }

    #[test]
    fn test_set_mode_side_effects_are_exclusive() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        for mode in CameraMode::ALL {
            camera.set_mode(mode, &mut rig);
            let expected = side_effects_for(mode).camera;
            assert_exclusive(&rig, expected);
            assert_eq!(rig.arms_visible, mode == CameraMode::FirstPerson);
            assert_eq!(rig.body_owner_no_see, mode == CameraMode::FirstPerson);
        }
    }

    #[test]
    fn test_first_person_stops_orienting_to_movement() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.set_mode(CameraMode::FirstPerson, &mut rig);
        assert!(!rig.orient_rotation_to_movement);
        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        assert!(rig.orient_rotation_to_movement);
        camera.set_mode(CameraMode::ThirdPersonOverShoulder, &mut rig);
        assert!(!rig.orient_rotation_to_movement);
    }

    #[test]
    fn test_mode_change_clears_reset_except_smooth_follow() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        camera.request_reset();
        assert!(camera.is_resetting());

        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        assert!(camera.is_resetting());

        camera.set_mode(CameraMode::FirstPerson, &mut rig);
        assert!(!camera.is_resetting());
        assert!(!camera.state().is_auto_reset);
    }

    #[test]
    fn test_invalid_mode_index_leaves_state() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.set_mode(CameraMode::FirstPerson, &mut rig);
        let before = camera.state().clone();

        assert_eq!(
            camera.set_mode_index(9, &mut rig),
            Err(CameraError::InvalidMode(9))
        );
        assert_eq!(camera.state(), &before);
        assert_exclusive(&rig, ActiveCamera::FirstPerson);

        assert_eq!(
            camera.set_mode_index(3, &mut rig),
            Ok(CameraMode::ThirdPersonOverShoulder)
        );
    }

    #[test]
    fn test_request_reset_only_in_smooth_follow() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.request_reset();
        assert!(!camera.is_resetting());

        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        camera.request_reset();
        assert!(camera.is_resetting());
        assert!(!camera.state().is_auto_reset);
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        for _ in 0..100 {
            camera.zoom_out(&mut rig);
        }
        assert_eq!(camera.state().current_zoom_distance, 600.0);
        assert_eq!(rig.follow_boom_length, 600.0);

        for _ in 0..100 {
            camera.zoom_in(&mut rig);
        }
        assert_eq!(camera.state().current_zoom_distance, 100.0);

        assert_eq!(camera.zoom_out(&mut rig), 120.0);
        assert_eq!(camera.set_zoom(f32::NAN, &mut rig), 120.0);
    }

    #[test]
    fn test_inverted_zoom_bounds_do_not_panic() {
        let (mut camera, mut rig) = spawned(CameraConfig {
            zoom_min: 500.0,
            zoom_max: 200.0,
            ..Default::default()
        });
        assert_eq!(camera.state().current_zoom_distance, 300.0);

        for _ in 0..100 {
            camera.zoom_out(&mut rig);
        }
        assert_eq!(camera.state().current_zoom_distance, 500.0);
        for _ in 0..100 {
            camera.zoom_in(&mut rig);
        }
        assert_eq!(rig.follow_boom_length, 200.0);
    }

    #[test]
    fn test_tick_ignored_outside_smooth_follow() {
        let (mut camera, rig) = spawned(CameraConfig::default());
        let mut rotation = Rotator::default();
        camera.on_tick(0.1, 100.0, 0.0, 1.0, &mut rotation, &rig);
        assert_eq!(rotation.yaw, 0.0);
        assert!(!camera.is_resetting());
    }

    #[test]
    fn test_no_input_stillness() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        let mut rotation = Rotator::default();
        rotation.set_yaw(42.0);

        let mut now = 0.0;
        for _ in 0..20 {
            now += 0.1;
            camera.on_tick(0.1, now, 0.0, 0.0, &mut rotation, &rig);
        }
        assert_eq!(rotation.yaw, 42.0);
    }

    #[test]
    fn test_strafing_swings_camera() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        let mut rotation = Rotator::default();

        camera.record_activity(0.0);
        camera.on_tick(0.1, 0.1, 0.0, 1.0, &mut rotation, &rig);
        assert!((rotation.yaw - 2.7).abs() < 1e-3);
    }

    #[test]
    fn test_idle_triggers_auto_reset_and_converges() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        // character faces 0, camera looks off to the side
        rig.body_yaw = 0.0;
        let mut rotation = Rotator::default();
        rotation.set_yaw(40.0);

        camera.on_tick(0.1, 2.6, 0.0, 0.0, &mut rotation, &rig);
        assert!(camera.is_resetting());
        assert!(camera.state().is_auto_reset);
        // auto reset speed 0.15: 40 -> 40 - 40 * 0.1 * 0.15
        assert!((rotation.yaw - 39.4).abs() < 1e-3);

        let mut now = 2.6;
        for _ in 0..10_000 {
            now += 0.1;
            camera.on_tick(0.1, now, 0.0, 0.0, &mut rotation, &rig);
            if shortest_yaw_correction(rotation.yaw, 0.0).abs() <= 1.0 && !camera.is_resetting() {
                break;
            }
        }
        assert!(shortest_yaw_correction(rotation.yaw, 0.0).abs() <= 1.0);
    }

    #[test]
    fn test_manual_reset_uses_reset_speed() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        rig.body_yaw = 10.0;
        let mut rotation = Rotator::default();

        camera.request_reset();
        let mut last = f32::MAX;
        let mut ticks = 0;
        while camera.is_resetting() {
            let delta = shortest_yaw_correction(rotation.yaw, 10.0).abs();
            assert!(delta < last);
            last = delta;
            camera.on_tick(0.1, 0.5, 1.0, 0.0, &mut rotation, &rig);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert!(last <= 1.0);
        assert!(!camera.state().is_auto_reset);
    }

    #[test]
    fn test_reset_recomputes_from_live_yaw() {
        let (mut camera, mut rig) = spawned(CameraConfig::default());
        camera.set_mode(CameraMode::ThirdPersonSmoothFollow, &mut rig);
        let mut rotation = Rotator::default();
        rotation.set_yaw(20.0);

        camera.request_reset();
        camera.on_tick(0.1, 0.1, 0.0, 0.0, &mut rotation, &rig);
        assert!((rotation.yaw - 18.0).abs() < 1e-3);

        // something else moved the controller mid-reset
        rotation.set_yaw(0.5);
        camera.on_tick(0.1, 0.2, 0.0, 0.0, &mut rotation, &rig);
        assert!(!camera.is_resetting());
        assert_eq!(rotation.yaw, 0.5);
    }
}
