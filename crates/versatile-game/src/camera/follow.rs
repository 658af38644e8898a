//! Smooth-follow heading correction
//!
//! Each tick the camera yaw is nudged toward the direction the player is
//! moving. The nudge is shaped by how far that direction diverges from the
//! camera's forward axis: running straight ahead or straight back leaves the
//! camera alone, strafing swings it round briskly.

use glam::Vec2;
use versatile_core::heading::{
    direction_to_yaw, right_of_yaw, shortest_yaw_correction, yaw_to_direction,
};

use super::CameraConfig;

/// Yaw correction for one tick of smooth follow, in degrees.
///
/// `forward` and `right` are the movement axes in [-1, 1]. Returns 0 when
/// there is no movement or the axes cancel out.
pub fn follow_correction(
    camera_yaw: f32,
    forward: f32,
    right: f32,
    dt: f32,
    config: &CameraConfig,
) -> f32 {
    let forward = forward.clamp(-1.0, 1.0);
    let right = right.clamp(-1.0, 1.0);

    let input_magnitude = (forward.abs() + right.abs()).clamp(0.0, 1.0);
    if input_magnitude == 0.0 {
        return 0.0;
    }

    let forward_vector = yaw_to_direction(camera_yaw) * forward;
    let right_vector = right_of_yaw(camera_yaw) * right;
    let combined = (forward_vector + right_vector).normalize_or_zero();
    let Some(target_yaw) = direction_to_yaw(combined) else {
        return 0.0;
    };

    let curve = response_curve(forward_vector, combined, config.follow_turn_angle_exponent);
    let raw_delta = shortest_yaw_correction(camera_yaw, target_yaw);

    let factor = input_magnitude * dt.max(0.0) * curve * config.follow_turn_rate;
    factor.clamp(0.0, 1.0) * raw_delta
}

/// 0 when movement runs along the camera axis, 1 when perpendicular to it
fn response_curve(forward_vector: Vec2, combined: Vec2, exponent: f32) -> f32 {
    let alignment = forward_vector.dot(combined).abs();
    (1.0 - alignment).max(0.0).powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_no_input_no_correction() {
        let config = CameraConfig::default();
        let mut total = 0.0;
        for _ in 0..100 {
            total += follow_correction(37.0, 0.0, 0.0, 0.1, &config);
        }
        assert_eq!(total, 0.0);
        assert_eq!(follow_correction(37.0, 0.0, 0.0, 10.0, &config), 0.0);
    }

    #[test]
    fn test_straight_ahead_and_back_hold_heading() {
        let config = CameraConfig::default();
        assert!(follow_correction(0.0, 1.0, 0.0, 0.1, &config).abs() < EPS);
        assert!(follow_correction(0.0, -1.0, 0.0, 0.1, &config).abs() < EPS);
    }

    #[test]
    fn test_strafe_turns_toward_movement() {
        let config = CameraConfig::default();
        // factor = 1 * 0.1 * 1 * 0.3, raw delta = 90
        let right = follow_correction(0.0, 0.0, 1.0, 0.1, &config);
        assert!((right - 2.7).abs() < EPS);

        let left = follow_correction(0.0, 0.0, -1.0, 0.1, &config);
        assert!((left + 2.7).abs() < EPS);
    }

    #[test]
    fn test_diagonal_turns_less_than_strafe() {
        let config = CameraConfig::default();
        let diagonal = follow_correction(0.0, 0.5, 0.5, 0.1, &config);
        let strafe = follow_correction(0.0, 0.0, 1.0, 0.1, &config);
        assert!(diagonal > 0.0);
        assert!(diagonal < strafe);

        // alignment = 0.5 * cos(45deg), curve = (1 - alignment)^0.25
        let alignment = 0.5 * std::f32::consts::FRAC_1_SQRT_2;
        let expected = 0.1 * (1.0 - alignment).powf(0.25) * 0.3 * 45.0;
        assert!((diagonal - expected).abs() < EPS);
    }

    #[test]
    fn test_correction_crosses_wraparound() {
        let config = CameraConfig::default();
        // camera at 350, strafing right targets 80: short way is +90
        let correction = follow_correction(350.0, 0.0, 1.0, 0.1, &config);
        assert!((correction - 2.7).abs() < EPS);
    }

    #[test]
    fn test_factor_is_clamped() {
        let config = CameraConfig {
            follow_turn_rate: 100.0,
            ..Default::default()
        };
        let correction = follow_correction(0.0, 0.0, 1.0, 1.0, &config);
        assert!((correction - 90.0).abs() < EPS);
    }

    #[test]
    fn test_negative_dt_does_nothing() {
        let config = CameraConfig::default();
        assert_eq!(follow_correction(0.0, 0.0, 1.0, -0.5, &config), 0.0);
    }
}
