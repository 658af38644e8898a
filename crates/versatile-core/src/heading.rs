//! Heading math for yaw-only camera control
//!
//! All angles are in degrees. Planar vectors use `x` as world forward and `y`
//! as world right, with yaw measured from +X toward +Y.

use glam::Vec2;

/// Map a yaw difference into (-180, 180].
pub fn normalize_yaw_delta(delta: f32) -> f32 {
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Signed correction that turns `from` onto `to` the short way around
pub fn shortest_yaw_correction(from: f32, to: f32) -> f32 {
    normalize_yaw_delta(to - from)
}

/// Wrap an accumulated yaw into [0, 360)
pub fn wrap_yaw(yaw: f32) -> f32 {
    let wrapped = yaw.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Planar heading of a direction, or `None` for the zero vector.
pub fn direction_to_yaw(direction: Vec2) -> Option<f32> {
    if direction.length_squared() <= f32::EPSILON * f32::EPSILON {
        return None;
    }
    Some(direction.y.atan2(direction.x).to_degrees())
}

/// Unit forward axis of a yaw-only frame
pub fn yaw_to_direction(yaw: f32) -> Vec2 {
    let (sin, cos) = yaw.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Unit right axis of a yaw-only frame
pub fn right_of_yaw(yaw: f32) -> Vec2 {
    let (sin, cos) = yaw.to_radians().sin_cos();
    Vec2::new(-sin, cos)
}
