//! Circular-track geometry.
//!
//! Pure functions mapping angular positions (radians, anticlockwise from the
//! +x axis) to plane coordinates and arc lengths. No state.

use std::f64::consts::PI;

use glam::DVec2;

use chargesim_core::constants::TWO_PI;
use chargesim_core::types::Point;

/// Plane coordinates of `angle` on a circle of `radius` centred on `origin`.
pub fn coordinates(origin: Point, radius: f64, angle: f64) -> Point {
    (origin.as_dvec2() + DVec2::from_angle(angle) * radius).into()
}

/// Wrap any finite angle into `[0, 2π)`, however many revolutions out.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TWO_PI);
    // -1e-18 wraps to 2π after rounding.
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}

/// Signed offset from `from` to `to` along the shorter arc, in `[-π, π]`.
/// Positive means `to` lies anticlockwise of `from`.
pub fn shortest_offset(from: f64, to: f64) -> f64 {
    let theta = to - from;
    if theta > PI {
        theta - TWO_PI
    } else if theta < -PI {
        theta + TWO_PI
    } else {
        theta
    }
}

/// Arc length subtended by `theta` radians.
pub fn arc_length(theta: f64, radius: f64) -> f64 {
    theta.abs() * radius
}

/// Angular displacement over one tick for a linear velocity.
pub fn angular_step(velocity: f64, radius: f64) -> f64 {
    velocity / radius
}
