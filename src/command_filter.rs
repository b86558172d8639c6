//! Acceleration bounded blending of body velocity commands.

use nalgebra::Vector3;

/// Body frame velocity command: linear `v` in meters per second and angular
/// `w` in radians per second. The caller threads the filtered state from one
/// control tick to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CommandState {
    pub v: Vector3<f64>,
    pub w: Vector3<f64>,
}

/// Advances `current` toward `desired` by at most the acceleration limit
/// times the tick duration, in Euclidean norm along the raw delta.
///
/// The result always satisfies the planar motion constraints: the linear
/// velocity has no vertical component and the angular velocity is pure yaw.
pub fn filter_command(
    current: &CommandState,
    desired: &CommandState,
    acceleration: f64,
    alpha_rad_s2: f64,
    delta_s: f64,
) -> CommandState {
    let mut result = *current;

    let input_delta = desired.v - current.v;
    let max_delta = acceleration * delta_s;
    let delta = if input_delta.norm() <= max_delta {
        input_delta
    } else {
        input_delta.normalize() * max_delta
    };

    result.v += delta;
    // We require this.
    result.v.z = 0.0;

    let input_delta_rad_s = desired.w - current.w;
    let max_delta_rad_s = alpha_rad_s2 * delta_s;
    let delta_rad_s = if input_delta_rad_s.norm() <= max_delta_rad_s {
        input_delta_rad_s
    } else {
        input_delta_rad_s.normalize() * max_delta_rad_s
    };

    result.w += delta_rad_s;
    // We only allow a z value.
    result.w.x = 0.0;
    result.w.y = 0.0;

    result
}
