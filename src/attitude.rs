//! Unit quaternion body attitude with conversions to and from Euler angles,
//! axis-angle pairs and rotation matrices, plus gyro rate integration.
//!
//! The quaternion is stored as four raw scalars; constructors do not
//! normalize. Every operation that relies on the unit norm invariant says so,
//! and callers are expected to go through [`Attitude::normalized`] after
//! composing raw components.

use nalgebra::{Matrix3, Vector3};
use std::f64::consts::FRAC_PI_2;
use std::ops::Mul;

/// Roll, pitch and yaw in radians, applied as an intrinsic roll → pitch → yaw
/// rotation (yaw outermost).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Euler {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Euler { roll, pitch, yaw }
    }

    /// Component wise conversion to degrees.
    pub fn to_degrees(&self) -> Euler {
        Euler::new(self.roll.to_degrees(), self.pitch.to_degrees(), self.yaw.to_degrees())
    }

    /// Component wise conversion to radians.
    pub fn to_radians(&self) -> Euler {
        Euler::new(self.roll.to_radians(), self.pitch.to_radians(), self.yaw.to_radians())
    }
}

/// A rotation as an angle about a unit axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub angle_rad: f64,
    pub axis: Vector3<f64>,
}

impl AxisAngle {
    /// The axis scaled by the angle.
    pub fn magnitude_vector(&self) -> Vector3<f64> {
        self.angle_rad * self.axis
    }

    /// Recovers angle and axis from an axis scaled by the angle. A zero
    /// vector maps to a zero angle about +Z.
    pub fn from_magnitude_vector(vector: &Vector3<f64>) -> AxisAngle {
        let angle_rad = vector.norm();
        if angle_rad == 0.0 {
            return AxisAngle { angle_rad: 0.0, axis: Vector3::z() };
        }
        AxisAngle { angle_rad, axis: vector / angle_rad }
    }
}

/// Body attitude as a w, x, y, z quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Attitude {
    fn default() -> Self {
        Attitude::identity()
    }
}

impl Attitude {
    /// Raw constructor; the components are taken as given, not normalized.
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Attitude { w, x, y, z }
    }

    /// The no-rotation attitude.
    pub fn identity() -> Self {
        Attitude::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotates a vector by this quaternion through the sandwich product
    /// `q * p * q'`. Exact for unit quaternions, no small angle shortcut.
    pub fn rotate(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        let p = Attitude::new(0.0, vector.x, vector.y, vector.z);
        let q = *self * p * self.conjugated();
        Vector3::new(q.x, q.y, q.z)
    }

    /// Negated vector part. For a unit quaternion this is also the inverse
    /// rotation.
    pub fn conjugated(&self) -> Attitude {
        Attitude::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// All components divided by the norm. Must not be called on a zero
    /// quaternion; the division produces non finite components.
    pub fn normalized(&self) -> Attitude {
        let n = self.norm();
        Attitude::new(self.w / n, self.x / n, self.y / n, self.z / n)
    }

    /// The equivalent rotation matrix. Orthonormal with determinant +1 for
    /// any unit norm input.
    pub fn matrix(&self) -> Matrix3<f64> {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        Matrix3::new(
            w * w + x * x - y * y - z * z, 2.0 * (x * y - w * z), 2.0 * (w * y + x * z),
            2.0 * (x * y + w * z), w * w - x * x + y * y - z * z, 2.0 * (y * z - w * x),
            2.0 * (x * z - w * y), 2.0 * (w * x + y * z), w * w - x * x - y * y + z * z,
        )
    }

    /// Extracts roll, pitch and yaw in radians.
    ///
    /// Within 1e-8 of the pitch = ±90° gimbal lock the arcsine derivative
    /// blows up, so roll is pinned to zero there and yaw is recovered from w
    /// and x alone. The conversion is lossy at the lock (infinitely many
    /// roll/yaw pairs collapse onto one quaternion).
    pub fn euler_rad(&self) -> Euler {
        let sinp = 2.0 * (self.w * self.y - self.z * self.x);
        if sinp >= 1.0 - 1e-8 {
            Euler::new(0.0, FRAC_PI_2, -2.0 * self.x.atan2(self.w))
        } else if sinp <= -1.0 + 1e-8 {
            Euler::new(0.0, -FRAC_PI_2, 2.0 * self.x.atan2(self.w))
        } else {
            let pitch = sinp.asin();

            let sinr_cosp = 2.0 * (self.w * self.x + self.y * self.z);
            let cosr_cosp = 1.0 - 2.0 * (self.x * self.x + self.y * self.y);
            let roll = sinr_cosp.atan2(cosr_cosp);

            let siny_cosp = 2.0 * (self.w * self.z + self.x * self.y);
            let cosy_cosp = 1.0 - 2.0 * (self.y * self.y + self.z * self.z);
            let yaw = siny_cosp.atan2(cosy_cosp);

            Euler::new(roll, pitch, yaw)
        }
    }

    /// Extracts roll, pitch and yaw in degrees.
    pub fn euler_deg(&self) -> Euler {
        self.euler_rad().to_degrees()
    }

    /// Composes an attitude from roll, pitch and yaw in radians.
    pub fn from_euler_rad(roll_rad: f64, pitch_rad: f64, yaw_rad: f64) -> Attitude {
        // Quaternions multiply in opposite order, and we want to get into
        // roll, pitch, then yaw as standard.
        Attitude::from_axis_angle(yaw_rad, 0.0, 0.0, 1.0)
            * Attitude::from_axis_angle(pitch_rad, 0.0, 1.0, 0.0)
            * Attitude::from_axis_angle(roll_rad, 1.0, 0.0, 0.0)
    }

    pub fn from_euler(euler_rad: Euler) -> Attitude {
        Attitude::from_euler_rad(euler_rad.roll, euler_rad.pitch, euler_rad.yaw)
    }

    pub fn from_euler_deg(roll_deg: f64, pitch_deg: f64, yaw_deg: f64) -> Attitude {
        Attitude::from_euler_rad(roll_deg.to_radians(), pitch_deg.to_radians(), yaw_deg.to_radians())
    }

    /// Composes an attitude from a rotation about the given axis. The axis
    /// components are used as supplied; pass a unit axis to obtain a unit
    /// quaternion.
    pub fn from_axis_angle(angle_rad: f64, x: f64, y: f64, z: f64) -> Attitude {
        let c = (angle_rad / 2.0).cos();
        let s = (angle_rad / 2.0).sin();
        Attitude::new(c, x * s, y * s, z * s)
    }

    pub fn from_axis_angle_pair(axis_angle: &AxisAngle) -> Attitude {
        Attitude::from_axis_angle(
            axis_angle.angle_rad,
            axis_angle.axis.x,
            axis_angle.axis.y,
            axis_angle.axis.z,
        )
    }

    /// The inverse of [`Attitude::from_axis_angle`] for unit quaternions.
    ///
    /// Undefined for the zero rotation where the axis direction is lost;
    /// callers must handle `|w| = 1` before calling.
    pub fn axis_angle(&self) -> AxisAngle {
        assert!(self.w.abs() < 1.0, "axis_angle is undefined for a zero rotation");
        let angle_rad = 2.0 * self.w.acos();
        let denom = (1.0 - self.w * self.w).sqrt();
        AxisAngle {
            angle_rad,
            axis: Vector3::new(self.x / denom, self.y / denom, self.z / denom),
        }
    }

    /// The incremental rotation produced by a body frame angular rate
    /// (radians per second per axis) held over a small time step, using the
    /// small angle approximation.
    ///
    /// Each per-axis delta must stay below 0.5 rad; a coarser step means the
    /// integration period is misconfigured and the result would be silently
    /// wrong, so this aborts instead.
    pub fn integrate_rotation_rate(rate_rps: &Vector3<f64>, dt_s: f64) -> Attitude {
        const MAX_INTEGRATION_ANGLE: f64 = 0.5;

        assert!((rate_rps.x * dt_s).abs() < MAX_INTEGRATION_ANGLE, "x rotation step too coarse");
        assert!((rate_rps.y * dt_s).abs() < MAX_INTEGRATION_ANGLE, "y rotation step too coarse");
        assert!((rate_rps.z * dt_s).abs() < MAX_INTEGRATION_ANGLE, "z rotation step too coarse");

        Attitude::new(
            1.0,
            0.5 * rate_rps.x * dt_s,
            0.5 * rate_rps.y * dt_s,
            0.5 * rate_rps.z * dt_s,
        )
        .normalized()
    }
}

impl Mul for Attitude {
    type Output = Attitude;

    /// Hamilton product; `(a * b).rotate(v)` applies b first, then a.
    fn mul(self, rhs: Attitude) -> Attitude {
        let (a, b, c, d) = (self.w, self.x, self.y, self.z);
        let (e, f, g, h) = (rhs.w, rhs.x, rhs.y, rhs.z);

        Attitude::new(
            a * e - b * f - c * g - d * h,
            b * e + a * f + c * h - d * g,
            a * g - b * h + c * e + d * f,
            a * h + b * g - c * f + d * e,
        )
    }
}
