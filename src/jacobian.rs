//! Geometric Jacobian of the leg, mapping joint rates to foot velocity and
//! foot force to joint torques.

use crate::parameters::Parameters;
use nalgebra::linalg::SVD;
use nalgebra::{Matrix3, Rotation3, Vector3};

/// Singular values below this are treated as zero when the matrix cannot be
/// inverted directly.
const SINGULARITY_EPSILON: f64 = 1e-9;

/// Struct representing the Jacobian matrix
pub struct Jacobian {
    /// A 3x3 matrix whose columns map one joint's rate (radians per second)
    /// to the linear velocity of the foot (meters per second). Column order
    /// is shoulder, femur, tibia.
    matrix: Matrix3<f64>,
}

impl Jacobian {
    /// Constructs the Jacobian for the given leg geometry and joint angles.
    ///
    /// # Arguments
    ///
    /// * `parameters` - The leg geometry
    /// * `q_rad` - Joint angles in radians, shoulder, femur, tibia order
    ///
    /// Each column is `a_i x (tip - p_i)` with `a_i` the joint axis and `p_i`
    /// a point on it: the shoulder rolls about the body fore-aft axis through
    /// the origin, and the two pitch joints share the lateral axis carried by
    /// the shoulder rotation.
    pub fn new(parameters: &Parameters, q_rad: &[f64; 3]) -> Self {
        let p = parameters;
        let r_shoulder = Rotation3::from_axis_angle(&Vector3::x_axis(), q_rad[0]);
        let r_femur = Rotation3::from_axis_angle(&Vector3::y_axis(), q_rad[1]);
        let r_tibia = Rotation3::from_axis_angle(&Vector3::y_axis(), q_rad[2]);

        let hip = r_shoulder * p.shoulder.pose;
        let knee = r_shoulder * (p.shoulder.pose + r_femur * p.femur.pose);
        let tip = r_shoulder
            * (p.shoulder.pose + r_femur * p.femur.pose + r_femur * (r_tibia * p.tibia.pose));

        let shoulder_axis = Vector3::x();
        let pitch_axis = r_shoulder * Vector3::y();

        let columns = [
            shoulder_axis.cross(&tip),
            pitch_axis.cross(&(tip - hip)),
            pitch_axis.cross(&(tip - knee)),
        ];
        Jacobian { matrix: Matrix3::from_columns(&columns) }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Foot velocity produced by the given joint rates (radians per second).
    pub fn tip_velocity(&self, rates_rad_s: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * rates_rad_s
    }

    /// Computes the joint rates (radians per second) required to achieve a
    /// desired foot velocity.
    ///
    /// This method tries the closed form inverse of the Jacobian matrix. At
    /// full extension or full fold the matrix loses rank and the SVD
    /// pseudoinverse (least squares) solution is returned instead.
    pub fn joint_velocities(
        &self,
        tip_velocity: &Vector3<f64>,
    ) -> Result<Vector3<f64>, &'static str> {
        solve(&self.matrix, tip_velocity)
    }

    /// Joint torques balancing the given force applied at the foot, by the
    /// principle of virtual work (the transpose of the velocity mapping).
    pub fn joint_torques(&self, tip_force: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.transpose() * tip_force
    }

    /// Foot force produced by the given joint torques, the inverse of
    /// [`Jacobian::joint_torques`], with the same least squares fallback as
    /// [`Jacobian::joint_velocities`].
    pub fn tip_force(&self, torques: &Vector3<f64>) -> Result<Vector3<f64>, &'static str> {
        solve(&self.matrix.transpose(), torques)
    }
}

fn solve(matrix: &Matrix3<f64>, rhs: &Vector3<f64>) -> Result<Vector3<f64>, &'static str> {
    if let Some(inverse) = matrix.try_inverse() {
        return Ok(inverse * rhs);
    }
    // If the inverse does not exist, use the pseudoinverse.
    let svd = SVD::new(*matrix, true, true);
    match svd.pseudo_inverse(SINGULARITY_EPSILON) {
        Ok(pseudo_inverse) => Ok(pseudo_inverse * rhs),
        Err(_) => Err("Unable to compute the pseudoinverse of the Jacobian matrix"),
    }
}
