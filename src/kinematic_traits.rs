//! Data model and trait contract for single leg kinematics.

use nalgebra::Vector3;

/// Commanded or observed state of one revolute joint. Angles are degrees,
/// rates degrees per second and torques newton meters at this boundary;
/// the solvers work in radians internally. Fields that are not requested or
/// not measured stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Joint {
    pub id: i32,
    pub angle_deg: f64,
    pub velocity_dps: f64,
    pub torque_nm: f64,
}

/// Joint samples of one leg, ordered shoulder, femur, tibia.
pub type LegJoints = [Joint; 3];

/// Pose, velocity and force of the foot point, all expressed in the leg's
/// parent (body relative) frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Effector {
    /// Foot position, meters.
    pub pose: Vector3<f64>,
    /// Foot linear velocity, meters per second.
    pub velocity: Vector3<f64>,
    /// Force applied at the foot, newtons.
    pub force_n: Vector3<f64>,
}

/// Leg configurations where the Jacobian loses rank and the velocity/force
/// mappings are no longer uniquely invertible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Singularity {
    /// The knee is straight; the foot sits on the outer reach boundary.
    Extended,
    /// The knee is fully folded; the foot sits on the inner reach boundary.
    Folded,
}

pub trait Kinematics {
    /// Computes the foot pose, velocity and force produced by the given joint
    /// angles, rates and torques.
    fn forward(&self, joints: &LegJoints) -> Effector;

    /// Solves joint angles (and, when the target carries a velocity or force,
    /// joint rates and torques) for the given foot target. Returns `None`
    /// when the target is out of reach.
    fn inverse(&self, effector: &Effector) -> Option<LegJoints>;

    /// Like [`Kinematics::inverse`], with the previous joint samples supplied
    /// by trajectory generating callers. The hint is informational: the knee
    /// branch is pinned by the leg configuration, never chosen by proximity.
    fn inverse_continuing(&self, effector: &Effector, previous: &LegJoints) -> Option<LegJoints>;

    /// Reports whether the given joint configuration is at a kinematic
    /// singularity of the leg.
    fn kinematic_singularity(&self, joints: &LegJoints) -> Option<Singularity>;
}
