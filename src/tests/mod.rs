//! Cross module test suites exercising the solver against literal expected
//! vectors and round trip properties.


use crate::kinematic_traits::{Joint, LegJoints};
use crate::kinematics_impl::MammalKinematics;
use crate::parameters::{JointConfig, Parameters};
use nalgebra::Vector3;

pub(crate) const SHOULDER: i32 = 1;
pub(crate) const FEMUR: i32 = 2;
pub(crate) const TIBIA: i32 = 3;

/// A leg with the given hip placement and link lengths, ids 1/2/3.
pub(crate) fn leg_parameters(
    shoulder_pose: [f64; 3],
    femur_z: f64,
    tibia_z: f64,
    invert: bool,
) -> Parameters {
    Parameters {
        shoulder: JointConfig { pose: Vector3::from(shoulder_pose), id: SHOULDER },
        femur: JointConfig { pose: Vector3::new(0.0, 0.0, femur_z), id: FEMUR },
        tibia: JointConfig { pose: Vector3::new(0.0, 0.0, tibia_z), id: TIBIA },
        invert,
    }
}

pub(crate) fn leg(
    shoulder_pose: [f64; 3],
    femur_z: f64,
    tibia_z: f64,
    invert: bool,
) -> MammalKinematics {
    MammalKinematics::new(leg_parameters(shoulder_pose, femur_z, tibia_z, invert))
        .expect("test geometry is valid")
}

/// The reference leg most suites use: hip 0.020 m forward, two 0.100 m links.
pub(crate) fn reference_leg() -> MammalKinematics {
    leg([0.020, 0.0, 0.0], 0.100, 0.100, false)
}

pub(crate) fn joints_deg(shoulder: f64, femur: f64, tibia: f64) -> LegJoints {
    [
        Joint { id: SHOULDER, angle_deg: shoulder, ..Default::default() },
        Joint { id: FEMUR, angle_deg: femur, ..Default::default() },
        Joint { id: TIBIA, angle_deg: tibia, ..Default::default() },
    ]
}

pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{} is not within {} of {}",
        actual, tolerance, expected
    );
}

pub(crate) fn assert_vector_close(actual: &Vector3<f64>, expected: &Vector3<f64>, tolerance: f64) {
    assert!(
        (actual - expected).norm() < tolerance,
        "{:?} is not within {} of {:?}",
        actual, tolerance, expected
    );
}
