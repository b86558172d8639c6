//! Analytic forward and inverse kinematics for one mammal style leg.
//!
//! The leg has three revolute joints: the shoulder rolls about the body
//! fore-aft axis, the femur and tibia pitch about the body lateral axis. The
//! shoulder and femur pivots are co-located at the hip point; the tibia pivot
//! sits at the end of the femur link.

use crate::jacobian::Jacobian;
use crate::kinematic_traits::{Effector, Joint, Kinematics, LegJoints, Singularity};
use crate::parameter_error::ParameterError;
use crate::parameters::Parameters;
use crate::utils::joint;
use nalgebra::{Rotation3, Vector3};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Tibia angles whose sine is below this count as straight or folded.
const SINGULARITY_SIN: f64 = 1e-6;

pub struct MammalKinematics {
    parameters: Parameters,
}

impl MammalKinematics {
    /// Creates a solver for the given leg, rejecting geometry the analytic
    /// solution cannot represent.
    pub fn new(parameters: Parameters) -> Result<Self, ParameterError> {
        parameters.validate()?;
        Ok(MammalKinematics { parameters })
    }

    /// Foot position for joint angles in radians, shoulder, femur, tibia.
    fn foot_position(&self, q_rad: &[f64; 3]) -> Vector3<f64> {
        let p = &self.parameters;
        let r_shoulder = Rotation3::from_axis_angle(&Vector3::x_axis(), q_rad[0]);
        let r_femur = Rotation3::from_axis_angle(&Vector3::y_axis(), q_rad[1]);
        let r_tibia = Rotation3::from_axis_angle(&Vector3::y_axis(), q_rad[2]);

        r_shoulder * (p.shoulder.pose + r_femur * p.femur.pose + r_femur * (r_tibia * p.tibia.pose))
    }
}

impl Kinematics for MammalKinematics {
    fn forward(&self, joints: &LegJoints) -> Effector {
        let p = &self.parameters;
        let shoulder = joint(joints, p.shoulder.id);
        let femur = joint(joints, p.femur.id);
        let tibia = joint(joints, p.tibia.id);

        let q_rad = [
            shoulder.angle_deg.to_radians(),
            femur.angle_deg.to_radians(),
            tibia.angle_deg.to_radians(),
        ];
        let pose = self.foot_position(&q_rad);

        let jacobian = Jacobian::new(p, &q_rad);
        let rates_rad_s = Vector3::new(
            shoulder.velocity_dps.to_radians(),
            femur.velocity_dps.to_radians(),
            tibia.velocity_dps.to_radians(),
        );
        let velocity = jacobian.tip_velocity(&rates_rad_s);

        let torques = Vector3::new(shoulder.torque_nm, femur.torque_nm, tibia.torque_nm);
        let force_n = match jacobian.tip_force(&torques) {
            Ok(force) => force,
            Err(error) => {
                warn!("foot force left at zero: {}", error);
                Vector3::zeros()
            }
        };

        Effector { pose, velocity, force_n }
    }

    fn inverse(&self, effector: &Effector) -> Option<LegJoints> {
        let p = &self.parameters;
        let target = effector.pose;

        // The shoulder angle places the leg plane, which sits at the hip
        // lateral offset from the roll axis, so that it contains the target.
        // The fore-aft component is irrelevant here, and the hip vertical
        // offset is consumed inside the plane below.
        let lateral = p.shoulder.pose.y;
        let planar2 = target.y * target.y + target.z * target.z - lateral * lateral;
        if planar2 < 0.0 {
            debug!("target is inside the hip lateral offset cylinder");
            return None;
        }
        let h = planar2.sqrt();
        let q1 = lateral.atan2(h) - target.y.atan2(target.z);

        // Planar two link problem in the leg plane.
        let x = target.x - p.shoulder.pose.x;
        let z = h - p.shoulder.pose.z;
        let l2 = p.femur.pose.z;
        let l3 = p.tibia.pose.z;
        let r = x.hypot(z);
        if r > l2 + l3 || r < (l2 - l3).abs() || r == 0.0 {
            debug!("target radius {} is outside [{}, {}]", r, (l2 - l3).abs(), l2 + l3);
            return None;
        }

        // The acos arguments can drift epsilon outside [-1, 1] right at the
        // reach boundaries.
        let knee = ((l2 * l2 + l3 * l3 - r * r) / (2.0 * l2 * l3)).clamp(-1.0, 1.0).acos();
        let spread = ((l2 * l2 + r * r - l3 * l3) / (2.0 * l2 * r)).clamp(-1.0, 1.0).acos();
        let pitch = x.atan2(z);

        let (q2, q3) = if p.invert {
            (pitch - spread, PI - knee)
        } else {
            (pitch + spread, knee - PI)
        };

        let jacobian = Jacobian::new(p, &[q1, q2, q3]);
        let rates_rad_s = jacobian.joint_velocities(&effector.velocity).ok()?;
        let torques = jacobian.joint_torques(&effector.force_n);

        Some([
            Joint {
                id: p.shoulder.id,
                angle_deg: q1.to_degrees(),
                velocity_dps: rates_rad_s.x.to_degrees(),
                torque_nm: torques.x,
            },
            Joint {
                id: p.femur.id,
                angle_deg: q2.to_degrees(),
                velocity_dps: rates_rad_s.y.to_degrees(),
                torque_nm: torques.y,
            },
            Joint {
                id: p.tibia.id,
                angle_deg: q3.to_degrees(),
                velocity_dps: rates_rad_s.z.to_degrees(),
                torque_nm: torques.z,
            },
        ])
    }

    fn inverse_continuing(&self, effector: &Effector, _previous: &LegJoints) -> Option<LegJoints> {
        // The knee branch is pinned by the invert flag, so the previous
        // samples cannot change the solution; the hint is accepted for
        // callers that generate trajectories.
        self.inverse(effector)
    }

    fn kinematic_singularity(&self, joints: &LegJoints) -> Option<Singularity> {
        let tibia_rad = joint(joints, self.parameters.tibia.id).angle_deg.to_radians();
        if tibia_rad.sin().abs() > SINGULARITY_SIN {
            None
        } else if tibia_rad.cos() > 0.0 {
            Some(Singularity::Extended)
        } else {
            Some(Singularity::Folded)
        }
    }
}
