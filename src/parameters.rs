//! Defines the leg geometry data structure

use crate::parameter_error::ParameterError;
use nalgebra::Vector3;

/// One joint of the leg: the actuator id and the link segment the joint owns,
/// expressed in the body relative frame at the zero pose.
#[derive(Debug, Clone, Copy)]
pub struct JointConfig {
    /// Offset of the next pivot (or of the foot, for the tibia) from this
    /// joint's pivot, in meters.
    pub pose: Vector3<f64>,

    /// Actuator id, reported back in joint samples produced by the solver.
    pub id: i32,
}

/// Geometry of one mammal style 3 DOF leg.
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    /// Hip placement. The x component is the fore-aft offset of the hip
    /// point; the y and z components are lateral and vertical offsets that
    /// are carried around the shoulder roll axis together with the leg.
    pub shoulder: JointConfig,

    /// The upper leg link, from the hip pitch pivot to the knee pivot.
    /// Must extend along +Z at the zero pose.
    pub femur: JointConfig,

    /// The lower leg link, from the knee pivot to the foot point.
    /// Must extend along +Z at the zero pose.
    pub tibia: JointConfig,

    /// Selects which of the two law of cosines knee solutions the inverse
    /// solver returns. The choice is fixed per leg; the solver never switches
    /// branches between calls.
    pub invert: bool,
}

impl Parameters {
    /// Checks that the geometry is one the analytic solution covers.
    ///
    /// The femur may only extend along +Z (any lateral offset belongs to the
    /// shoulder), the tibia may only extend along +Z, and the three actuator
    /// ids must be distinct.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.femur.pose.x != 0.0 || self.femur.pose.y != 0.0 {
            return Err(ParameterError::OffAxisLink { joint: "femur" });
        }
        if self.tibia.pose.x != 0.0 || self.tibia.pose.y != 0.0 {
            return Err(ParameterError::OffAxisLink { joint: "tibia" });
        }
        if self.femur.pose.z <= 0.0 {
            return Err(ParameterError::NonPositiveLinkLength { joint: "femur" });
        }
        if self.tibia.pose.z <= 0.0 {
            return Err(ParameterError::NonPositiveLinkLength { joint: "tibia" });
        }
        let ids = [self.shoulder.id, self.femur.id, self.tibia.id];
        for i in 0..3 {
            for j in i + 1..3 {
                if ids[i] == ids[j] {
                    return Err(ParameterError::DuplicateJointId(ids[i]));
                }
            }
        }
        Ok(())
    }

    /// Convert to string yaml representation (quick viewing, etc).
    pub fn to_yaml(&self) -> String {
        fn joint(j: &JointConfig) -> String {
            format!("{{ id: {}, pose: [{}, {}, {}] }}", j.id, j.pose.x, j.pose.y, j.pose.z)
        }
        format!(
            "mammal_leg_geometry:\n  \
              shoulder: {}\n  \
              femur: {}\n  \
              tibia: {}\n  \
              invert: {}\n",
            joint(&self.shoulder),
            joint(&self.femur),
            joint(&self.tibia),
            self.invert
        )
    }
}
