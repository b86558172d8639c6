//! Helper functions

use crate::kinematic_traits::{Joint, LegJoints};
use num_traits::{Bounded, NumCast, ToPrimitive};

/// Looks up a joint sample by actuator id. Passing an id that is not wired
/// into the leg is a caller bug and aborts.
pub fn joint(joints: &LegJoints, id: i32) -> &Joint {
    joints
        .iter()
        .find(|j| j.id == id)
        .unwrap_or_else(|| panic!("no joint with id {}", id))
}

/// Clamps a floating point value into the representable range of the
/// destination integer type, truncating toward zero inside the range. Used
/// when packing telemetry and command floats into fixed width wire fields.
/// NaN maps to the minimum of the destination range.
pub fn saturate<T>(value: f64) -> T
where
    T: Bounded + NumCast + ToPrimitive,
{
    match (T::min_value().to_f64(), T::max_value().to_f64()) {
        (Some(min), _) if value <= min => T::min_value(),
        (_, Some(max)) if value >= max => T::max_value(),
        _ => T::from(value).unwrap_or_else(T::min_value),
    }
}

/// Print one leg's joint values for debugging.
#[allow(dead_code)]
pub fn dump_joints(joints: &LegJoints) {
    let mut row_str = String::new();
    for joint in joints {
        row_str.push_str(&format!("{}:{:7.2} ", joint.id, joint.angle_deg));
    }
    println!("[{}]", row_str.trim_end());
}
