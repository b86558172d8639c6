//! Rust implementation of the locomotion math core for quadruped robots with
//! mammal style legs (hip abduction, hip pitch and knee pitch).
//!
//! The crate covers the numeric components a gait sequencer composes once per
//! control tick:
//!
//! - single leg forward and inverse kinematics, including velocity and force
//!   analysis through the geometric Jacobian;
//! - a unit quaternion body attitude with safe conversions to and from Euler
//!   angles, axis-angle pairs and rotation matrices, plus gyro rate
//!   integration;
//! - an acceleration bounded filter that blends body velocity commands;
//! - a saturating clamp for packing floats into fixed width wire fields.
//!
//! # Features
//!
//! - The inverse solution is analytic (closed form), deterministic, and
//!   cross-checked with forward kinematics.
//! - The knee bend branch is selected by the per leg `invert` configuration
//!   flag, never by hunting near a previous solution, so identical inputs
//!   always produce identical outputs.
//! - An unreachable foot target is reported as an absent solution, not an
//!   error; the caller decides the fallback.
//! - Near full extension and full fold the velocity and force mappings fall
//!   back to a least squares solution instead of blowing up.
//!
//! # Parameters
//!
//! A leg is described by three link offsets (shoulder, femur, tibia), the
//! actuator ids of the three joints, and the knee branch flag. Fill out a
//! [`parameters::Parameters`] structure and hand it to
//! [`kinematics_impl::MammalKinematics`]. Angles are degrees, rates degrees
//! per second, torques newton meters at the component boundary; lengths and
//! positions are meters in the body relative frame.

pub mod attitude;
pub mod command_filter;
pub mod jacobian;
pub mod kinematic_traits;
pub mod kinematics_impl;
pub mod parameter_error;
pub mod parameters;
pub mod utils;

#[cfg(test)]
mod tests;
