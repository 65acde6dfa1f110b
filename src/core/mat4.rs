//! Type definition of Float, otherwise constants which can be used
//! almost everywhere else in the code.

pub type Float = f32;

pub const MACHINE_EPSILON: Float = f32::EPSILON * 0.5;
