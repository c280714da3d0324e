//! Shared primitives: errors, frame timing, canvas size and pixel math.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
