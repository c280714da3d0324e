//! Animated primitives. Every shape owns its canonical parameters and a timeline of actions that
//! mutate them.

/// The shared `Animated` capability and verb timing.
pub mod animated;
pub mod disc;
pub mod label;
pub mod parametric;
pub mod polygon;
pub mod segment;
/// Presentation attributes.
pub mod style;
