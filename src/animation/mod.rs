//! Easing and the per-shape action scheduler.

/// Progress easing and interpolation.
pub mod ease;
/// Concurrent timed actions.
pub mod timeline;
