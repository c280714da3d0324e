//! Vector algebra, path commands and the curve tessellator.

/// 2D and 3D points.
pub mod point;
/// Path command lists and their SVG / `kurbo` forms.
pub mod path;
/// Parametric function to cubic Bezier conversion.
pub mod tessellate;
