//! Scene snapshots to SVG text and to pixels.

/// `usvg`/`resvg` rasterization into RGBA frames.
pub mod raster;
/// Scene to SVG serialization.
pub mod svg;
