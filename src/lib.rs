//! Procedural SVG animation.
//!
//! Shapes live in a [`Scene`] and each owns a timeline of actions. A [`RenderSession`] steps the
//! timelines one frame at a time, serializes the scene to SVG, rasterizes it with `resvg` and
//! streams the pixels into [`FrameSink`]s such as [`FfmpegSink`].
//!
//! ```no_run
//! use prosvg::{Canvas, Disc, RenderSession, Scene, SessionOpts, Style, Tween};
//!
//! # fn main() -> prosvg::ProsvgResult<()> {
//! let mut scene = Scene::new(Canvas::new(600, 600)?);
//! let id = scene.add(Disc::new(scene.center(), 50.0, Style::filled("#fe7853")));
//! scene.get_mut::<Disc>(id)?.grow(Tween::default());
//!
//! let mut session = RenderSession::new(scene, SessionOpts::default())?;
//! session.play(&[id])?.pause(1.0)?;
//! session.save("disc.svg")?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod foundation;

/// Easing and per-shape timelines.
pub mod animation;
/// Scripted scenes shipped with the CLI.
pub mod demos;
/// Frame sinks.
pub mod encode;
/// Vectors, path data and curve tessellation.
pub mod geometry;
/// SVG serialization and rasterization.
pub mod render;
/// Shape collection and canvas reference points.
pub mod scene;
/// Frame-by-frame playback into sinks.
pub mod session;
/// Animated primitives.
pub mod shapes;

pub use animation::ease::{Ease, Lerp, interpolate};
pub use animation::timeline::{Advance, Progress, Timeline};
pub use demos::Demo;
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use encode::sink::{CapturedFrame, FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, Fps, FrameIndex};
pub use foundation::error::{ProsvgError, ProsvgResult};
pub use geometry::path::{PathCommand, PathData};
pub use geometry::point::{Point2, Point3};
pub use geometry::tessellate::{TessellateOpts, tessellate, tessellate_fallible};
pub use render::raster::{FrameRGBA, Rasterizer};
pub use render::svg::{SvgDocument, scene_to_svg};
pub use scene::{Instance, Scene, Shape, ShapeId, ShapeKind};
pub use session::{RenderSession, SessionOpts, SessionStats, SinkId};
pub use shapes::animated::{Animated, Appearance, Tween};
pub use shapes::disc::Disc;
pub use shapes::label::{Label, TextAnchor};
pub use shapes::parametric::{Morph, ParametricPath, PathFn, PathGenerator, Shift, StretchT};
pub use shapes::polygon::Polygon;
pub use shapes::segment::Segment;
pub use shapes::style::Style;
