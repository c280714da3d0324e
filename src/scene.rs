//! The set of shapes drawn on one canvas.
//!
//! Shapes are owned by the [`Scene`] and addressed by [`ShapeId`]. Typed access goes through
//! [`ShapeKind`], so callers can queue verbs on a concrete shape and later hand the id to
//! [`crate::RenderSession::play`].

use crate::animation::timeline::Advance;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ProsvgError, ProsvgResult};
use crate::geometry::point::Point2;
use crate::shapes::animated::Animated;
use crate::shapes::disc::Disc;
use crate::shapes::label::Label;
use crate::shapes::parametric::ParametricPath;
use crate::shapes::polygon::Polygon;
use crate::shapes::segment::Segment;

/// Stable handle to a shape in a [`Scene`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ShapeId(pub u64);

/// A `<use>` reference to a named shape, drawn at an offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub href: String,
    pub offset: Point2,
}

/// Any shape a scene can hold.
#[derive(Debug)]
pub enum Shape {
    Segment(Segment),
    Disc(Disc),
    Polygon(Polygon),
    Path(ParametricPath),
    Label(Label),
    Instance(Instance),
}

macro_rules! dispatch {
    ($shape:expr, $s:ident => $body:expr, $inst:pat => $fallback:expr) => {
        match $shape {
            Shape::Segment($s) => $body,
            Shape::Disc($s) => $body,
            Shape::Polygon($s) => $body,
            Shape::Path($s) => $body,
            Shape::Label($s) => $body,
            Shape::Instance($inst) => $fallback,
        }
    };
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Segment(_) => "segment",
            Self::Disc(_) => "disc",
            Self::Polygon(_) => "polygon",
            Self::Path(_) => "path",
            Self::Label(_) => "label",
            Self::Instance(_) => "instance",
        }
    }

    pub fn name(&self) -> Option<&str> {
        dispatch!(self, s => s.name(), _ => None)
    }

    /// Seconds until the shape's current timeline finishes.
    pub fn run_time(&self) -> f64 {
        dispatch!(self, s => s.timeline().run_time(), _ => 0.0)
    }

    pub fn advance(&mut self, dt: f64) -> Advance {
        dispatch!(self, s => s.advance(dt), _ => Advance::Finished)
    }

    /// Drop any pending actions.
    pub fn reset_timeline(&mut self) {
        dispatch!(self, s => s.timeline_mut().reset(), _ => ())
    }
}

/// Typed view of a [`Shape`] variant.
pub trait ShapeKind: Sized {
    fn from_shape(shape: &Shape) -> Option<&Self>;
    fn from_shape_mut(shape: &mut Shape) -> Option<&mut Self>;
    fn into_shape(self) -> Shape;
}

macro_rules! shape_kind {
    ($ty:ty, $variant:ident) => {
        impl ShapeKind for $ty {
            fn from_shape(shape: &Shape) -> Option<&Self> {
                match shape {
                    Shape::$variant(s) => Some(s),
                    _ => None,
                }
            }

            fn from_shape_mut(shape: &mut Shape) -> Option<&mut Self> {
                match shape {
                    Shape::$variant(s) => Some(s),
                    _ => None,
                }
            }

            fn into_shape(self) -> Shape {
                Shape::$variant(self)
            }
        }

        impl From<$ty> for Shape {
            fn from(s: $ty) -> Self {
                Shape::$variant(s)
            }
        }
    };
}

shape_kind!(Segment, Segment);
shape_kind!(Disc, Disc);
shape_kind!(Polygon, Polygon);
shape_kind!(ParametricPath, Path);
shape_kind!(Label, Label);
shape_kind!(Instance, Instance);

/// Shapes on a canvas, in insertion (paint) order.
#[derive(Debug)]
pub struct Scene {
    canvas: Canvas,
    background: Option<String>,
    shapes: Vec<(ShapeId, Shape)>,
    next_id: u64,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            background: None,
            shapes: Vec::new(),
            next_id: 0,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Full-canvas fill painted beneath every shape.
    pub fn set_background(&mut self, color: impl Into<String>) -> &mut Self {
        self.background = Some(color.into());
        self
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn add(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        let shape = shape.into();
        tracing::debug!(id = id.0, kind = shape.kind(), "scene add");
        self.shapes.push((id, shape));
        id
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let pos = self.shapes.iter().position(|(i, _)| *i == id)?;
        Some(self.shapes.remove(pos).1)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shape(id).is_some()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    pub fn get<T: ShapeKind>(&self, id: ShapeId) -> ProsvgResult<&T> {
        let shape = self
            .shape(id)
            .ok_or_else(|| ProsvgError::validation(format!("unknown shape id {}", id.0)))?;
        let kind = shape.kind();
        T::from_shape(shape).ok_or_else(|| {
            ProsvgError::validation(format!("shape {} is a {kind}, not the requested type", id.0))
        })
    }

    pub fn get_mut<T: ShapeKind>(&mut self, id: ShapeId) -> ProsvgResult<&mut T> {
        let shape = self
            .shape_mut(id)
            .ok_or_else(|| ProsvgError::validation(format!("unknown shape id {}", id.0)))?;
        let kind = shape.kind();
        T::from_shape_mut(shape).ok_or_else(|| {
            ProsvgError::validation(format!("shape {} is a {kind}, not the requested type", id.0))
        })
    }

    /// Add a `<use>` copy of a named shape, displaced by `offset`.
    pub fn instance(&mut self, of: ShapeId, offset: Point2) -> ProsvgResult<ShapeId> {
        let shape = self
            .shape(of)
            .ok_or_else(|| ProsvgError::validation(format!("unknown shape id {}", of.0)))?;
        let href = shape.name().ok_or_else(|| {
            ProsvgError::geometry(format!("shape {} has no name and cannot be instanced", of.0))
        })?;
        let inst = Instance {
            href: href.to_owned(),
            offset,
        };
        Ok(self.add(inst))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, s)| (*id, s))
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.canvas.width as f64 / 2.0, self.canvas.height as f64 / 2.0)
    }

    pub fn left(&self) -> Point2 {
        Point2::new(0.0, self.canvas.height as f64 / 2.0)
    }

    pub fn right(&self) -> Point2 {
        Point2::new(self.canvas.width as f64, self.canvas.height as f64 / 2.0)
    }

    pub fn top(&self) -> Point2 {
        Point2::new(self.canvas.width as f64 / 2.0, 0.0)
    }

    pub fn bottom(&self) -> Point2 {
        Point2::new(self.canvas.width as f64 / 2.0, self.canvas.height as f64)
    }

    pub fn top_left(&self) -> Point2 {
        Point2::ZERO
    }

    pub fn top_right(&self) -> Point2 {
        Point2::new(self.canvas.width as f64, 0.0)
    }

    pub fn bottom_left(&self) -> Point2 {
        Point2::new(0.0, self.canvas.height as f64)
    }

    pub fn bottom_right(&self) -> Point2 {
        Point2::new(self.canvas.width as f64, self.canvas.height as f64)
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
