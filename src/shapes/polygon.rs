use crate::animation::ease::interpolate;
use crate::animation::timeline::Timeline;
use crate::foundation::error::{ProsvgError, ProsvgResult};
use crate::geometry::point::Point2;
use crate::shapes::animated::{Animated, Appearance, Tween};
use crate::shapes::style::Style;

/// A closed polygon scaled about the centroid of its base vertices.
///
/// The drawn vertices are always `centroid + scale·(base - centroid)`.
#[derive(Debug)]
pub struct Polygon {
    base: Vec<Point2>,
    scale: f64,
    appearance: Appearance,
    timeline: Timeline<Polygon>,
}

fn check_vertices(points: &[Point2]) -> ProsvgResult<()> {
    if points.len() < 3 {
        return Err(ProsvgError::geometry(format!(
            "polygon needs at least 3 vertices, got {}",
            points.len()
        )));
    }
    Ok(())
}

impl Polygon {
    pub fn new(points: Vec<Point2>, style: Style) -> ProsvgResult<Self> {
        check_vertices(&points)?;
        Ok(Self {
            base: points,
            scale: 1.0,
            appearance: Appearance::new(style),
            timeline: Timeline::new(),
        })
    }

    /// Regular polygon with `sides` vertices around `center`, the first at `first`.
    pub fn regular(center: Point2, first: Point2, sides: usize, style: Style) -> ProsvgResult<Self> {
        if sides < 3 {
            return Err(ProsvgError::geometry(format!(
                "regular polygon needs at least 3 sides, got {sides}"
            )));
        }
        let arm = first - center;
        let step = std::f64::consts::TAU / sides as f64;
        let points = (0..sides)
            .map(|i| center + arm.rotate(step * i as f64))
            .collect();
        Self::new(points, style)
    }

    pub fn base(&self) -> &[Point2] {
        &self.base
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn centroid(&self) -> Point2 {
        let sum = self
            .base
            .iter()
            .fold(Point2::ZERO, |acc, &p| acc + p);
        sum / self.base.len() as f64
    }

    /// Vertices as drawn.
    pub fn vertices(&self) -> Vec<Point2> {
        let c = self.centroid();
        self.base
            .iter()
            .map(|&p| c + (p - c).scale(self.scale))
            .collect()
    }

    pub fn set(&mut self, points: Vec<Point2>, scale: f64) -> ProsvgResult<()> {
        check_vertices(&points)?;
        self.base = points;
        self.scale = scale;
        Ok(())
    }

    pub fn change_scale(&mut self, start: f64, end: f64, tween: Tween) -> &mut Self {
        self.timeline
            .add_action(tween.duration, move |s: &mut Polygon, p| {
                s.scale = interpolate(start, end, p.t, tween.ease);
            });
        self
    }

    pub fn grow(&mut self, tween: Tween) -> &mut Self {
        self.change_scale(0.0, 1.0, tween)
    }

    pub fn shrink(&mut self, tween: Tween) -> &mut Self {
        self.change_scale(1.0, 0.0, tween)
    }

    /// Replace the base vertices with `points(ease(t))` each frame. Frames where the function
    /// yields fewer than three vertices leave the polygon unchanged.
    pub fn update(
        &mut self,
        points: impl Fn(f64) -> Vec<Point2> + 'static,
        tween: Tween,
    ) -> &mut Self {
        let ease = tween.ease;
        self.timeline
            .add_action(tween.duration, move |s: &mut Polygon, p| {
                let scale = s.scale;
                if let Err(err) = s.set(points(ease.apply(p.t)), scale) {
                    tracing::warn!(%err, "polygon update skipped");
                }
            });
        self
    }

    /// Rotate by `angle` radians about `pivot` (default: the centroid).
    pub fn rotate(&mut self, angle: f64, pivot: Option<Point2>, tween: Tween) -> &mut Self {
        let pivot = pivot.unwrap_or_else(|| self.centroid());
        let arms: Vec<Point2> = self.base.iter().map(|&p| p - pivot).collect();
        self.timeline
            .add_action(tween.duration, move |s: &mut Polygon, p| {
                let (now, before) = tween.step(p);
                for (v, arm) in s.base.iter_mut().zip(&arms) {
                    *v += arm.rotate(angle * now) - arm.rotate(angle * before);
                }
            });
        self
    }
}

impl Animated for Polygon {
    /// The centroid.
    fn position(&self) -> Point2 {
        self.centroid()
    }

    fn set_position(&mut self, pos: Point2) {
        let offset = pos - self.centroid();
        for v in &mut self.base {
            *v += offset;
        }
    }

    fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.appearance
    }

    fn timeline(&self) -> &Timeline<Self> {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut Timeline<Self> {
        &mut self.timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/polygon.rs"]
mod tests;
