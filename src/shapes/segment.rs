use crate::animation::ease::interpolate;
use crate::animation::timeline::Timeline;
use crate::geometry::point::Point2;
use crate::shapes::animated::{Animated, Appearance, Tween};
use crate::shapes::style::Style;

/// A line from `p1` towards `p2`, drawn up to `scale` of its full length.
#[derive(Debug)]
pub struct Segment {
    p1: Point2,
    p2: Point2,
    scale: f64,
    appearance: Appearance,
    timeline: Timeline<Segment>,
}

impl Segment {
    pub fn new(p1: Point2, p2: Point2, style: Style) -> Self {
        Self {
            p1,
            p2,
            scale: 1.0,
            appearance: Appearance::new(style),
            timeline: Timeline::new(),
        }
    }

    pub fn p1(&self) -> Point2 {
        self.p1
    }

    pub fn p2(&self) -> Point2 {
        self.p2
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Keeps the current scale when `scale` is `None`.
    pub fn set(&mut self, p1: Point2, p2: Point2, scale: Option<f64>) {
        self.p1 = p1;
        self.p2 = p2;
        if let Some(s) = scale {
            self.scale = s;
        }
    }

    /// The visible end: `p1 + (p2 - p1)·scale`.
    pub fn end(&self) -> Point2 {
        self.p1 + (self.p2 - self.p1).scale(self.scale)
    }

    pub fn midpoint(&self) -> Point2 {
        self.p1 + (self.p2 - self.p1).scale(self.scale / 2.0)
    }

    /// Full length between the endpoints, ignoring scale.
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).length()
    }

    /// Scale from `start` to `end`.
    pub fn resize(&mut self, start: f64, end: f64, tween: Tween) -> &mut Self {
        self.timeline
            .add_action(tween.duration, move |s: &mut Segment, p| {
                let k = interpolate(start, end, p.t, tween.ease);
                s.set(s.p1, s.p2, Some(k));
            });
        self
    }

    pub fn grow(&mut self, tween: Tween) -> &mut Self {
        self.resize(0.0, 1.0, tween)
    }

    pub fn shrink(&mut self, tween: Tween) -> &mut Self {
        self.resize(1.0, 0.0, tween)
    }

    /// Multiply the current scale by `factor`.
    pub fn scale_by(&mut self, factor: f64, tween: Tween) -> &mut Self {
        let k = self.scale;
        self.resize(k, k * factor, tween)
    }

    /// Move both endpoints along caller supplied paths.
    pub fn update(
        &mut self,
        p1: impl Fn(f64) -> Point2 + 'static,
        p2: impl Fn(f64) -> Point2 + 'static,
        tween: Tween,
    ) -> &mut Self {
        let ease = tween.ease;
        self.timeline
            .add_action(tween.duration, move |s: &mut Segment, p| {
                let e = ease.apply(p.t);
                s.set(p1(e), p2(e), None);
            });
        self
    }

    /// Rotate both endpoints by `angle` radians around `pivot` (default: `p1`).
    ///
    /// Applied as per-step deltas, so a concurrent move still composes.
    pub fn rotate(&mut self, angle: f64, pivot: Option<Point2>, tween: Tween) -> &mut Self {
        let pivot = pivot.unwrap_or(self.p1);
        let arm1 = self.p1 - pivot;
        let arm2 = self.p2 - pivot;
        self.timeline
            .add_action(tween.duration, move |s: &mut Segment, p| {
                let (now, before) = tween.step(p);
                let d1 = arm1.rotate(angle * now) - arm1.rotate(angle * before);
                let d2 = arm2.rotate(angle * now) - arm2.rotate(angle * before);
                s.set(s.p1 + d1, s.p2 + d2, None);
            });
        self
    }
}

impl Animated for Segment {
    /// The first endpoint.
    fn position(&self) -> Point2 {
        self.p1
    }

    fn set_position(&mut self, pos: Point2) {
        let offset = pos - self.p1;
        self.set(pos, self.p2 + offset, None);
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
#[path = "../../tests/unit/shapes/segment.rs"]
mod tests;
