use crate::animation::ease::interpolate;
use crate::animation::timeline::Timeline;
use crate::geometry::point::Point2;
use crate::shapes::animated::{Animated, Appearance, Tween};
use crate::shapes::style::Style;

/// A circle described by its center and radius.
#[derive(Debug)]
pub struct Disc {
    center: Point2,
    radius: f64,
    appearance: Appearance,
    timeline: Timeline<Disc>,
}

impl Disc {
    pub fn new(center: Point2, radius: f64, style: Style) -> Self {
        Self {
            center,
            radius,
            appearance: Appearance::new(style),
            timeline: Timeline::new(),
        }
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set(&mut self, center: Point2, radius: f64) {
        self.center = center;
        self.radius = radius;
    }

    /// Radius from `start` (default: the current radius) to `end`.
    pub fn resize(&mut self, start: Option<f64>, end: f64, tween: Tween) -> &mut Self {
        let start = start.unwrap_or(self.radius);
        self.timeline.add_action(tween.duration, move |d: &mut Disc, p| {
            let r = interpolate(start, end, p.t, tween.ease);
            d.set(d.center, r);
        });
        self
    }

    /// Radius from 0 to its current value.
    pub fn grow(&mut self, tween: Tween) -> &mut Self {
        let r = self.radius;
        self.resize(Some(0.0), r, tween)
    }

    /// Radius from its current value to 0.
    pub fn shrink(&mut self, tween: Tween) -> &mut Self {
        self.resize(None, 0.0, tween)
    }

    /// Multiply the radius by `factor`.
    pub fn scale_by(&mut self, factor: f64, tween: Tween) -> &mut Self {
        let r = self.radius;
        self.resize(Some(r), r * factor, tween)
    }

    /// Orbit the center by `angle` radians around `pivot`.
    pub fn rotate(&mut self, angle: f64, pivot: Point2, tween: Tween) -> &mut Self {
        let arm = self.center - pivot;
        self.timeline.add_action(tween.duration, move |d: &mut Disc, p| {
            let (now, before) = tween.step(p);
            let delta = arm.rotate(angle * now) - arm.rotate(angle * before);
            d.set(d.center + delta, d.radius);
        });
        self
    }
}

impl Animated for Disc {
    fn position(&self) -> Point2 {
        self.center
    }

    fn set_position(&mut self, pos: Point2) {
        self.set(pos, self.radius);
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
#[path = "../../tests/unit/shapes/disc.rs"]
mod tests;
