//! Capability shared by every animated shape.
//!
//! A shape exposes its canonical position, its [`Appearance`], and its own [`Timeline`]. The
//! generic verbs here (fades and moves) are written once against that surface; each shape adds
//! its own geometric verbs on top, all expressed as timeline actions that call the shape's `set`.

use crate::animation::ease::{Ease, interpolate};
use crate::animation::timeline::{Advance, Progress, Timeline};
use crate::geometry::point::Point2;
use crate::shapes::style::Style;

/// Duration and easing of one verb.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
}

impl Default for Tween {
    fn default() -> Self {
        Self {
            duration: 1.0,
            ease: Ease::InOut,
        }
    }
}

impl Tween {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self { duration, ease }
    }

    pub fn secs(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn linear(duration: f64) -> Self {
        Self::new(duration, Ease::Linear)
    }

    /// Eased increment between the previous and the current step.
    pub(crate) fn step(&self, p: Progress) -> (f64, f64) {
        (self.ease.apply(p.t), self.ease.apply(p.t - p.dt))
    }
}

/// Non-geometric presentation state carried by every shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Appearance {
    pub style: Style,
    /// In `[0, 1]` when set through the fade verbs.
    pub opacity: f64,
    /// Element id, required for instancing.
    pub name: Option<String>,
}

impl Appearance {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            opacity: 1.0,
            name: None,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

/// A shape driven by its own timeline.
pub trait Animated: Sized + 'static {
    /// Canonical anchor used by the move verbs.
    fn position(&self) -> Point2;
    fn set_position(&mut self, pos: Point2);

    fn appearance(&self) -> &Appearance;
    fn appearance_mut(&mut self) -> &mut Appearance;

    fn timeline(&self) -> &Timeline<Self>;
    fn timeline_mut(&mut self) -> &mut Timeline<Self>;

    fn opacity(&self) -> f64 {
        self.appearance().opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.appearance_mut().opacity = opacity;
    }

    fn style(&self) -> &Style {
        &self.appearance().style
    }

    fn name(&self) -> Option<&str> {
        self.appearance().name.as_deref()
    }

    fn named(mut self, name: impl Into<String>) -> Self {
        self.appearance_mut().name = Some(name.into());
        self
    }

    /// Opacity from 0 to 1. Replaces any pending actions.
    fn fade_in(&mut self, tween: Tween) -> &mut Self {
        let ease = tween.ease;
        *self.timeline_mut() = Timeline::single(tween.duration, move |s: &mut Self, p| {
            s.set_opacity(ease.apply(p.t));
        });
        self
    }

    /// Opacity from 1 to 0. Replaces any pending actions.
    fn fade_out(&mut self, tween: Tween) -> &mut Self {
        let ease = tween.ease;
        *self.timeline_mut() = Timeline::single(tween.duration, move |s: &mut Self, p| {
            s.set_opacity(ease.inverse(p.t));
        });
        self
    }

    /// Translate by `delta`, applied incrementally so concurrent moves add up.
    fn move_by(&mut self, delta: Point2, tween: Tween) -> &mut Self {
        self.timeline_mut()
            .add_action(tween.duration, move |s: &mut Self, p| {
                let (now, before) = tween.step(p);
                let pos = s.position();
                s.set_position(pos + delta.scale(now - before));
            });
        self
    }

    /// Translate so the anchor ends at `dest`. The delta is fixed when the verb is called.
    fn move_to(&mut self, dest: Point2, tween: Tween) -> &mut Self {
        let delta = dest - self.position();
        self.move_by(delta, tween)
    }

    /// Place the anchor on `path(ease(t))` every frame.
    fn move_along_path(
        &mut self,
        path: impl Fn(f64) -> Point2 + 'static,
        tween: Tween,
    ) -> &mut Self {
        let ease = tween.ease;
        self.timeline_mut()
            .add_action(tween.duration, move |s: &mut Self, p| {
                s.set_position(path(ease.apply(p.t)));
            });
        self
    }

    /// Blend the anchor from its current spot to `dest` along a straight line, overriding
    /// rather than accumulating.
    fn slide_to(&mut self, dest: Point2, tween: Tween) -> &mut Self {
        let start = self.position();
        self.timeline_mut()
            .add_action(tween.duration, move |s: &mut Self, p| {
                s.set_position(interpolate(start, dest, p.t, tween.ease));
            });
        self
    }

    /// Step this shape's timeline by `dt` seconds.
    ///
    /// The timeline is detached while it runs so actions get `&mut self`; anything queued by a
    /// completion callback is appended afterwards.
    fn advance(&mut self, dt: f64) -> Advance {
        drive(self, |tl, s| tl.advance(s, dt))
    }

    /// Settle every pending action at its end state and fire completions.
    fn finish(&mut self) {
        drive(self, |tl, s| tl.finish(s));
    }
}

fn drive<S: Animated, R>(shape: &mut S, f: impl FnOnce(&mut Timeline<S>, &mut S) -> R) -> R {
    let mut timeline = std::mem::take(shape.timeline_mut());
    let out = f(&mut timeline, shape);
    let queued = std::mem::replace(shape.timeline_mut(), timeline);
    if !queued.is_empty() {
        shape.timeline_mut().extend(queued);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/animated.rs"]
mod tests;
