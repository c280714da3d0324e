//! Curves defined by a function of one parameter.
//!
//! A [`PathFn`] is either a planar curve `t -> (x, y)` or a graph `x -> y`. [`ParametricPath`]
//! re-tessellates its function whenever the function, origin or parameter limits change, so
//! every frame draws the exact curve for that instant.

use std::rc::Rc;

use crate::animation::ease::{Ease, interpolate};
use crate::animation::timeline::Timeline;
use crate::foundation::error::ProsvgResult;
use crate::geometry::path::PathData;
use crate::geometry::point::{Point2, Point3};
use crate::geometry::tessellate::{TessellateOpts, tessellate};
use crate::shapes::animated::{Animated, Appearance, Tween};
use crate::shapes::style::Style;

/// A curve or a graph.
#[derive(Clone)]
pub enum PathFn {
    Curve(Rc<dyn Fn(f64) -> Point2>),
    Graph(Rc<dyn Fn(f64) -> f64>),
}

impl std::fmt::Debug for PathFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Curve(_) => f.write_str("PathFn::Curve(..)"),
            Self::Graph(_) => f.write_str("PathFn::Graph(..)"),
        }
    }
}

impl PathFn {
    pub fn curve(f: impl Fn(f64) -> Point2 + 'static) -> Self {
        Self::Curve(Rc::new(f))
    }

    pub fn graph(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Graph(Rc::new(f))
    }

    /// A space curve seen through [`Point3::to_2d`].
    pub fn projected(f: impl Fn(f64) -> Point3 + 'static, distance: Option<f64>) -> Self {
        Self::curve(move |t| f(t).to_2d(distance))
    }

    pub fn is_graph(&self) -> bool {
        matches!(self, Self::Graph(_))
    }

    /// Point at parameter `t`; graphs map to `(t, f(t))`.
    pub fn eval(&self, t: f64) -> Point2 {
        match self {
            Self::Curve(f) => f(t),
            Self::Graph(f) => Point2::new(t, f(t)),
        }
    }

    /// `a·f`. Graphs scale their values only.
    pub fn scaled(&self, a: f64) -> Self {
        match self {
            Self::Curve(f) => {
                let f = Rc::clone(f);
                Self::curve(move |t| f(t).scale(a))
            }
            Self::Graph(f) => {
                let f = Rc::clone(f);
                Self::graph(move |x| a * f(x))
            }
        }
    }

    /// `f(t + dt)`.
    pub fn shifted(&self, dt: f64) -> Self {
        self.reparam(move |t| t + dt)
    }

    /// `f(k·t)`.
    pub fn stretched(&self, k: f64) -> Self {
        self.reparam(move |t| k * t)
    }

    fn reparam(&self, map: impl Fn(f64) -> f64 + 'static) -> Self {
        match self {
            Self::Curve(f) => {
                let f = Rc::clone(f);
                Self::curve(move |t| f(map(t)))
            }
            Self::Graph(f) => {
                let f = Rc::clone(f);
                Self::graph(move |x| f(map(x)))
            }
        }
    }

    /// Pointwise blend of two functions. Two graphs stay a graph; any other pairing blends
    /// evaluated points.
    pub fn morph(from: &PathFn, to: &PathFn, t: f64, ease: Ease) -> Self {
        match (from, to) {
            (Self::Graph(a), Self::Graph(b)) => {
                let (a, b) = (Rc::clone(a), Rc::clone(b));
                Self::graph(move |x| interpolate(a(x), b(x), t, ease))
            }
            _ => {
                let (a, b) = (from.clone(), to.clone());
                Self::curve(move |s| interpolate(a.eval(s), b.eval(s), t, ease))
            }
        }
    }
}

/// Produces the function to draw at a given eased progress.
pub trait PathGenerator {
    fn generate(&self, progress: f64) -> PathFn;
}

impl<F> PathGenerator for F
where
    F: Fn(f64) -> PathFn,
{
    fn generate(&self, progress: f64) -> PathFn {
        self(progress)
    }
}

/// Slides the parameter by `amount·progress`.
#[derive(Clone, Debug)]
pub struct Shift {
    pub base: PathFn,
    pub amount: f64,
}

impl PathGenerator for Shift {
    fn generate(&self, progress: f64) -> PathFn {
        self.base.shifted(self.amount * progress)
    }
}

/// Stretches the parameter from `1` to `factor`.
#[derive(Clone, Debug)]
pub struct StretchT {
    pub base: PathFn,
    pub factor: f64,
}

impl PathGenerator for StretchT {
    fn generate(&self, progress: f64) -> PathFn {
        self.base.stretched(1.0 + (self.factor - 1.0) * progress)
    }
}

/// Blends `from` into `to`.
#[derive(Clone, Debug)]
pub struct Morph {
    pub from: PathFn,
    pub to: PathFn,
}

impl PathGenerator for Morph {
    fn generate(&self, progress: f64) -> PathFn {
        PathFn::morph(&self.from, &self.to, progress, Ease::Linear)
    }
}

/// A tessellated [`PathFn`] drawn over `[t0, t1]` and offset by `origin`.
#[derive(Debug)]
pub struct ParametricPath {
    origin: Point2,
    func: PathFn,
    t0: f64,
    t1: f64,
    opts: TessellateOpts,
    path: PathData,
    appearance: Appearance,
    timeline: Timeline<ParametricPath>,
}

impl ParametricPath {
    pub fn new(
        origin: Point2,
        func: PathFn,
        t0: f64,
        t1: f64,
        opts: TessellateOpts,
        style: Style,
    ) -> ProsvgResult<Self> {
        opts.validate()?;
        let mut path = Self {
            origin,
            func,
            t0,
            t1,
            opts,
            path: PathData::new(),
            appearance: Appearance::new(style),
            timeline: Timeline::new(),
        };
        path.retessellate()?;
        Ok(path)
    }

    /// Graph of `y = f(x)` for `x` in `[x0, x1]`.
    pub fn graph(
        origin: Point2,
        f: impl Fn(f64) -> f64 + 'static,
        x0: f64,
        x1: f64,
        opts: TessellateOpts,
        style: Style,
    ) -> ProsvgResult<Self> {
        Self::new(origin, PathFn::graph(f), x0, x1, opts, style)
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn function(&self) -> &PathFn {
        &self.func
    }

    pub fn limits(&self) -> (f64, f64) {
        (self.t0, self.t1)
    }

    pub fn path(&self) -> &PathData {
        &self.path
    }

    pub fn set(&mut self, origin: Point2, func: PathFn, t0: f64, t1: f64) -> ProsvgResult<()> {
        self.origin = origin;
        self.func = func;
        self.t0 = t0;
        self.t1 = t1;
        self.retessellate()
    }

    pub fn opts(&self) -> TessellateOpts {
        self.opts
    }

    /// Change the sampling and redraw.
    pub fn set_opts(&mut self, opts: TessellateOpts) -> ProsvgResult<()> {
        opts.validate()?;
        self.opts = opts;
        self.retessellate()
    }

    fn retessellate(&mut self) -> ProsvgResult<()> {
        let origin = self.origin;
        let func = &self.func;
        self.path = tessellate(|t| func.eval(t) + origin, self.t0, self.t1, self.opts)?;
        Ok(())
    }

    /// `set` for use inside actions, where a failure can only be reported.
    fn apply(&mut self, origin: Point2, func: PathFn, t0: f64, t1: f64) {
        if let Err(err) = self.set(origin, func, t0, t1) {
            tracing::warn!(%err, "parametric path left empty");
            self.path.clear();
        }
    }

    /// Morph towards `target`; the exact target is installed on completion.
    pub fn transform_function(&mut self, target: PathFn, tween: Tween) -> &mut Self {
        let from = self.func.clone();
        let to = target.clone();
        self.timeline.add_action_with_completion(
            tween.duration,
            move |s: &mut ParametricPath, p| {
                let f = PathFn::morph(&from, &to, p.t, tween.ease);
                s.apply(s.origin, f, s.t0, s.t1);
            },
            move |s: &mut ParametricPath| {
                s.apply(s.origin, target, s.t0, s.t1);
            },
        );
        self
    }

    /// Draw `generator(ease(t))` every frame.
    pub fn update_function(
        &mut self,
        generator: impl PathGenerator + 'static,
        tween: Tween,
    ) -> &mut Self {
        let ease = tween.ease;
        self.timeline
            .add_action(tween.duration, move |s: &mut ParametricPath, p| {
                let f = generator.generate(ease.apply(p.t));
                s.apply(s.origin, f, s.t0, s.t1);
            });
        self
    }

    /// Limits from `[start0, start1]` to `[end0, end1]`.
    pub fn change_limits(
        &mut self,
        start0: f64,
        start1: f64,
        end0: f64,
        end1: f64,
        tween: Tween,
    ) -> &mut Self {
        self.timeline
            .add_action(tween.duration, move |s: &mut ParametricPath, p| {
                let t0 = interpolate(start0, end0, p.t, tween.ease);
                let t1 = interpolate(start1, end1, p.t, tween.ease);
                s.apply(s.origin, s.func.clone(), t0, t1);
            });
        self
    }

    /// Reveal the curve from `t0`: the upper limit sweeps from `from` (default `t0`) to `to`
    /// (default `t1`).
    pub fn draw(&mut self, from: Option<f64>, to: Option<f64>, tween: Tween) -> &mut Self {
        let (t0, t1) = (self.t0, self.t1);
        self.change_limits(t0, from.unwrap_or(t0), t0, to.unwrap_or(t1), tween)
    }

    /// Hide the curve towards `t1`: the lower limit sweeps from `from` (default `t0`) to `to`
    /// (default `t1`).
    pub fn erase(&mut self, from: Option<f64>, to: Option<f64>, tween: Tween) -> &mut Self {
        let (t0, t1) = (self.t0, self.t1);
        self.change_limits(from.unwrap_or(t0), t1, to.unwrap_or(t1), t1, tween)
    }

    pub fn shift(&mut self, amount: f64, tween: Tween) -> &mut Self {
        let base = self.func.clone();
        self.update_function(Shift { base, amount }, tween)
    }

    /// Scale the function's values by `factor`.
    pub fn scale_by(&mut self, factor: f64, tween: Tween) -> &mut Self {
        let target = self.func.scaled(factor);
        self.transform_function(target, tween)
    }

    pub fn scale_t(&mut self, factor: f64, tween: Tween) -> &mut Self {
        let base = self.func.clone();
        self.update_function(StretchT { base, factor }, tween)
    }
}

impl Animated for ParametricPath {
    fn position(&self) -> Point2 {
        self.origin
    }

    fn set_position(&mut self, pos: Point2) {
        let func = self.func.clone();
        self.apply(pos, func, self.t0, self.t1);
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
#[path = "../../tests/unit/shapes/parametric.rs"]
mod tests;
