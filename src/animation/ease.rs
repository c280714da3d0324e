use crate::geometry::point::{Point2, Point3};

/// Progress reshaping functions.
///
/// Easings are not clamped: timelines may sample slightly past `t = 1`, and some easings
/// overshoot. Register new shapes with [`Ease::Custom`]; [`interpolate`] never needs to change.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity. Treated as a plain linear blend by [`interpolate`].
    Linear,
    /// Quadratic ease-in, `t²`.
    In,
    /// Complement of [`Ease::In`], `1 - (1 - t)²`.
    Out,
    /// `In(t)·(1 - t) + Out(t)·t`.
    #[default]
    InOut,
    /// `(1 - t)·t² + t²`, starts slow and leaves at full speed (orbit entry).
    InLinear,
    /// `t·(1 - t) + Out(t)·t`, starts at full speed and settles (orbit exit).
    LinearOut,
    /// A caller supplied mapping.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::In => t * t,
            Self::Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOut => Self::In.apply(t) * (1.0 - t) + Self::Out.apply(t) * t,
            Self::InLinear => (1.0 - t) * t * t + t * t,
            Self::LinearOut => t * (1.0 - t) + Self::Out.apply(t) * t,
            Self::Custom(f) => f(t),
        }
    }

    /// `1 - apply(t)`.
    pub fn inverse(self, t: f64) -> f64 {
        1.0 - self.apply(t)
    }
}

/// Values that can be blended with scalar weights.
pub trait Lerp: Copy {
    /// `a·wa + b·wb`.
    fn blend(a: Self, wa: f64, b: Self, wb: f64) -> Self;
}

impl Lerp for f64 {
    fn blend(a: Self, wa: f64, b: Self, wb: f64) -> Self {
        a * wa + b * wb
    }
}

impl Lerp for Point2 {
    fn blend(a: Self, wa: f64, b: Self, wb: f64) -> Self {
        a.scale(wa) + b.scale(wb)
    }
}

impl Lerp for Point3 {
    fn blend(a: Self, wa: f64, b: Self, wb: f64) -> Self {
        a.scale(wa) + b.scale(wb)
    }
}

/// `a·(1 - e) + b·e` with `e = ease(t)`.
///
/// [`Ease::Linear`] is matched by identity and blended with `t` directly, without going
/// through [`Ease::apply`].
pub fn interpolate<T: Lerp>(a: T, b: T, t: f64, ease: Ease) -> T {
    if let Ease::Linear = ease {
        return T::blend(a, 1.0 - t, b, t);
    }
    let e = ease.apply(t);
    T::blend(a, 1.0 - e, b, e)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
