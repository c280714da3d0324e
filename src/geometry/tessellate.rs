//! Adaptive conversion of a parametric function into cubic Bezier path commands.
//!
//! The interval is split into `n - 1` equal steps. At each sample the forward derivative is
//! estimated and rescaled to "per step" units, and every step becomes one Hermite segment
//! expressed in Bezier form (`P1 = P0 + d0/3`, `P2 = P3 - d1/3`). A step whose outgoing
//! derivative is near vertical, or whose samples cannot be evaluated, is dropped and the next step
//! opens a new sub-path.

use crate::foundation::error::{ProsvgError, ProsvgResult};
use crate::geometry::path::PathData;
use crate::geometry::point::Point2;

/// Slope above which a segment end is treated as a cusp.
pub const CUSP_SLOPE: f64 = 500.0;

/// Slope substituted when the derivative has no horizontal component.
const VERTICAL_SLOPE: f64 = 600.0;

/// Default finite-difference step.
pub const DEFAULT_DELTA: f64 = 1e-3;

/// Sampling options for [`tessellate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TessellateOpts {
    /// Number of samples over the interval, at least 2.
    pub samples: usize,
    /// Step used for the forward-difference derivative.
    pub delta: f64,
}

impl Default for TessellateOpts {
    fn default() -> Self {
        Self {
            samples: 30,
            delta: DEFAULT_DELTA,
        }
    }
}

impl TessellateOpts {
    pub fn with_samples(samples: usize) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ProsvgResult<()> {
        if self.samples < 2 {
            return Err(ProsvgError::geometry(format!(
                "tessellation needs at least 2 samples, got {}",
                self.samples
            )));
        }
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(ProsvgError::geometry(
                "tessellation delta must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// A sample that could not be evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainError;

/// Tessellate an infallible function. Samples with non-finite coordinates (for example `sqrt` of
/// a negative number) count as domain errors.
pub fn tessellate<F>(f: F, start: f64, end: f64, opts: TessellateOpts) -> ProsvgResult<PathData>
where
    F: Fn(f64) -> Point2,
{
    tessellate_fallible(|t| Ok::<_, DomainError>(f(t)), start, end, opts)
}

/// Tessellate a function that may fail at some parameters. Failures never abort the curve; the
/// current sub-path ends and a fresh one starts at the next valid step.
pub fn tessellate_fallible<F, E>(
    f: F,
    start: f64,
    end: f64,
    opts: TessellateOpts,
) -> ProsvgResult<PathData>
where
    F: Fn(f64) -> Result<Point2, E>,
{
    opts.validate()?;
    if !start.is_finite() || !end.is_finite() {
        return Err(ProsvgError::geometry(
            "tessellation interval bounds must be finite",
        ));
    }

    let n = opts.samples;
    let delta = opts.delta;
    let inc = (end - start) / (n - 1) as f64;
    let k = inc / delta;

    let eval = |t: f64| -> Option<Point2> { f(t).ok().filter(|p| p.is_finite()) };
    // Point and rescaled forward derivative at `t`.
    let sample = |t: f64| -> Option<(Point2, Point2)> {
        let p = eval(t)?;
        let ahead = eval(t + delta)?;
        Some((p, (ahead - p).scale(k)))
    };

    let mut path = PathData::new();
    let mut fresh = true;
    let mut p0 = Point2::ZERO;
    let mut p1 = Point2::ZERO;

    for step in 0..n - 1 {
        if fresh {
            let t0 = start + step as f64 * inc;
            match sample(t0) {
                Some((p, d)) => {
                    p0 = p;
                    p1 = p + d / 3.0;
                }
                None => {
                    tracing::trace!(t = t0, "tessellate: sample failed, restarting sub-path");
                    continue;
                }
            }
        }

        let t1 = start + (step + 1) as f64 * inc;
        let Some((p3, d1)) = sample(t1) else {
            tracing::trace!(t = t1, "tessellate: sample failed, restarting sub-path");
            fresh = true;
            continue;
        };
        let p2 = p3 - d1 / 3.0;

        let slope = if d1.x == 0.0 {
            VERTICAL_SLOPE
        } else {
            d1.y / d1.x
        };

        if slope > CUSP_SLOPE {
            tracing::trace!(t = t1, slope, "tessellate: cusp, breaking path");
            fresh = true;
        } else if fresh {
            path.move_to(p0).curve_to(p1, p2, p3);
            fresh = false;
        } else {
            path.smooth_curve_to(p2, p3);
        }
    }

    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/tessellate.rs"]
mod tests;
