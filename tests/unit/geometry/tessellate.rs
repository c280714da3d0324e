use super::*;
use crate::geometry::path::PathCommand;
use std::f64::consts::TAU;

fn circle(t: f64) -> Point2 {
    Point2::new(t.cos(), t.sin())
}

#[test]
fn smooth_circle_is_one_subpath_of_joined_segments() {
    let path = tessellate(circle, 0.0, TAU, TessellateOpts::with_samples(60)).unwrap();
    assert_eq!(path.subpath_count(), 1);
    assert_eq!(path.segment_count(), 59);

    let cmds = path.commands();
    assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
    assert!(matches!(cmds[1], PathCommand::CurveTo { .. }));
    assert!(
        cmds[2..]
            .iter()
            .all(|c| matches!(c, PathCommand::SmoothCurveTo { .. }))
    );
}

#[test]
fn segment_endpoints_lie_on_the_curve() {
    let path = tessellate(circle, 0.0, TAU, TessellateOpts::with_samples(9)).unwrap();
    for cmd in path.commands() {
        let to = match *cmd {
            PathCommand::MoveTo(p) => p,
            PathCommand::CurveTo { to, .. } | PathCommand::SmoothCurveTo { to, .. } => to,
            _ => unreachable!(),
        };
        assert!((to.length() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn control_points_follow_hermite_conversion() {
    // A straight line: control points sit at thirds of each step.
    let path = tessellate(
        |t| Point2::new(t, 0.5 * t),
        0.0,
        3.0,
        TessellateOpts::with_samples(4),
    )
    .unwrap();
    match path.commands()[1] {
        PathCommand::CurveTo { c1, c2, to } => {
            assert!((c1 - Point2::new(1.0 / 3.0, 1.0 / 6.0)).length() < 1e-9);
            assert!((c2 - Point2::new(2.0 / 3.0, 1.0 / 3.0)).length() < 1e-9);
            assert_eq!(to, Point2::new(1.0, 0.5));
        }
        ref other => panic!("expected curve, got {other:?}"),
    }
}

#[test]
fn vertical_tangent_breaks_the_path() {
    let path = tessellate(
        |t| Point2::new(t * t * t, t),
        -1.0,
        1.0,
        TessellateOpts::with_samples(21),
    )
    .unwrap();
    assert!(path.subpath_count() >= 2);
    // The step ending on the cusp is dropped.
    assert_eq!(path.segment_count(), 19);
}

#[test]
fn domain_errors_restart_the_subpath() {
    // sqrt(|t| - 0.2) is undefined on (-0.2, 0.2).
    let f = |t: f64| Point2::new(t, (t.abs() - 0.2).sqrt());
    let path = tessellate(f, -1.0, 1.0, TessellateOpts::with_samples(11)).unwrap();
    assert_eq!(path.subpath_count(), 2);
    for cmd in path.commands() {
        if let PathCommand::CurveTo { c1, c2, to } = *cmd {
            assert!(c1.is_finite() && c2.is_finite() && to.is_finite());
        }
    }
}

#[test]
fn fallible_errors_are_absorbed() {
    let f = |t: f64| -> Result<Point2, &'static str> {
        if (0.45..0.55).contains(&t) {
            Err("undefined")
        } else {
            Ok(Point2::new(t, t * t))
        }
    };
    let path = tessellate_fallible(f, 0.0, 1.0, TessellateOpts::with_samples(11)).unwrap();
    assert_eq!(path.subpath_count(), 2);
}

#[test]
fn tessellation_is_deterministic() {
    let f = |t: f64| Point2::polar(100.0 + 25.0 * (6.0 * t).cos(), t);
    let a = tessellate(f, 0.0, TAU, TessellateOpts::with_samples(60)).unwrap();
    let b = tessellate(f, 0.0, TAU, TessellateOpts::with_samples(60)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rejects_degenerate_sampling() {
    assert!(tessellate(circle, 0.0, 1.0, TessellateOpts::with_samples(1)).is_err());
    assert!(tessellate(circle, 0.0, f64::NAN, TessellateOpts::default()).is_err());
    let opts = TessellateOpts {
        samples: 10,
        delta: 0.0,
    };
    assert!(tessellate(circle, 0.0, 1.0, opts).is_err());
}
