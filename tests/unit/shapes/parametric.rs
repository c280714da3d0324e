use std::f64::consts::TAU;

use super::*;
use crate::animation::ease::Ease;

fn opts(n: usize) -> TessellateOpts {
    TessellateOpts::with_samples(n)
}

fn circle(r: f64) -> PathFn {
    PathFn::curve(move |t| Point2::polar(r, t))
}

#[test]
fn construction_tessellates_immediately() {
    let p = ParametricPath::new(Point2::new(300.0, 300.0), circle(100.0), 0.0, TAU, opts(60), Style::default())
        .unwrap();
    assert_eq!(p.path().subpath_count(), 1);
    assert_eq!(p.path().segment_count(), 59);
    assert!(p.path().to_svg_d().starts_with("M 400 300 C"));
}

#[test]
fn invalid_sample_count_is_rejected() {
    assert!(ParametricPath::new(Point2::ZERO, circle(1.0), 0.0, 1.0, opts(1), Style::default()).is_err());
}

#[test]
fn graph_offsets_by_origin() {
    let g = ParametricPath::graph(Point2::new(0.0, 10.0), |x| 2.0 * x, 0.0, 5.0, opts(6), Style::default())
        .unwrap();
    assert_eq!(g.function().eval(2.0), Point2::new(2.0, 4.0));
    assert!(g.path().to_svg_d().starts_with("M 0 10 C"));
    assert!(g.path().to_svg_d().ends_with("5 20"));
}

#[test]
fn path_fn_combinators() {
    let g = PathFn::graph(|x| x * x);
    assert_eq!(g.scaled(3.0).eval(2.0), Point2::new(2.0, 12.0));
    assert_eq!(g.shifted(1.0).eval(2.0), Point2::new(2.0, 9.0));
    assert_eq!(g.stretched(2.0).eval(1.5), Point2::new(1.5, 9.0));
    assert!(g.is_graph());

    let c = PathFn::curve(|t| Point2::new(t, 1.0));
    assert_eq!(c.scaled(2.0).eval(3.0), Point2::new(6.0, 2.0));
    assert!(!c.is_graph());
}

#[test]
fn morph_of_graphs_stays_graph() {
    let a = PathFn::graph(|_| 0.0);
    let b = PathFn::graph(|_| 10.0);
    let m = PathFn::morph(&a, &b, 0.5, Ease::Linear);
    assert!(m.is_graph());
    assert_eq!(m.eval(7.0), Point2::new(7.0, 5.0));

    let c = PathFn::curve(|t| Point2::new(t, 0.0));
    let mixed = PathFn::morph(&a, &c, 0.5, Ease::Linear);
    assert!(!mixed.is_graph());
}

#[test]
fn generators() {
    let base = PathFn::graph(|x| x);
    assert_eq!(Shift { base: base.clone(), amount: 4.0 }.generate(0.5).eval(1.0).y, 3.0);
    assert_eq!(StretchT { base: base.clone(), factor: 3.0 }.generate(1.0).eval(2.0).y, 6.0);
    let morph = Morph { from: base.clone(), to: PathFn::graph(|_| 0.0) };
    assert_eq!(morph.generate(1.0).eval(5.0).y, 0.0);
    let closure = |p: f64| PathFn::graph(move |_| p);
    assert_eq!(closure.generate(0.25).eval(0.0).y, 0.25);
}

#[test]
fn transform_function_snaps_to_target_on_completion() {
    let mut p = ParametricPath::graph(Point2::ZERO, |_| 0.0, 0.0, 1.0, opts(5), Style::default()).unwrap();
    p.transform_function(PathFn::graph(|_| 10.0), Tween::secs(1.0));
    for _ in 0..5 {
        p.advance(0.1);
    }
    let mid = p.function().eval(0.0).y;
    assert!(mid > 0.0 && mid < 10.0);
    for _ in 0..6 {
        p.advance(0.1);
    }
    assert_eq!(p.function().eval(0.3).y, 10.0);
    assert!(p.path().to_svg_d().starts_with("M 0 10"));
}

#[test]
fn draw_reveals_from_lower_limit() {
    let mut p = ParametricPath::graph(Point2::ZERO, |x| x, 0.0, 10.0, opts(11), Style::default()).unwrap();
    p.draw(None, None, Tween::linear(1.0));
    p.advance(0.0);
    assert!(p.path().is_empty());
    for _ in 0..5 {
        p.advance(0.1);
    }
    let (t0, t1) = p.limits();
    assert_eq!(t0, 0.0);
    assert!((t1 - 5.0).abs() < 1e-9);
    for _ in 0..6 {
        p.advance(0.1);
    }
    assert_eq!(p.limits(), (0.0, 10.0));
    assert_eq!(p.path().segment_count(), 10);
}

#[test]
fn erase_sweeps_lower_limit_to_end() {
    let mut p = ParametricPath::graph(Point2::ZERO, |x| x, 0.0, 10.0, opts(11), Style::default()).unwrap();
    p.erase(None, None, Tween::linear(1.0));
    for _ in 0..11 {
        p.advance(0.1);
    }
    assert_eq!(p.limits(), (10.0, 10.0));
    assert!(p.path().is_empty());
}

#[test]
fn shift_and_scale_t() {
    let mut p = ParametricPath::graph(Point2::ZERO, |x| x, 0.0, 1.0, opts(3), Style::default()).unwrap();
    p.shift(2.0, Tween::linear(1.0));
    for _ in 0..11 {
        p.advance(0.1);
    }
    assert!((p.function().eval(0.0).y - 2.0).abs() < 1e-9);

    let mut q = ParametricPath::graph(Point2::ZERO, |x| x, 0.0, 1.0, opts(3), Style::default()).unwrap();
    q.scale_t(3.0, Tween::linear(1.0));
    for _ in 0..11 {
        q.advance(0.1);
    }
    assert!((q.function().eval(1.0).y - 3.0).abs() < 1e-9);
}

#[test]
fn scale_by_scales_values() {
    let mut p = ParametricPath::graph(Point2::ZERO, |x| x + 1.0, 0.0, 1.0, opts(3), Style::default()).unwrap();
    p.scale_by(2.0, Tween::secs(0.5));
    for _ in 0..6 {
        p.advance(0.1);
    }
    assert_eq!(p.function().eval(1.0).y, 4.0);
}

#[test]
fn move_to_retessellates_at_new_origin() {
    let mut p = ParametricPath::graph(Point2::ZERO, |_| 0.0, 0.0, 1.0, opts(2), Style::default()).unwrap();
    p.move_to(Point2::new(50.0, 50.0), Tween::linear(0.5));
    for _ in 0..6 {
        p.advance(0.1);
    }
    assert!(p.path().to_svg_d().starts_with("M 50 50"));
}

#[test]
fn projected_space_curve() {
    let f = PathFn::projected(|t| Point3::new(t, 2.0 * t, 5.0), None);
    assert_eq!(f.eval(1.0), Point3::new(1.0, 2.0, 5.0).to_2d(None));
}

#[test]
fn set_opts_resamples() {
    let mut p = ParametricPath::graph(Point2::ZERO, |x| x, 0.0, 1.0, opts(3), Style::default()).unwrap();
    assert_eq!(p.path().segment_count(), 2);
    p.set_opts(opts(9)).unwrap();
    assert_eq!(p.opts().samples, 9);
    assert_eq!(p.path().segment_count(), 8);
    assert!(p.set_opts(opts(0)).is_err());
    assert_eq!(p.opts().samples, 9);
}
