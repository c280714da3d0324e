use super::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn close(a: Point2, b: Point2) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn rotate_zero_is_identity() {
    for p in [
        Point2::new(3.0, 4.0),
        Point2::new(-1.5, 0.25),
        Point2::new(0.1, -7.0),
        Point2::ZERO,
    ] {
        assert_eq!(p.rotate(0.0), p);
    }
}

#[test]
fn rotate_then_unrotate_roundtrips() {
    let p = Point2::new(12.0, -5.0);
    for a in [0.3, 1.0, PI, -2.2, 5.0 * TAU] {
        assert!(close(p.rotate(a).rotate(-a), p));
    }
}

#[test]
fn rotate_quarter_turn_is_counter_clockwise() {
    assert!(close(Point2::new(1.0, 0.0).rotate(FRAC_PI_2), Point2::new(0.0, 1.0)));
    assert_eq!(Point2::ZERO.rotate(1.0).length(), 0.0);
}

#[test]
fn polar_and_angle_agree() {
    let p = Point2::polar(2.0, PI / 3.0);
    assert!((p.length() - 2.0).abs() < 1e-12);
    assert!((p.angle() - PI / 3.0).abs() < 1e-12);
}

#[test]
fn scale_and_dot_are_distinct_operations() {
    let a = Point2::new(1.0, 2.0);
    let b = Point2::new(3.0, -1.0);
    assert_eq!(a.scale(2.0), Point2::new(2.0, 4.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(a.dot(b), 1.0);
}

#[test]
fn kurbo_conversions_roundtrip() {
    let p = Point2::new(1.5, -2.0);
    let k: kurbo::Point = p.into();
    assert_eq!(Point2::from(k), p);
    let v: kurbo::Vec2 = p.into();
    assert_eq!(Point2::from(v), p);
}

#[test]
fn single_axis_rotations_match_transform() {
    let p = Point3::new(1.0, 2.0, 3.0);
    let a = 0.7;
    assert_eq!(p.rotate_x(a), p.transform(a, 0.0, 0.0, 0.0, 0.0, 0.0));
    let z = p.rotate_z(FRAC_PI_2);
    assert!((z - Point3::new(-2.0, 1.0, 3.0)).length() < 1e-12);
    let y = Point3::new(1.0, 0.0, 0.0).rotate_y(FRAC_PI_2);
    assert!((y - Point3::new(0.0, 0.0, -1.0)).length() < 1e-12);
}

#[test]
fn transform_translates() {
    let p = Point3::new(1.0, 1.0, 1.0).transform(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
    assert_eq!(p, Point3::new(2.0, 3.0, 4.0));
}

#[test]
fn projection_perspective_and_orthographic() {
    let p = Point3::new(10.0, -4.0, 50.0);
    assert_eq!(p.to_2d(None), Point2::new(10.0, -4.0));
    let q = p.to_2d(Some(100.0));
    assert!(close(q, Point2::new(20.0, -8.0)));
}

#[test]
fn cross_is_orthogonal() {
    let a = Point3::new(1.0, 0.0, 0.0);
    let b = Point3::new(0.0, 1.0, 0.0);
    assert_eq!(a.cross(b), Point3::new(0.0, 0.0, 1.0));
    assert_eq!(a.cross(b).dot(a), 0.0);
}
