use super::*;
use crate::animation::ease::Ease;
use crate::animation::timeline::Advance;

fn frames(d: &mut Disc, n: usize, dt: f64) -> Advance {
    let mut last = Advance::Running;
    for _ in 0..n {
        last = d.advance(dt);
    }
    last
}

#[test]
fn grow_over_thirty_frames_reaches_radius() {
    let mut d = Disc::new(Point2::new(300.0, 300.0), 50.0, Style::filled("blue"));
    d.grow(Tween::secs(1.0));
    assert_eq!(d.radius(), 50.0);

    d.advance(1.0 / 30.0);
    assert!(d.radius() < 1.0);

    assert_eq!(frames(&mut d, 29, 1.0 / 30.0), Advance::Running);
    assert!((d.radius() - 50.0).abs() < 1e-6);
    assert_eq!(d.center(), Point2::new(300.0, 300.0));
    assert_eq!(d.opacity(), 1.0);

    assert_eq!(d.advance(1.0 / 30.0), Advance::Finished);
    assert_eq!(d.radius(), 50.0);
    assert!(d.timeline().is_empty());
}

#[test]
fn shrink_and_scale() {
    let mut d = Disc::new(Point2::ZERO, 20.0, Style::default());
    d.shrink(Tween::linear(0.5));
    frames(&mut d, 6, 0.1);
    assert_eq!(d.radius(), 0.0);

    d.set(Point2::ZERO, 20.0);
    d.scale_by(1.5, Tween::linear(1.0));
    frames(&mut d, 11, 0.1);
    assert!((d.radius() - 30.0).abs() < 1e-9);
}

#[test]
fn resize_defaults_start_to_current_radius() {
    let mut d = Disc::new(Point2::ZERO, 10.0, Style::default());
    d.resize(None, 30.0, Tween::linear(1.0));
    frames(&mut d, 5, 0.1);
    assert!((d.radius() - 20.0).abs() < 1e-9);
}

#[test]
fn rotate_orbits_center_about_pivot() {
    let mut d = Disc::new(Point2::new(10.0, 0.0), 2.0, Style::default());
    d.rotate(std::f64::consts::FRAC_PI_2, Point2::ZERO, Tween::new(1.0, Ease::In));
    frames(&mut d, 12, 0.1);
    let c = d.center();
    assert!(c.x.abs() < 1e-9, "{c:?}");
    assert!((c.y - 10.0).abs() < 1e-9, "{c:?}");
    assert_eq!(d.radius(), 2.0);
}

#[test]
fn set_position_moves_center() {
    let mut d = Disc::new(Point2::ZERO, 1.0, Style::default());
    d.set_position(Point2::new(4.0, 5.0));
    assert_eq!(d.position(), Point2::new(4.0, 5.0));
}
