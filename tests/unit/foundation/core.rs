use super::*;

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn canvas_scaled_rounds_up() {
    let c = Canvas::new(600, 401).unwrap();
    assert_eq!(c.scaled(1.5).unwrap(), (900, 602));
    assert!(c.scaled(0.0).is_err());
    assert!(Canvas::new(0, 10).is_err());
}
