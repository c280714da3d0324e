use std::sync::{Arc, Mutex};

use super::*;
use crate::foundation::core::Canvas;
use crate::shapes::animated::{Animated, Tween};
use crate::shapes::disc::Disc;
use crate::shapes::label::Label;
use crate::shapes::style::Style;
use crate::geometry::point::Point2;

/// Records `(idx, repeat)` of every push.
#[derive(Clone, Default)]
struct Probe {
    pushes: Arc<Mutex<Vec<(u64, u32)>>>,
    ended: Arc<Mutex<bool>>,
}

impl FrameSink for Probe {
    fn begin(&mut self, _cfg: SinkConfig) -> ProsvgResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRGBA, repeat: u32) -> ProsvgResult<()> {
        self.pushes.lock().unwrap().push((idx.0, repeat));
        Ok(())
    }

    fn end(&mut self) -> ProsvgResult<()> {
        *self.ended.lock().unwrap() = true;
        Ok(())
    }
}

fn session() -> RenderSession {
    let mut scene = Scene::new(Canvas::new(64, 48).unwrap());
    scene.set_background("white");
    RenderSession::new(scene, SessionOpts::default()).unwrap()
}

fn add_disc(s: &mut RenderSession) -> ShapeId {
    s.scene_mut()
        .add(Disc::new(Point2::new(32.0, 24.0), 10.0, Style::filled("red")))
}

#[test]
fn play_without_sinks_advances_to_the_last_frame() {
    let mut s = session();
    let id = add_disc(&mut s);
    s.scene_mut().get_mut::<Disc>(id).unwrap().grow(Tween::secs(1.0));
    s.play(&[id]).unwrap();

    assert_eq!(s.stats().frames, 30);
    assert_eq!(s.stats().frames_rendered, 0);
    let d = s.scene().get::<Disc>(id).unwrap();
    assert!((d.radius() - 10.0).abs() < 1e-9);
    assert!(d.timeline().is_empty());
}

#[test]
fn frame_count_is_floor_of_longest_run_time() {
    let mut s = session();
    let a = add_disc(&mut s);
    let b = add_disc(&mut s);
    s.scene_mut().get_mut::<Disc>(a).unwrap().shrink(Tween::secs(0.5));
    s.scene_mut()
        .get_mut::<Disc>(b)
        .unwrap()
        .move_by(Point2::new(5.0, 0.0), Tween::secs(1.25));
    s.play(&[a, b]).unwrap();
    assert_eq!(s.stats().frames, 37);
    assert!(s.scene().get::<Disc>(a).unwrap().radius().abs() < 1e-9);
}

#[test]
fn play_resets_without_settling_a_partial_frame() {
    let mut s = session();
    let id = add_disc(&mut s);
    let fired = Arc::new(Mutex::new(0));
    let seen = fired.clone();
    let disc = s.scene_mut().get_mut::<Disc>(id).unwrap();
    disc.move_by(Point2::new(102.0, 0.0), Tween::linear(1.02));
    disc.timeline_mut().add_action_with_completion(
        1.02,
        |_: &mut Disc, _| {},
        move |_: &mut Disc| *seen.lock().unwrap() += 1,
    );
    s.play(&[id]).unwrap();

    assert_eq!(s.stats().frames, 30);
    let d = s.scene().get::<Disc>(id).unwrap();
    assert!((d.center().x - 132.0).abs() < 1e-6);
    assert!(d.timeline().is_empty());
    assert_eq!(*fired.lock().unwrap(), 0);
}

#[test]
fn play_rejects_unknown_ids() {
    let mut s = session();
    assert!(matches!(s.play(&[ShapeId(7)]), Err(ProsvgError::Validation(_))));
}

#[test]
fn frames_reach_every_sink_in_order() {
    let mut s = session();
    let id = add_disc(&mut s);
    let first = Probe::default();
    let second = Probe::default();
    let a = s.attach(first.clone()).unwrap();
    s.attach(second.clone()).unwrap();

    s.scene_mut()
        .get_mut::<Disc>(id)
        .unwrap()
        .fade_out(Tween::secs(0.1));
    s.play(&[id]).unwrap();
    s.pause(1.0).unwrap();
    s.finish_sink(a).unwrap();
    assert!(*first.ended.lock().unwrap());

    s.scene_mut()
        .get_mut::<Disc>(id)
        .unwrap()
        .fade_in(Tween::secs(0.1));
    s.play(&[id]).unwrap();
    let stats = s.finish().unwrap();

    assert_eq!(*first.pushes.lock().unwrap(), vec![(0, 1), (1, 1), (2, 1), (3, 30)]);
    assert_eq!(second.pushes.lock().unwrap().len(), 7);
    assert_eq!(second.pushes.lock().unwrap()[4], (33, 1));
    assert!(*second.ended.lock().unwrap());
    assert_eq!(stats.frames, 36);
    assert_eq!(stats.frames_rendered, 7);
    assert!((stats.seconds - 1.2).abs() < 1e-9);
}

#[test]
fn stop_and_resume_gate_playback() {
    let mut s = session();
    let id = add_disc(&mut s);
    s.scene_mut().get_mut::<Disc>(id).unwrap().grow(Tween::secs(1.0));
    s.stop();
    assert!(!s.is_running());
    s.play(&[id]).unwrap().pause(2.0).unwrap();
    assert_eq!(s.stats().frames, 0);
    assert_eq!(s.scene().get::<Disc>(id).unwrap().timeline().len(), 1);

    s.resume().play(&[id]).unwrap();
    assert_eq!(s.stats().frames, 30);
}

#[test]
fn pause_validates_duration() {
    let mut s = session();
    assert!(s.pause(-1.0).is_err());
    assert!(s.pause(f64::NAN).is_err());
    s.pause(0.01).unwrap();
    assert_eq!(s.stats().frames, 0);
}

#[test]
fn snapshot_svg_reflects_scene() {
    let mut s = session();
    let id = s
        .scene_mut()
        .add(Label::new(Point2::new(1.0, 2.0), "hi & bye", Style::default()));
    let svg = s.snapshot_svg();
    assert!(svg.contains("hi &amp; bye"));
    s.scene_mut().remove(id);
    assert!(!s.snapshot_svg().contains("<text"));
}

#[test]
fn save_falls_back_to_svg_text() {
    let mut s = session();
    add_disc(&mut s);
    let dir = std::env::temp_dir().join(format!("prosvg-session-txt-{}", std::process::id()));
    let path = dir.join("frame.txt");
    s.save(&path).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().starts_with("<svg"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn save_writes_svg_and_png() {
    let mut s = session();
    add_disc(&mut s);
    let dir = std::env::temp_dir().join(format!("prosvg-session-{}", std::process::id()));
    let svg_path = dir.join("frame.svg");
    let png_path = dir.join("frame.png");
    s.save(&svg_path).unwrap();
    s.save(&png_path).unwrap();

    let text = std::fs::read_to_string(&svg_path).unwrap();
    assert!(text.contains("<circle"));
    let img = image::open(&png_path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (64, 48));
    assert_eq!(img.get_pixel(32, 24).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_options_are_rejected() {
    let scene = Scene::new(Canvas::new(10, 10).unwrap());
    let opts = SessionOpts {
        fps: Fps { num: 0, den: 1 },
        scale: 1.0,
    };
    assert!(RenderSession::new(scene, opts).is_err());
}
