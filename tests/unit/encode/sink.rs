use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::new(30, 1).unwrap(),
    }
}

#[test]
fn captures_frames_with_repeats() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(), 1).unwrap();
    sink.push_frame(FrameIndex(1), &frame(), 10).unwrap();
    sink.push_frame(FrameIndex(11), &frame(), 1).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.frames().len(), 3);
    assert_eq!(sink.frame_count(), 12);
    assert_eq!(sink.config(), Some(cfg()));
    assert!(sink.is_ended());
}

#[test]
fn rejects_overlapping_indices() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(), 5).unwrap();
    assert!(sink.push_frame(FrameIndex(4), &frame(), 1).is_err());
    assert!(sink.push_frame(FrameIndex(5), &frame(), 0).is_err());
    assert!(sink.push_frame(FrameIndex(5), &frame(), 1).is_ok());
}

#[test]
fn begin_clears_previous_capture() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(), 1).unwrap();
    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
}

#[test]
fn shared_sink_stays_readable_by_the_caller() {
    let shared = Arc::new(Mutex::new(InMemorySink::new()));
    let mut handle = Arc::clone(&shared);
    handle.begin(cfg()).unwrap();
    handle.push_frame(FrameIndex(0), &frame(), 3).unwrap();
    handle.end().unwrap();
    drop(handle);

    let sink = shared.lock().unwrap();
    assert_eq!(sink.config(), Some(cfg()));
    assert_eq!(sink.frame_count(), 3);
    assert!(sink.is_ended());
}
