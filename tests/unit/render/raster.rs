use super::*;

fn canvas() -> Canvas {
    Canvas::new(20, 10).unwrap()
}

#[test]
fn rasterizes_at_scale() {
    let r = Rasterizer::new(canvas(), 2.0).unwrap();
    assert_eq!(r.size(), (40, 20));
    let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"10\" viewBox=\"0 0 20 10\">\
               <rect width=\"100%\" height=\"100%\" fill=\"#ff0000\"/></svg>";
    let frame = r.rasterize(svg).unwrap();
    assert_eq!((frame.width, frame.height), (40, 20));
    assert_eq!(frame.data.len(), 40 * 20 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(39, 19), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(40, 0), None);
}

#[test]
fn empty_scene_is_transparent() {
    let r = Rasterizer::new(canvas(), 1.0).unwrap();
    let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"10\"></svg>";
    let frame = r.rasterize(svg).unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn invalid_svg_is_an_error() {
    let r = Rasterizer::new(canvas(), 1.0).unwrap();
    assert!(r.rasterize("<not svg").is_err());
}

#[test]
fn straight_alpha_conversion() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight_rgba(), vec![128, 0, 0, 128]);
    assert_eq!(frame.pixel(0, 0), Some([128, 0, 0, 128]));
}

#[test]
fn invalid_scale_is_rejected() {
    assert!(Rasterizer::new(canvas(), 0.0).is_err());
}
