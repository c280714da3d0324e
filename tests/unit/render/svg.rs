use super::*;
use crate::foundation::core::Canvas;
use crate::shapes::disc::Disc;
use crate::shapes::label::TextAnchor;
use crate::shapes::parametric::{ParametricPath, PathFn};
use crate::shapes::polygon::Polygon;
use crate::shapes::segment::Segment;
use crate::shapes::style::Style;
use crate::geometry::tessellate::TessellateOpts;

fn scene() -> Scene {
    Scene::new(Canvas::new(200, 100).unwrap())
}

#[test]
fn escapes_markup() {
    assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
}

#[test]
fn disc_and_segment_elements() {
    let mut d = Disc::new(Point2::new(10.0, 20.5), 3.333, Style::filled("red")).named("dot");
    d.set_opacity(0.5);
    assert_eq!(
        describe(&Shape::Disc(d)),
        "<circle cx=\"10\" cy=\"20.5\" r=\"3.33\" id=\"dot\" fill=\"red\" stroke=\"none\" opacity=\"0.5\"/>"
    );

    let mut s = Segment::new(Point2::ZERO, Point2::new(10.0, 0.0), Style::default());
    s.set(s.p1(), s.p2(), Some(0.5));
    assert_eq!(describe(&Shape::Segment(s)), "<line x1=\"0\" y1=\"0\" x2=\"5\" y2=\"0\"/>");
}

#[test]
fn polygon_and_path_elements() {
    let p = Polygon::new(
        vec![Point2::ZERO, Point2::new(4.0, 0.0), Point2::new(0.0, 3.0)],
        Style::default(),
    )
    .unwrap();
    assert_eq!(describe(&Shape::Polygon(p)), "<polygon points=\"0,0 4,0 0,3\"/>");

    let g = ParametricPath::new(
        Point2::ZERO,
        PathFn::graph(|_| 1.0),
        0.0,
        1.0,
        TessellateOpts::with_samples(2),
        Style::stroked("blue", 1.0),
    )
    .unwrap();
    let el = describe(&Shape::Path(g));
    assert!(el.starts_with("<path d=\"M 0 1 C"), "{el}");
    assert!(el.contains("stroke=\"blue\""));
}

#[test]
fn multi_line_label_uses_tspans() {
    let mut l = Label::new(Point2::new(5.0, 6.0), "a\n<b>", Style::default());
    l.align(TextAnchor::End);
    let el = describe(&Shape::Label(l));
    assert_eq!(
        el,
        "<text x=\"5\" y=\"6\" text-anchor=\"end\"><tspan x=\"5\" dy=\"0em\">a</tspan>\
         <tspan x=\"5\" dy=\"1.2em\">&lt;b&gt;</tspan></text>"
    );
}

#[test]
fn instance_references_name() {
    let el = describe(&Shape::Instance(Instance {
        href: "dot".into(),
        offset: Point2::new(1.0, 2.0),
    }));
    assert_eq!(el, "<use xlink:href=\"#dot\" x=\"1\" y=\"2\"/>");
}

#[test]
fn document_upserts_in_place() {
    let mut doc = SvgDocument::new(10, 10);
    doc.upsert(ShapeId(1), "<a/>".into());
    doc.upsert(ShapeId(2), "<b/>".into());
    doc.upsert(ShapeId(1), "<c/>".into());
    assert_eq!(doc.len(), 2);
    assert!(doc.to_svg().ends_with("<c/><b/></svg>"));
    assert!(doc.remove(ShapeId(1)));
    assert!(!doc.remove(ShapeId(1)));
    assert_eq!(doc.fragment(ShapeId(2)), Some("<b/>"));
}

#[test]
fn sync_tracks_scene_changes() {
    let mut s = scene();
    s.set_background("white");
    let a = s.add(Disc::new(Point2::ZERO, 1.0, Style::default()));
    let b = s.add(Disc::new(Point2::ZERO, 2.0, Style::default()));

    let mut doc = SvgDocument::default();
    doc.sync(&s);
    assert_eq!(doc.len(), 2);

    s.remove(a);
    s.get_mut::<Disc>(b).unwrap().set(Point2::ZERO, 7.0);
    doc.sync(&s);
    assert_eq!(doc.len(), 1);
    assert!(doc.fragment(b).unwrap().contains("r=\"7\""));

    let svg = doc.to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("width=\"200\" height=\"100\" viewBox=\"0 0 200 100\""));
    assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>"));
    assert_eq!(svg, scene_to_svg(&s));
}

#[test]
fn opacity_that_rounds_to_one_is_omitted() {
    let mut d = Disc::new(Point2::ZERO, 1.0, Style::default());
    d.set_opacity(0.999_999_9);
    assert!(!describe(&Shape::Disc(d)).contains("opacity"));
}
