//! SVG text for scene snapshots.
//!
//! Each shape becomes one element. [`SvgDocument`] keeps those fragments keyed by [`ShapeId`]
//! and replaces them in place as shapes change, so the document always mirrors the scene in
//! paint order.

use crate::foundation::math::round_to;
use crate::geometry::point::Point2;
use crate::scene::{Instance, Scene, Shape, ShapeId};
use crate::shapes::animated::{Animated, Appearance};
use crate::shapes::label::Label;

const PRECISION: i32 = 2;

fn num(v: f64) -> f64 {
    round_to(v, PRECISION)
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_appearance(out: &mut String, look: &Appearance) {
    if let Some(name) = &look.name {
        out.push_str(&format!(" id=\"{}\"", escape_xml(name)));
    }
    for (k, v) in look.style.iter() {
        out.push_str(&format!(" {}=\"{}\"", escape_xml(k), escape_xml(v)));
    }
    if num(look.opacity) != 1.0 {
        out.push_str(&format!(" opacity=\"{}\"", num(look.opacity)));
    }
}

fn points_attr(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_label(out: &mut String, label: &Label) {
    let o = label.origin();
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\"",
        num(o.x),
        num(o.y),
        label.anchor().as_str()
    ));
    write_appearance(out, label.appearance());
    out.push('>');
    for (i, line) in label.lines().enumerate() {
        let dy = if i == 0 { 0.0 } else { label.line_height() };
        out.push_str(&format!(
            "<tspan x=\"{}\" dy=\"{}em\">{}</tspan>",
            num(o.x),
            dy,
            escape_xml(line)
        ));
    }
    out.push_str("</text>");
}

fn describe_instance(out: &mut String, inst: &Instance) {
    out.push_str(&format!(
        "<use xlink:href=\"#{}\" x=\"{}\" y=\"{}\"/>",
        escape_xml(&inst.href),
        num(inst.offset.x),
        num(inst.offset.y)
    ));
}

/// One SVG element for `shape`.
pub fn describe(shape: &Shape) -> String {
    let mut out = String::new();
    match shape {
        Shape::Segment(s) => {
            let (a, b) = (s.p1(), s.end());
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                num(a.x),
                num(a.y),
                num(b.x),
                num(b.y)
            ));
            write_appearance(&mut out, s.appearance());
            out.push_str("/>");
        }
        Shape::Disc(d) => {
            let c = d.center();
            out.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
                num(c.x),
                num(c.y),
                num(d.radius().max(0.0))
            ));
            write_appearance(&mut out, d.appearance());
            out.push_str("/>");
        }
        Shape::Polygon(p) => {
            out.push_str(&format!("<polygon points=\"{}\"", points_attr(&p.vertices())));
            write_appearance(&mut out, p.appearance());
            out.push_str("/>");
        }
        Shape::Path(p) => {
            out.push_str(&format!("<path d=\"{}\"", p.path().to_svg_d()));
            write_appearance(&mut out, p.appearance());
            out.push_str("/>");
        }
        Shape::Label(l) => describe_label(&mut out, l),
        Shape::Instance(i) => describe_instance(&mut out, i),
    }
    out
}

/// Root element plus one fragment per shape.
#[derive(Clone, Debug, Default)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    background: Option<String>,
    fragments: Vec<(ShapeId, String)>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn set_background(&mut self, color: Option<&str>) {
        self.background = color.map(str::to_owned);
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragment(&self, id: ShapeId) -> Option<&str> {
        self.fragments
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, f)| f.as_str())
    }

    /// Replace the fragment for `id`, or append it if new.
    pub fn upsert(&mut self, id: ShapeId, fragment: String) {
        match self.fragments.iter_mut().find(|(i, _)| *i == id) {
            Some((_, f)) => *f = fragment,
            None => self.fragments.push((id, fragment)),
        }
    }

    pub fn remove(&mut self, id: ShapeId) -> bool {
        let before = self.fragments.len();
        self.fragments.retain(|(i, _)| *i != id);
        self.fragments.len() != before
    }

    /// Re-describe every shape of `scene` and drop fragments of removed shapes.
    pub fn sync(&mut self, scene: &Scene) {
        let canvas = scene.canvas();
        self.width = canvas.width;
        self.height = canvas.height;
        self.set_background(scene.background());
        self.fragments.retain(|(id, _)| scene.contains(*id));
        for (id, shape) in scene.iter() {
            self.upsert(id, describe(shape));
        }
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        ));
        if let Some(bg) = &self.background {
            out.push_str(&format!(
                "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
                escape_xml(bg)
            ));
        }
        for (_, fragment) in &self.fragments {
            out.push_str(fragment);
        }
        out.push_str("</svg>");
        out
    }
}

/// Full SVG text for the current state of `scene`.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut doc = SvgDocument::default();
    doc.sync(scene);
    doc.to_svg()
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
