//! Built-in scenes used by the CLI and the end-to-end tests.

use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::foundation::core::Canvas;
use crate::foundation::error::ProsvgResult;
use crate::geometry::point::Point2;
use crate::geometry::tessellate::TessellateOpts;
use crate::scene::{Scene, Shape, ShapeId};
use crate::session::RenderSession;
use crate::shapes::animated::{Animated, Tween};
use crate::shapes::disc::Disc;
use crate::shapes::label::{Label, TextAnchor};
use crate::shapes::parametric::{ParametricPath, PathFn};
use crate::shapes::polygon::Polygon;
use crate::shapes::segment::Segment;
use crate::shapes::style::Style;

pub const WHITE: &str = "#fff0cf";
pub const BLACK: &str = "#33583c";
pub const RED: &str = "#fe7853";
pub const BLUE: &str = "#50bac0";
pub const YELLOW: &str = "#ffbc7d";
pub const BROWN: &str = "#904236";
pub const GREEN: &str = "#3ba484";

/// A scripted scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Demo {
    /// A disc that grows, slides and orbits the center.
    Circle,
    /// A parabola drawn, morphed into a spiral, erased, then an animated epicycloid.
    Parametric,
    /// Fades, counters and typed text.
    Text,
    /// A point on a circle with its radius, projection and triangle.
    Orbit,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::Circle, Demo::Parametric, Demo::Text, Demo::Orbit];

    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Parametric => "parametric",
            Self::Text => "text",
            Self::Orbit => "orbit",
        }
    }

    pub fn canvas(self) -> Canvas {
        match self {
            Self::Text => Canvas {
                width: 800,
                height: 600,
            },
            _ => Canvas {
                width: 600,
                height: 600,
            },
        }
    }

    /// Empty scene with the demo's canvas and background.
    pub fn scene(self) -> Scene {
        let mut scene = Scene::new(self.canvas());
        scene.set_background(WHITE);
        scene
    }

    /// Play the whole script into `session`.
    #[tracing::instrument(skip(session), fields(demo = self.name()))]
    pub fn run(self, session: &mut RenderSession) -> ProsvgResult<()> {
        match self {
            Self::Circle => circle(session),
            Self::Parametric => parametric(session),
            Self::Text => text(session),
            Self::Orbit => orbit(session),
        }
    }
}

fn circle(s: &mut RenderSession) -> ProsvgResult<()> {
    let center = s.scene().center();
    let id = s
        .scene_mut()
        .add(Disc::new(center, 50.0, Style::filled(RED)));

    s.scene_mut().get_mut::<Disc>(id)?.grow(Tween::default());
    s.play(&[id])?;
    s.scene_mut()
        .get_mut::<Disc>(id)?
        .move_by(Point2::x_axis(100.0), Tween::default());
    s.play(&[id])?;
    s.scene_mut()
        .get_mut::<Disc>(id)?
        .move_by(Point2::x_axis(-200.0), Tween::linear(2.0));
    s.play(&[id])?.pause(2.0)?;

    s.scene_mut()
        .get_mut::<Disc>(id)?
        .rotate(TAU, center, Tween::linear(2.0))
        .scale_by(0.5, Tween::secs(2.0));
    s.play(&[id])?.pause(1.0)?;
    Ok(())
}

fn parametric(s: &mut RenderSession) -> ProsvgResult<()> {
    let (left, right, top, bottom, center) = {
        let sc = s.scene();
        (sc.left(), sc.right(), sc.top(), sc.bottom(), sc.center())
    };
    let axis = || Style::stroked(YELLOW, 3.0);
    let x_axis = s.scene_mut().add(Segment::new(left, right, axis()));
    let y_axis = s.scene_mut().add(Segment::new(top, bottom, axis()));
    s.scene_mut().get_mut::<Segment>(x_axis)?.grow(Tween::default());
    s.scene_mut().get_mut::<Segment>(y_axis)?.grow(Tween::default());
    s.play(&[x_axis, y_axis])?.pause(1.0)?;

    let parabola = PathFn::curve(|x| Point2::new(x, -x * x).scale(100.0));
    let func = s.scene_mut().add(ParametricPath::new(
        center,
        parabola,
        -2.0,
        2.0,
        TessellateOpts::default(),
        Style::stroked(GREEN, 5.0),
    )?);
    s.scene_mut()
        .get_mut::<ParametricPath>(func)?
        .draw(None, None, Tween::default());
    s.play(&[func])?.pause(1.0)?;

    let spiral = PathFn::curve(|t| Point2::polar(t / TAU, 3.0 * t).scale(100.0));
    s.scene_mut()
        .get_mut::<ParametricPath>(func)?
        .transform_function(spiral, Tween::secs(3.0))
        .change_limits(-2.0, 2.0, 0.0, TAU, Tween::secs(3.0));
    s.play(&[func])?.pause(1.0)?;

    s.scene_mut()
        .get_mut::<ParametricPath>(func)?
        .erase(None, None, Tween::default());
    s.play(&[func])?.pause(3.0)?;

    let epicycloid = |f: f64| {
        let k = 1.0 + 11.0 * f;
        PathFn::curve(move |t| Point2::polar(100.0, t) + Point2::polar(100.0 / k, k * t))
    };
    {
        let path = s.scene_mut().get_mut::<ParametricPath>(func)?;
        path.set_opts(TessellateOpts::with_samples(60))?;
        path.set(center, epicycloid(0.0), 0.0, TAU)?;
        path.draw(None, None, Tween::default());
    }
    s.play(&[func])?.pause(1.0)?;

    s.scene_mut()
        .get_mut::<ParametricPath>(func)?
        .update_function(epicycloid, Tween::linear(10.0));
    s.play(&[func])?.pause(1.0)?;
    Ok(())
}

fn text(s: &mut RenderSession) -> ProsvgResult<()> {
    s.pause(1.0)?;
    let center = s.scene().center();
    let mut title = Label::new(center, "Text Example", Style::font("sans-serif", 40.0, GREEN));
    title.align(TextAnchor::Middle);
    title.set_opacity(0.0);
    let id = s.scene_mut().add(title);

    s.scene_mut().get_mut::<Label>(id)?.fade_in(Tween::default());
    s.play(&[id])?.pause(1.0)?;

    for dx in [200.0, -400.0, 200.0] {
        s.scene_mut()
            .get_mut::<Label>(id)?
            .move_by(Point2::x_axis(dx), Tween::default());
        s.play(&[id])?;
    }

    s.scene_mut()
        .get_mut::<Label>(id)?
        .fade_text("Count: 0", Tween::default());
    s.play(&[id])?;
    s.scene_mut()
        .get_mut::<Label>(id)?
        .integer_count("Count: {}", 0, 100, Tween::secs(5.0));
    s.play(&[id])?.pause(1.0)?;

    s.scene_mut().get_mut::<Label>(id)?.delete_text(Tween::default());
    s.play(&[id])?.pause(1.0)?;

    s.scene_mut().get_mut::<Label>(id)?.type_text(
        "Typing some text\nanother line of text\n1 2 3 4 5 6 7 8 9",
        Tween::linear(4.0),
    );
    s.play(&[id])?.pause(1.0)?;
    Ok(())
}

fn orbit(s: &mut RenderSession) -> ProsvgResult<()> {
    const RADIUS: f64 = 150.0;
    const TURNS: f64 = 5.0;
    let start_angle = -TAU / 8.0;
    let center = s.scene().center() + Point2::y_axis(75.0);

    let mut title = Label::new(
        Point2::new(center.x, 100.0),
        "Programmatic SVG\nin Rust",
        Style::font("sans-serif", 40.0, BLACK),
    );
    title.align(TextAnchor::Middle);
    title.set_opacity(0.0);
    let title = s.scene_mut().add(title);
    s.scene_mut().get_mut::<Label>(title)?.fade_in(Tween::default());
    s.play(&[title])?;

    let dot_at = move |e: f64| center + Point2::polar(RADIUS, start_angle + TURNS * TAU * e);
    let dot_pos = dot_at(0.0);
    let foot = move |p: Point2| Point2::new(p.x, center.y);
    let dashed = || Style::stroked(BLUE, 3.0).dash_array(&[5.0]);

    let sc = s.scene_mut();
    let ring = sc.add(Disc::new(center, RADIUS, Style::filled_stroked(YELLOW, BROWN, 5.0)));
    let triangle = sc.add(Polygon::new(
        vec![center, foot(dot_pos), dot_pos],
        Style::filled(RED),
    )?);
    let x_axis = sc.add(Segment::new(
        center - Point2::x_axis(200.0),
        center + Point2::x_axis(200.0),
        dashed(),
    ));
    let y_axis = sc.add(Segment::new(
        center - Point2::y_axis(200.0),
        center + Point2::y_axis(200.0),
        dashed(),
    ));
    let radius = sc.add(Segment::new(center, dot_pos, Style::stroked(BROWN, 5.0)));
    let projection = sc.add(Segment::new(foot(dot_pos), dot_pos, dashed()));
    let dot = sc.add(Disc::new(dot_pos, 10.0, Style::filled(BROWN)).named("dot"));

    let grow = Tween::secs(3.0);
    sc.get_mut::<Disc>(ring)?.grow(grow);
    sc.get_mut::<Polygon>(triangle)?.grow(grow);
    for seg in [x_axis, y_axis, radius, projection] {
        sc.get_mut::<Segment>(seg)?.grow(grow);
    }
    sc.get_mut::<Disc>(dot)?.grow(grow);
    let all = [ring, triangle, x_axis, y_axis, radius, projection, dot];
    s.play(&all)?.pause(1.0)?;

    let spin = Tween::secs(10.0);
    let sc = s.scene_mut();
    sc.get_mut::<Disc>(dot)?.rotate(TURNS * TAU, center, spin);
    sc.get_mut::<Segment>(radius)?.rotate(TURNS * TAU, None, spin);
    sc.get_mut::<Segment>(projection)?
        .update(move |e| foot(dot_at(e)), dot_at, spin);
    sc.get_mut::<Polygon>(triangle)?
        .update(move |e| vec![center, foot(dot_at(e)), dot_at(e)], spin);
    s.play(&[dot, radius, projection, triangle])?.pause(1.0)?;

    let ghost = s.scene_mut().instance(dot, Point2::x_axis(40.0))?;
    s.pause(0.5)?;
    s.scene_mut().remove(ghost);

    let away = Tween::new(1.0, Ease::In);
    let sc = s.scene_mut();
    for (i, id) in all.iter().enumerate() {
        let delta = Point2::polar(600.0, i as f64 * TAU / all.len() as f64);
        match sc.shape_mut(*id) {
            Some(Shape::Disc(d)) => {
                d.move_by(delta, away);
            }
            Some(Shape::Segment(seg)) => {
                seg.move_by(delta, away);
            }
            Some(Shape::Polygon(p)) => {
                p.move_by(delta, away);
            }
            _ => {}
        }
    }
    s.play(&all)?;
    for id in all {
        s.scene_mut().remove(id);
    }
    s.scene_mut().get_mut::<Label>(title)?.fade_out(Tween::default());
    s.play(&[title])?;
    Ok(())
}

/// Ids of every shape currently in `scene`, in paint order.
pub fn shape_ids(scene: &Scene) -> Vec<ShapeId> {
    scene.iter().map(|(id, _)| id).collect()
}

#[cfg(test)]
#[path = "../tests/unit/demos.rs"]
mod tests;
