use std::fmt::Write as _;

use crate::foundation::math::round_to;
use crate::geometry::point::Point2;

/// Decimal places kept when writing path data.
const PATH_PRECISION: i32 = 2;

/// One absolute path-drawing command.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cmd", content = "args", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
    HorizontalTo(f64),
    VerticalTo(f64),
    CurveTo { c1: Point2, c2: Point2, to: Point2 },
    /// Cubic whose first control point mirrors the previous command's second one.
    SmoothCurveTo { c2: Point2, to: Point2 },
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2,
    },
    Close,
}

/// An ordered list of path commands forming zero or more sub-paths.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, cmd: PathCommand) -> &mut Self {
        self.commands.push(cmd);
        self
    }

    pub fn move_to(&mut self, p: Point2) -> &mut Self {
        self.push(PathCommand::MoveTo(p))
    }

    pub fn line_to(&mut self, p: Point2) -> &mut Self {
        self.push(PathCommand::LineTo(p))
    }

    pub fn horizontal_to(&mut self, x: f64) -> &mut Self {
        self.push(PathCommand::HorizontalTo(x))
    }

    pub fn vertical_to(&mut self, y: f64) -> &mut Self {
        self.push(PathCommand::VerticalTo(y))
    }

    pub fn curve_to(&mut self, c1: Point2, c2: Point2, to: Point2) -> &mut Self {
        self.push(PathCommand::CurveTo { c1, c2, to })
    }

    pub fn smooth_curve_to(&mut self, c2: Point2, to: Point2) -> &mut Self {
        self.push(PathCommand::SmoothCurveTo { c2, to })
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::Close)
    }

    /// Elliptical arc around `center` from `start_angle` to `end_angle` (radians, sweeping
    /// clockwise in screen space). With `slice` the arc is closed through the center, as for a
    /// pie chart wedge.
    pub fn arc(
        &mut self,
        center: Point2,
        rx: f64,
        ry: f64,
        start_angle: f64,
        end_angle: f64,
        slice: bool,
    ) -> &mut Self {
        let on_ellipse = |a: f64| center + Point2::new(rx * a.cos(), ry * a.sin());
        let start = on_ellipse(start_angle);
        let end = on_ellipse(end_angle);

        if slice {
            self.move_to(center).line_to(start);
        } else {
            self.move_to(start);
        }
        self.push(PathCommand::Arc {
            rx,
            ry,
            rotation: 0.0,
            large_arc: (end_angle - start_angle).abs() > std::f64::consts::PI,
            sweep: true,
            to: end,
        });
        if slice {
            self.close();
        }
        self
    }

    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// Number of drawing commands (everything except moves and closes).
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, PathCommand::MoveTo(_) | PathCommand::Close))
            .count()
    }

    /// SVG `d` attribute text, coordinates rounded to two decimals.
    pub fn to_svg_d(&self) -> String {
        let r = |v: f64| round_to(v, PATH_PRECISION);
        let mut out = String::new();
        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match *cmd {
                PathCommand::MoveTo(p) => write!(out, "M {} {}", r(p.x), r(p.y)),
                PathCommand::LineTo(p) => write!(out, "L {} {}", r(p.x), r(p.y)),
                PathCommand::HorizontalTo(x) => write!(out, "H {}", r(x)),
                PathCommand::VerticalTo(y) => write!(out, "V {}", r(y)),
                PathCommand::CurveTo { c1, c2, to } => write!(
                    out,
                    "C {} {}, {} {}, {} {}",
                    r(c1.x),
                    r(c1.y),
                    r(c2.x),
                    r(c2.y),
                    r(to.x),
                    r(to.y)
                ),
                PathCommand::SmoothCurveTo { c2, to } => {
                    write!(out, "S {} {}, {} {}", r(c2.x), r(c2.y), r(to.x), r(to.y))
                }
                PathCommand::Arc {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    out,
                    "A {} {} {} {} {} {} {}",
                    r(rx),
                    r(ry),
                    r(rotation),
                    u8::from(large_arc),
                    u8::from(sweep),
                    r(to.x),
                    r(to.y)
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }

    /// Convert to a `kurbo` path, resolving smooth curves by reflecting the previous control
    /// point and arcs through `kurbo::SvgArc`.
    pub fn to_bez_path(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        let mut current = Point2::ZERO;
        let mut start = Point2::ZERO;
        let mut last_c2: Option<Point2> = None;

        for cmd in &self.commands {
            let mut c2_out = None;
            match *cmd {
                PathCommand::MoveTo(p) => {
                    path.move_to(p);
                    current = p;
                    start = p;
                }
                PathCommand::LineTo(p) => {
                    path.line_to(p);
                    current = p;
                }
                PathCommand::HorizontalTo(x) => {
                    current = Point2::new(x, current.y);
                    path.line_to(current);
                }
                PathCommand::VerticalTo(y) => {
                    current = Point2::new(current.x, y);
                    path.line_to(current);
                }
                PathCommand::CurveTo { c1, c2, to } => {
                    path.curve_to(c1, c2, to);
                    current = to;
                    c2_out = Some(c2);
                }
                PathCommand::SmoothCurveTo { c2, to } => {
                    let c1 = match last_c2 {
                        Some(prev) => current + (current - prev),
                        None => current,
                    };
                    path.curve_to(c1, c2, to);
                    current = to;
                    c2_out = Some(c2);
                }
                PathCommand::Arc {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let arc = kurbo::SvgArc {
                        from: current.into(),
                        to: to.into(),
                        radii: kurbo::Vec2::new(rx, ry),
                        x_rotation: rotation,
                        large_arc,
                        sweep,
                    };
                    match kurbo::Arc::from_svg_arc(&arc) {
                        Some(arc) => arc.to_cubic_beziers(0.1, |p1, p2, p| {
                            path.curve_to(p1, p2, p);
                        }),
                        None => path.line_to(to),
                    }
                    current = to;
                }
                PathCommand::Close => {
                    path.close_path();
                    current = start;
                }
            }
            last_c2 = c2_out;
        }
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
