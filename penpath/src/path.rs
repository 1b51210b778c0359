//! Path construction: anchor sequence to drawing commands.
//!
//! Each segment picks its curve type from the handles at its two ends:
//! a line when neither end has one, a quadratic when only the destination
//! does, and a cubic whenever the previous anchor left an outgoing control.

use serde::{Deserialize, Serialize};
use crate::geometry::flatten::flatten_cubic;
use crate::geometry::math::quad_to_cubic;
use crate::model::{Anchor, Point};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
}

impl PathCommand {
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::QuadTo { to, .. }
            | PathCommand::CubicTo { to, .. } => to,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathSpec {
    pub commands: Vec<PathCommand>,
}

impl PathSpec {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    /// SVG path data (`M`, `L`, `Q`, `C`), suitable for `Path2D` or a `d` attribute.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            let seg = match *cmd {
                PathCommand::MoveTo { to } => format!("M {} {}", to.x, to.y),
                PathCommand::LineTo { to } => format!("L {} {}", to.x, to.y),
                PathCommand::QuadTo { ctrl, to } => {
                    format!("Q {} {}, {} {}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => format!(
                    "C {} {}, {} {}, {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
            };
            d.push_str(&seg);
        }
        d
    }

    /// Polyline approximation within `tol` of the curves. Quadratics are
    /// degree-elevated and share the cubic subdivision.
    pub fn flatten(&self, tol: f32) -> Vec<Point> {
        let mut points = Vec::new();
        let mut cur = Point::ZERO;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => points.push(to),
                PathCommand::QuadTo { ctrl, to } => {
                    let (c1, c2) = quad_to_cubic(cur, ctrl, to);
                    flatten_cubic(&mut points, cur, c1, c2, to, tol, 0);
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    flatten_cubic(&mut points, cur, ctrl1, ctrl2, to, tol, 0);
                }
            }
            cur = cmd.end_point();
        }
        points
    }
}

impl<'a> IntoIterator for &'a PathSpec {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;
    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

pub fn build_path<'a>(anchors: impl IntoIterator<Item = &'a Anchor>) -> PathSpec {
    let mut anchors = anchors.into_iter();
    let Some(first) = anchors.next() else {
        return PathSpec::default();
    };
    let mut commands = vec![PathCommand::MoveTo { to: first.point }];
    let mut previous_outgoing: Option<Point> = None;
    for a in anchors {
        let incoming = a.incoming_control();
        let cmd = match previous_outgoing {
            Some(ctrl1) => PathCommand::CubicTo { ctrl1, ctrl2: incoming, to: a.point },
            None if a.handle.is_some() => PathCommand::QuadTo { ctrl: incoming, to: a.point },
            None => PathCommand::LineTo { to: a.point },
        };
        commands.push(cmd);
        previous_outgoing = a.handle;
    }
    PathSpec { commands }
}
