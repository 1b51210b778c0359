use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::geometry::math;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        math::distance(self, other)
    }

    /// Point reflection of `self` through `center`.
    pub fn mirrored(self, center: Point) -> Point {
        math::mirror(self, center)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        math::add(self, rhs)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        math::subtract(self, rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorId(pub u32);

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One vertex of a drawing.
///
/// `handle` is the raw point the user dragged out of the anchor. Its reflection
/// through `point` is the opposite control point, so the two controls are always
/// symmetric and the curve passes through the anchor without a cusp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: AnchorId,
    pub point: Point,
    pub handle: Option<Point>,
}

impl Anchor {
    /// `(mirrored handle, handle)`: the incoming and outgoing control points.
    pub fn control_pair(&self) -> Option<(Point, Point)> {
        let h = self.handle?;
        Some((h.mirrored(self.point), h))
    }

    /// Control point on the side a segment enters this anchor from.
    pub fn incoming_control(&self) -> Point {
        self.control_pair().map_or(self.point, |(incoming, _)| incoming)
    }
}

/// Explicit edit operations on a drawing, addressed by anchor id.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    MoveAnchor { id: AnchorId, to: Point },
    MoveHandlePrimary { id: AnchorId, to: Point },
    MoveHandleSecondary { id: AnchorId, to: Point },
    AppendAnchor { point: Point, handle: Option<Point> },
}
