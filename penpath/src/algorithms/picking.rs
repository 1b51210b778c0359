use crate::algorithms::markers::Marker;
use crate::geometry::math::distance_sq;
use crate::model::Point;

/// Topmost marker whose circle of `radius` contains `pos`. Markers are in draw
/// order, so overlapping circles resolve to the one drawn last.
pub fn pick_marker(markers: &[Marker], pos: Point, radius: f32) -> Option<Marker> {
    let r2 = radius * radius;
    markers.iter().rev().find(|m| distance_sq(m.position, pos) <= r2).copied()
}
