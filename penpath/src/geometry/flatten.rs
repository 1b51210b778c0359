use crate::geometry::math::{dist_point_to_seg_sq, distance_sq};
use crate::geometry::tolerance::{EPS_POS, MAX_FLATTEN_DEPTH};
use crate::model::Point;

/// Appends a polyline approximation of the cubic `p0..p3` to `points`,
/// excluding `p0` (the caller has already emitted it).
pub fn flatten_cubic(points: &mut Vec<Point>, p0: Point, p1: Point, p2: Point, p3: Point, tol: f32, depth: u32) {
    if distance_sq(p0, p3) <= EPS_POS * EPS_POS
        && distance_sq(p0, p1) <= EPS_POS * EPS_POS
        && distance_sq(p0, p2) <= EPS_POS * EPS_POS
    {
        points.push(p3);
        return;
    }
    let d1 = dist_point_to_seg_sq(p1, p0, p3);
    let d2 = dist_point_to_seg_sq(p2, p0, p3);
    let tol2 = tol * tol;
    if d1.max(d2) <= tol2 || depth > MAX_FLATTEN_DEPTH {
        points.push(p3);
        return;
    }
    let mid = |a: Point, b: Point| Point { x: 0.5 * (a.x + b.x), y: 0.5 * (a.y + b.y) };
    let p01 = mid(p0, p1);
    let p12 = mid(p1, p2);
    let p23 = mid(p2, p3);
    let p012 = mid(p01, p12);
    let p123 = mid(p12, p23);
    let p0123 = mid(p012, p123);
    flatten_cubic(points, p0, p01, p012, p0123, tol, depth + 1);
    flatten_cubic(points, p0123, p123, p23, p3, tol, depth + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_cubic_is_one_segment() {
        let mut pts = Vec::new();
        let p0 = Point::new(0.0, 0.0);
        let p3 = Point::new(30.0, 0.0);
        flatten_cubic(&mut pts, p0, Point::new(10.0, 0.0), Point::new(20.0, 0.0), p3, 0.25, 0);
        assert_eq!(pts, vec![p3]);
    }

    #[test]
    fn bent_cubic_subdivides_and_ends_on_endpoint() {
        let mut pts = Vec::new();
        let p3 = Point::new(100.0, 0.0);
        flatten_cubic(&mut pts, Point::ZERO, Point::new(0.0, 80.0), Point::new(100.0, 80.0), p3, 0.25, 0);
        assert!(pts.len() > 4);
        assert_eq!(*pts.last().unwrap(), p3);
    }
}
