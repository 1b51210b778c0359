use crate::model::Point;

#[inline]
pub fn add(p: Point, q: Point) -> Point {
    Point { x: p.x + q.x, y: p.y + q.y }
}

#[inline]
pub fn subtract(p: Point, q: Point) -> Point {
    Point { x: p.x - q.x, y: p.y - q.y }
}

#[inline]
pub fn distance_sq(p: Point, q: Point) -> f32 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}

#[inline]
pub fn distance(p: Point, q: Point) -> f32 {
    distance_sq(p, q).sqrt()
}

/// `center + (center - point)`
#[inline]
pub fn mirror(point: Point, center: Point) -> Point {
    Point {
        x: 2.0 * center.x - point.x,
        y: 2.0 * center.y - point.y,
    }
}

/// Squared distance from `p` to the closest point of segment `a..b`.
pub fn dist_point_to_seg_sq(p: Point, a: Point, b: Point) -> f32 {
    let v = subtract(b, a);
    let vv = v.x * v.x + v.y * v.y;
    if vv <= 0.0 {
        return distance_sq(p, a);
    }
    let w = subtract(p, a);
    let t = ((w.x * v.x + w.y * v.y) / vv).clamp(0.0, 1.0);
    distance_sq(p, Point { x: a.x + t * v.x, y: a.y + t * v.y })
}

/// Degree elevation: the cubic control points tracing the same curve as the
/// quadratic `p0, c, p1`.
pub fn quad_to_cubic(p0: Point, c: Point, p1: Point) -> (Point, Point) {
    let c1 = Point { x: p0.x + 2.0/3.0 * (c.x - p0.x), y: p0.y + 2.0/3.0 * (c.y - p0.y) };
    let c2 = Point { x: p1.x + 2.0/3.0 * (c.x - p1.x), y: p1.y + 2.0/3.0 * (c.y - p1.y) };
    (c1, c2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic_at(t: f32, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
        let u = 1.0 - t;
        let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        Point {
            x: b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
            y: b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
        }
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let (a, b) = (Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(dist_point_to_seg_sq(Point::new(5.0, 3.0), a, b), 9.0);
        assert_eq!(dist_point_to_seg_sq(Point::new(-3.0, 4.0), a, b), 25.0);
        assert_eq!(dist_point_to_seg_sq(Point::new(13.0, 0.0), a, b), 9.0);
        assert_eq!(dist_point_to_seg_sq(Point::new(3.0, 4.0), a, a), 25.0);
    }

    #[test]
    fn mirror_reflects_through_center() {
        let m = mirror(Point::new(3.0, 4.0), Point::new(1.0, 1.0));
        assert_eq!(m, Point::new(-1.0, -2.0));
    }

    #[test]
    fn elevated_quad_matches_midpoint() {
        let (p0, c, p1) = (Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0));
        let (c1, c2) = quad_to_cubic(p0, c, p1);
        let mid = cubic_at(0.5, p0, c1, c2, p1);
        // quadratic B(0.5) = 0.25*p0 + 0.5*c + 0.25*p1
        assert!((mid.x - 5.0).abs() < 1e-4);
        assert!((mid.y - 5.0).abs() < 1e-4);
    }
}
