// Bounds on values accepted from the input boundary

pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;

// Marker hit radius and tolerances are screen-space distances
pub const RADIUS_MAX: f32 = 1_000.0;
pub const TOLERANCE_MIN: f32 = 1e-3;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_radius_bounds(r: f32) -> bool { r.is_finite() && r > 0.0 && r <= RADIUS_MAX }
