// Shared tolerances for the editing core

pub const EPS_POS: f32 = 1e-4;            // point coincidence threshold (px)
pub const EPS_CONSTRAINT: f32 = 1e-3;     // constraint tolerance for tests/invariants

// Gesture displacement above which a press becomes a drag (px)
pub const DRAG_THRESHOLD: f32 = 1.0;

// Half the 14 px marker frame
pub const MARKER_RADIUS: f32 = 7.0;

pub const FLATTEN_TOLERANCE: f32 = 0.25;

// Adaptive flattening cap
pub const MAX_FLATTEN_DEPTH: u32 = 16;

#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
