use serde::{Deserialize, Serialize};

use crate::error::{EditError, Result};
use crate::geometry::limits::{in_radius_bounds, RADIUS_MAX, TOLERANCE_MIN};
use crate::geometry::tolerance::{DRAG_THRESHOLD, FLATTEN_TOLERANCE, MARKER_RADIUS};

/// Tunables for the live-edit session. Missing fields take their defaults, so a
/// partial object from the host is enough.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// A press that moves farther than this becomes a drag and pulls out a handle.
    pub drag_threshold: f32,
    /// Hit radius of the circular markers.
    pub marker_radius: f32,
    pub flatten_tolerance: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            marker_radius: MARKER_RADIUS,
            flatten_tolerance: FLATTEN_TOLERANCE,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.drag_threshold.is_finite() {
            return Err(EditError::NonFinite("drag_threshold"));
        }
        if self.drag_threshold < 0.0 || self.drag_threshold > RADIUS_MAX {
            return Err(EditError::OutOfRange {
                param: "drag_threshold",
                min: 0.0,
                max: RADIUS_MAX,
                got: self.drag_threshold,
            });
        }
        if !self.marker_radius.is_finite() {
            return Err(EditError::NonFinite("marker_radius"));
        }
        if !in_radius_bounds(self.marker_radius) {
            return Err(EditError::OutOfRange {
                param: "marker_radius",
                min: 0.0,
                max: RADIUS_MAX,
                got: self.marker_radius,
            });
        }
        if !self.flatten_tolerance.is_finite() {
            return Err(EditError::NonFinite("flatten_tolerance"));
        }
        if self.flatten_tolerance < TOLERANCE_MIN || self.flatten_tolerance > RADIUS_MAX {
            return Err(EditError::OutOfRange {
                param: "flatten_tolerance",
                min: TOLERANCE_MIN,
                max: RADIUS_MAX,
                got: self.flatten_tolerance,
            });
        }
        Ok(())
    }
}
