//! Live-edit session: committed drawing plus the pointer gesture in flight.
//!
//! A press on empty canvas starts a drawing gesture. The preview shows the
//! would-be anchor at the press location, with a handle at the pointer once the
//! gesture has moved past the drag threshold; release commits it. A press on an
//! existing marker instead manipulates that anchor directly.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, trace, warn};

use crate::algorithms::markers::{Guide, Marker, MarkerKind};
use crate::algorithms::picking::pick_marker;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::model::{Anchor, AnchorId, Command, Point};
use crate::path::PathSpec;
use crate::Drawing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, position: Point::new(x, y) }
    }
}

/// One press-to-release interaction on empty canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub start: Point,
    pub current: Point,
    crossed: bool,
}

impl Gesture {
    pub fn new(start: Point) -> Self {
        Self { start, current: start, crossed: false }
    }

    /// Once the threshold is exceeded the gesture stays a drag, even if the
    /// pointer comes back to where it started.
    pub fn update(&mut self, pos: Point, threshold: f32) {
        self.current = pos;
        if self.start.distance_to(pos) > threshold {
            self.crossed = true;
        }
    }

    pub fn is_drag(&self) -> bool {
        self.crossed
    }

    pub fn handle(&self) -> Option<Point> {
        self.crossed.then_some(self.current)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionState {
    Idle,
    Pressed(Gesture),
    Dragging(Gesture),
    /// Dragging an existing marker. `original` is the anchor as it was at
    /// pointer-down, restored on cancel.
    Manipulating {
        marker: Marker,
        grab_offset: Point,
        original: Anchor,
    },
}

/// Everything the rendering boundary needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub revision: u64,
    pub path: PathSpec,
    pub markers: Vec<Marker>,
    pub guides: Vec<Guide>,
    /// Marker under an active drag, for highlighting.
    pub active: Option<(AnchorId, MarkerKind)>,
}

#[derive(Clone, Debug)]
pub struct EditSession {
    drawing: Drawing,
    config: EditorConfig,
    state: SessionState,
    revision: u64,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            drawing: Drawing::new(),
            config: EditorConfig::default(),
            state: SessionState::Idle,
            revision: 0,
        }
    }

    pub fn with_config(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::new() })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.touch();
        Ok(())
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match &self.state {
            SessionState::Pressed(g) | SessionState::Dragging(g) => Some(g),
            _ => None,
        }
    }

    /// Key of the marker being dragged, if any.
    pub fn active_marker(&self) -> Option<(AnchorId, MarkerKind)> {
        match &self.state {
            SessionState::Manipulating { marker, .. } => Some(marker.key()),
            _ => None,
        }
    }

    /// Increases whenever the frame output may have changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Applies an edit to the committed drawing.
    pub fn apply(&mut self, cmd: Command) -> Result<AnchorId> {
        let id = self.drawing.apply(cmd)?;
        self.touch();
        Ok(id)
    }

    /// Returns the id of the anchor committed by an `Up`, if any.
    pub fn handle_event(&mut self, ev: PointerEvent) -> Option<AnchorId> {
        match ev.phase {
            PointerPhase::Down => {
                self.pointer_down(ev.position);
                None
            }
            PointerPhase::Move => {
                self.pointer_move(ev.position);
                None
            }
            PointerPhase::Up => self.pointer_up(ev.position),
            PointerPhase::Cancel => {
                self.cancel();
                None
            }
        }
    }

    pub fn pointer_down(&mut self, pos: Point) {
        if self.state != SessionState::Idle {
            // The previous release never arrived; drop that gesture.
            warn!(state = ?self.state, "pointer down during active gesture");
            self.cancel();
        }
        let markers = self.drawing.markers();
        let hit = pick_marker(&markers.markers, pos, self.config.marker_radius);
        self.state = match hit.and_then(|m| self.drawing.get(m.id).map(|a| (m, *a))) {
            Some((marker, original)) => {
                debug!(id = %marker.id, kind = ?marker.kind, "grabbed marker");
                SessionState::Manipulating {
                    marker,
                    grab_offset: marker.position - pos,
                    original,
                }
            }
            None => SessionState::Pressed(Gesture::new(pos)),
        };
        self.touch();
    }

    pub fn pointer_move(&mut self, pos: Point) {
        let threshold = self.config.drag_threshold;
        let state = self.state;
        match state {
            SessionState::Idle => return,
            SessionState::Pressed(mut g) | SessionState::Dragging(mut g) => {
                g.update(pos, threshold);
                trace!(x = pos.x, y = pos.y, drag = g.is_drag(), "gesture moved");
                self.state = if g.is_drag() {
                    SessionState::Dragging(g)
                } else {
                    SessionState::Pressed(g)
                };
            }
            SessionState::Manipulating { marker, grab_offset, .. } => {
                self.dispatch_marker_edit(marker.command_to(pos + grab_offset));
            }
        }
        self.touch();
    }

    pub fn pointer_up(&mut self, pos: Point) -> Option<AnchorId> {
        self.pointer_move(pos);
        let committed = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => return None,
            SessionState::Pressed(g) | SessionState::Dragging(g) => {
                let id = self.drawing.append_anchor(g.start, g.handle());
                debug!(id = %id, handle = g.is_drag(), "committed anchor");
                Some(id)
            }
            SessionState::Manipulating { marker, .. } => {
                debug!(id = %marker.id, kind = ?marker.kind, "released marker");
                None
            }
        };
        self.touch();
        committed
    }

    /// Abandons the gesture in flight without committing anything.
    pub fn cancel(&mut self) {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => return,
            SessionState::Pressed(_) | SessionState::Dragging(_) => {
                debug!("gesture cancelled");
            }
            SessionState::Manipulating { original, .. } => {
                debug!(id = %original.id, "marker drag cancelled");
                if let Err(error) = self.drawing.restore_anchor(original) {
                    warn!(%error, "could not restore anchor");
                }
            }
        }
        self.touch();
    }

    fn dispatch_marker_edit(&mut self, cmd: Command) {
        // Markers only ever name anchors of this drawing.
        if let Err(error) = self.drawing.apply(cmd) {
            warn!(%error, ?cmd, "marker edit rejected");
            debug_assert!(false, "marker edit rejected: {error}");
        }
    }

    /// Committed drawing plus the anchor the active gesture would commit.
    /// Recomputed on every call.
    pub fn preview(&self) -> Cow<'_, Drawing> {
        match self.gesture() {
            None => Cow::Borrowed(&self.drawing),
            Some(g) => {
                let mut copy = self.drawing.clone();
                copy.append_anchor(g.start, g.handle());
                Cow::Owned(copy)
            }
        }
    }

    pub fn frame(&self) -> Frame {
        let preview = self.preview();
        let set = preview.markers();
        Frame {
            revision: self.revision,
            path: preview.path(),
            markers: set.markers,
            guides: set.guides,
            active: self.active_marker(),
        }
    }

    pub fn flatten_preview(&self) -> Vec<Point> {
        self.preview().path().flatten(self.config.flatten_tolerance)
    }
}
