pub mod config;
pub mod error;
pub mod model;
pub mod path;
pub mod session;
pub mod geometry {
    pub mod flatten;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod markers;
    pub mod picking;
}

pub use algorithms::markers::{Guide, Marker, MarkerKind, MarkerSet};
pub use config::EditorConfig;
pub use error::EditError;
pub use model::{Anchor, AnchorId, Command, Point};
pub use path::{build_path, PathCommand, PathSpec};
pub use session::{EditSession, Frame, Gesture, PointerEvent, PointerPhase, SessionState};

use error::Result;
use indexmap::IndexMap;

/// An open path of anchors, kept in insertion order and addressed by id.
#[derive(Clone, Debug, Default)]
pub struct Drawing {
    pub(crate) anchors: IndexMap<AnchorId, Anchor>,
    pub(crate) next_id: u32,
    pub(crate) geom_ver: u64,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped on every successful mutation.
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn anchors(&self) -> impl ExactSizeIterator<Item = &Anchor> + '_ {
        self.anchors.values()
    }

    pub fn get(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(&id)
    }

    pub fn last(&self) -> Option<&Anchor> {
        self.anchors.last().map(|(_, a)| a)
    }

    /// Id the next appended anchor will receive.
    pub fn peek_next_id(&self) -> AnchorId {
        AnchorId(self.next_id)
    }

    fn anchor_mut(&mut self, id: AnchorId) -> Result<&mut Anchor> {
        self.anchors.get_mut(&id).ok_or(EditError::UnknownAnchor(id))
    }

    pub fn append_anchor(&mut self, point: Point, handle: Option<Point>) -> AnchorId {
        let id = AnchorId(self.next_id);
        self.next_id += 1;
        self.anchors.insert(id, Anchor { id, point, handle });
        self.bump();
        id
    }

    /// Moves the anchor and carries its handle along by the same offset, so the
    /// curve shape around the anchor is unchanged.
    pub fn move_anchor(&mut self, id: AnchorId, to: Point) -> Result<()> {
        let a = self.anchor_mut(id)?;
        let delta = to - a.point;
        a.point = to;
        a.handle = a.handle.map(|h| h + delta);
        self.bump();
        Ok(())
    }

    /// Drag of the mirrored control: store the handle that mirrors onto `to`.
    pub fn move_handle_primary(&mut self, id: AnchorId, to: Point) -> Result<()> {
        let a = self.anchor_mut(id)?;
        a.handle = Some(to.mirrored(a.point));
        self.bump();
        Ok(())
    }

    pub fn move_handle_secondary(&mut self, id: AnchorId, to: Point) -> Result<()> {
        let a = self.anchor_mut(id)?;
        a.handle = Some(to);
        self.bump();
        Ok(())
    }

    pub(crate) fn restore_anchor(&mut self, anchor: Anchor) -> Result<()> {
        let a = self.anchor_mut(anchor.id)?;
        *a = anchor;
        self.bump();
        Ok(())
    }

    /// Returns the id of the anchor the command created or touched.
    pub fn apply(&mut self, cmd: Command) -> Result<AnchorId> {
        match cmd {
            Command::MoveAnchor { id, to } => self.move_anchor(id, to).map(|_| id),
            Command::MoveHandlePrimary { id, to } => self.move_handle_primary(id, to).map(|_| id),
            Command::MoveHandleSecondary { id, to } => {
                self.move_handle_secondary(id, to).map(|_| id)
            }
            Command::AppendAnchor { point, handle } => Ok(self.append_anchor(point, handle)),
        }
    }

    pub fn path(&self) -> PathSpec {
        build_path(self.anchors.values())
    }

    pub fn markers(&self) -> MarkerSet {
        algorithms::markers::build_markers(self.anchors.values())
    }
}
