//! Draggable overlay markers for each anchor.

use serde::{Deserialize, Serialize};

use crate::model::{Anchor, AnchorId, Command, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    Anchor = 0,
    /// Mirrored control point, `control_pair().0`.
    ControlA = 1,
    /// Raw handle, `control_pair().1`.
    ControlB = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: AnchorId,
    pub kind: MarkerKind,
    pub position: Point,
}

impl Marker {
    /// Stable identity across frames.
    pub fn key(&self) -> (AnchorId, MarkerKind) {
        (self.id, self.kind)
    }

    /// The edit that drags this marker to `to`.
    pub fn command_to(&self, to: Point) -> Command {
        let id = self.id;
        match self.kind {
            MarkerKind::Anchor => Command::MoveAnchor { id, to },
            MarkerKind::ControlA => Command::MoveHandlePrimary { id, to },
            MarkerKind::ControlB => Command::MoveHandleSecondary { id, to },
        }
    }
}

/// Guide polyline `control A -> anchor -> control B`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: AnchorId,
    pub points: [Point; 3],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerSet {
    /// Draw order; later markers sit on top.
    pub markers: Vec<Marker>,
    pub guides: Vec<Guide>,
}

pub fn anchor_markers(a: &Anchor, out: &mut MarkerSet) {
    if let Some((ca, cb)) = a.control_pair() {
        out.guides.push(Guide { id: a.id, points: [ca, a.point, cb] });
        out.markers.push(Marker { id: a.id, kind: MarkerKind::ControlA, position: ca });
        out.markers.push(Marker { id: a.id, kind: MarkerKind::ControlB, position: cb });
    }
    out.markers.push(Marker { id: a.id, kind: MarkerKind::Anchor, position: a.point });
}

pub fn build_markers<'a>(anchors: impl IntoIterator<Item = &'a Anchor>) -> MarkerSet {
    let mut out = MarkerSet::default();
    for a in anchors {
        anchor_markers(a, &mut out);
    }
    out
}
