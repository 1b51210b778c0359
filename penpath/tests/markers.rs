use penpath::algorithms::markers::build_markers;
use penpath::algorithms::picking::pick_marker;
use penpath::{Anchor, AnchorId, Command, Drawing, MarkerKind, Point};
use serde_json::json;

#[test]
fn plain_anchor_has_single_marker() {
    let a = Anchor { id: AnchorId(7), point: Point::new(1.0, 1.0), handle: None };
    let set = build_markers([&a]);
    assert_eq!(set.markers.len(), 1);
    assert_eq!(set.markers[0].key(), (AnchorId(7), MarkerKind::Anchor));
    assert!(set.guides.is_empty());
}

#[test]
fn handle_adds_controls_and_guide() {
    let a = Anchor { id: AnchorId(2), point: Point::new(10.0, 10.0), handle: Some(Point::new(14.0, 7.0)) };
    let set = build_markers([&a]);
    let by_kind = |k| set.markers.iter().find(|m| m.kind == k).unwrap().position;
    assert_eq!(by_kind(MarkerKind::ControlA), Point::new(6.0, 13.0));
    assert_eq!(by_kind(MarkerKind::ControlB), Point::new(14.0, 7.0));
    assert_eq!(by_kind(MarkerKind::Anchor), Point::new(10.0, 10.0));
    assert_eq!(
        set.guides[0].points,
        [Point::new(6.0, 13.0), Point::new(10.0, 10.0), Point::new(14.0, 7.0)]
    );
    // Anchor circle is drawn over its controls
    assert_eq!(set.markers.last().unwrap().kind, MarkerKind::Anchor);
}

#[test]
fn marker_commands_route_by_kind() {
    let mut d = Drawing::new();
    let id = d.append_anchor(Point::new(0.0, 0.0), Some(Point::new(5.0, 0.0)));
    let set = d.markers();
    let to = Point::new(1.0, 2.0);
    let cmds: Vec<Command> = set.markers.iter().map(|m| m.command_to(to)).collect();
    assert_eq!(
        cmds,
        vec![
            Command::MoveHandlePrimary { id, to },
            Command::MoveHandleSecondary { id, to },
            Command::MoveAnchor { id, to },
        ]
    );
}

#[test]
fn markers_keep_identity_across_edits() {
    let mut d = Drawing::new();
    let a = d.append_anchor(Point::new(0.0, 0.0), Some(Point::new(5.0, 0.0)));
    d.append_anchor(Point::new(30.0, 0.0), None);
    let before: Vec<_> = d.markers().markers.iter().map(|m| m.key()).collect();
    d.move_anchor(a, Point::new(3.0, 3.0)).unwrap();
    let after: Vec<_> = d.markers().markers.iter().map(|m| m.key()).collect();
    assert_eq!(before, after);
}

#[test]
fn coincident_markers_hit_the_anchor() {
    let mut d = Drawing::new();
    // Handle so short that all three markers overlap
    d.append_anchor(Point::new(0.0, 0.0), Some(Point::new(0.5, 0.0)));
    let set = d.markers();
    let hit = pick_marker(&set.markers, Point::new(0.0, 0.0), 7.0).unwrap();
    assert_eq!(hit.kind, MarkerKind::Anchor);
}

#[test]
fn marker_wire_shape() {
    let mut d = Drawing::new();
    d.append_anchor(Point::new(0.0, 0.0), Some(Point::new(2.0, 0.0)));
    let v = serde_json::to_value(&d.markers().markers).unwrap();
    assert_eq!(
        v,
        json!([
            {"id": 0, "kind": "controlA", "position": {"x": -2.0, "y": 0.0}},
            {"id": 0, "kind": "controlB", "position": {"x": 2.0, "y": 0.0}},
            {"id": 0, "kind": "anchor", "position": {"x": 0.0, "y": 0.0}},
        ])
    );
}
