use js_sys::{Float32Array, Reflect, Uint32Array, Uint8Array};
use penpath_wasm::Editor;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize)]
struct Pt {
    x: f32,
    y: f32,
}

#[derive(Deserialize)]
struct AnchorOut {
    id: u32,
    point: Pt,
    handle: Option<Pt>,
}

#[derive(Deserialize)]
struct MarkerOut {
    id: u32,
    kind: String,
}

#[derive(Deserialize)]
struct CmdOut {
    kind: String,
}

#[derive(Deserialize)]
struct GuideOut {
    id: u32,
}

#[derive(Deserialize)]
struct FrameOut {
    path: Vec<CmdOut>,
    markers: Vec<MarkerOut>,
    guides: Vec<GuideOut>,
}

#[wasm_bindgen_test]
fn tap_and_drag_commit_anchors() {
    let mut ed = Editor::new();
    ed.pointer_down(0.0, 0.0);
    let a = ed.pointer_up(0.0, 0.5).expect("tap commits");
    ed.pointer_down(100.0, 0.0);
    ed.pointer_move(105.0, 5.0);
    let b = ed.pointer_up(110.0, 10.0).expect("drag commits");
    assert_eq!(ed.anchor_count(), 2);

    let pa: AnchorOut = serde_wasm_bindgen::from_value(ed.get_anchor(a)).unwrap();
    assert_eq!(pa.id, a);
    assert!(pa.handle.is_none());
    let pb: AnchorOut = serde_wasm_bindgen::from_value(ed.get_anchor(b)).unwrap();
    assert_eq!((pb.point.x, pb.point.y), (100.0, 0.0));
    let h = pb.handle.expect("handle");
    assert_eq!((h.x, h.y), (110.0, 10.0));
    assert!(ed.get_anchor(999).is_null());
}

#[wasm_bindgen_test]
fn frame_shows_preview_while_dragging() {
    let mut ed = Editor::new();
    ed.pointer_down(0.0, 0.0);
    ed.pointer_up(0.0, 0.0);
    let rev = ed.revision();
    ed.pointer_down(50.0, 0.0);
    ed.pointer_move(60.0, 10.0);
    assert!(ed.revision() > rev);

    let f: FrameOut = serde_wasm_bindgen::from_value(ed.frame()).unwrap();
    let kinds: Vec<&str> = f.path.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(kinds, vec!["moveTo", "quadTo"]);
    let mk: Vec<&str> = f.markers.iter().map(|m| m.kind.as_str()).collect();
    assert_eq!(mk, vec!["anchor", "controlA", "controlB", "anchor"]);
    assert_eq!(f.markers[3].id, 1);
    assert_eq!(f.guides.len(), 1);
    assert_eq!(f.guides[0].id, 1);
    assert_eq!(ed.svg_path(), "M 0 0 Q 40 -10, 50 0");
    assert_eq!(ed.anchor_count(), 1, "preview is not committed");

    ed.cancel();
    assert_eq!(ed.svg_path(), "M 0 0");
}

#[wasm_bindgen_test]
fn marker_data_typed_arrays() {
    let mut ed = Editor::new();
    ed.pointer_down(0.0, 0.0);
    ed.pointer_up(20.0, 0.0);
    let md = ed.marker_data();
    let ids = Uint32Array::new(&Reflect::get(&md, &JsValue::from_str("ids")).unwrap());
    let kinds = Uint8Array::new(&Reflect::get(&md, &JsValue::from_str("kinds")).unwrap());
    let pos = Float32Array::new(&Reflect::get(&md, &JsValue::from_str("positions")).unwrap());
    let gp = Float32Array::new(&Reflect::get(&md, &JsValue::from_str("guide_points")).unwrap());
    assert_eq!(ids.length(), 3);
    assert_eq!(kinds.to_vec(), vec![1, 2, 0]);
    assert_eq!(pos.to_vec(), vec![-20.0, 0.0, 20.0, 0.0, 0.0, 0.0]);
    assert_eq!(gp.length(), 6);
}

#[wasm_bindgen_test]
fn dragging_markers_edits_committed_anchor() {
    let mut ed = Editor::new();
    ed.pointer_down(0.0, 0.0);
    let id = ed.pointer_up(20.0, 0.0).unwrap();
    // Grab the raw handle and pull it down
    ed.pointer_down(20.0, 0.0);
    assert_eq!(ed.pointer_up(20.0, 20.0), None);
    let a: AnchorOut = serde_wasm_bindgen::from_value(ed.get_anchor(id)).unwrap();
    let h = a.handle.unwrap();
    assert_eq!((h.x, h.y), (20.0, 20.0));
    assert_eq!(ed.anchor_count(), 1);
}

#[wasm_bindgen_test]
fn polyline_flattens_preview() {
    let mut ed = Editor::new();
    ed.pointer_down(0.0, 0.0);
    ed.pointer_up(0.0, 0.0);
    ed.pointer_down(100.0, 0.0);
    ed.pointer_up(120.0, 40.0);
    let pl = ed.polyline().to_vec();
    assert_eq!(&pl[..2], &[0.0, 0.0]);
    assert_eq!(&pl[pl.len() - 2..], &[100.0, 0.0]);
    assert!(pl.len() > 4);
}

#[wasm_bindgen_test]
fn config_roundtrip() {
    let cfg = js_sys::Object::new();
    Reflect::set(&cfg, &JsValue::from_str("drag_threshold"), &JsValue::from_f64(10.0)).unwrap();
    let res = Editor::with_config_res(cfg.into());
    assert_eq!(Reflect::get(&res, &JsValue::from_str("ok")).unwrap().as_bool(), Some(true));

    let mut ed = Editor::new();
    let cfg = js_sys::Object::new();
    Reflect::set(&cfg, &JsValue::from_str("drag_threshold"), &JsValue::from_f64(10.0)).unwrap();
    let r = ed.set_config_res(cfg.into());
    assert_eq!(Reflect::get(&r, &JsValue::from_str("ok")).unwrap().as_bool(), Some(true));
    ed.pointer_down(0.0, 0.0);
    let id = ed.pointer_up(5.0, 5.0).unwrap();
    let a: AnchorOut = serde_wasm_bindgen::from_value(ed.get_anchor(id)).unwrap();
    assert!(a.handle.is_none(), "within the larger threshold");
}
