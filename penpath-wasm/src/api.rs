use crate::Editor;
use js_sys::Float32Array;
use penpath::geometry::limits::{in_coord_bounds, COORD_MAX, COORD_MIN};
use penpath::{AnchorId, Command, EditError, EditSession, EditorConfig, Point, PointerEvent};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop::{arr_u32, arr_u8, new_obj, points_f32, set_kv, to_js};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `tracing` output to the browser console. Returns false if a global
/// subscriber was already installed (or off wasm32).
#[wasm_bindgen]
pub fn init_logging() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        tracing_wasm::try_set_as_global_default().is_ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

fn check_coord(param: &'static str, v: f32) -> penpath::error::Result<()> {
    if !v.is_finite() {
        return Err(EditError::NonFinite(param));
    }
    if !in_coord_bounds(v) {
        return Err(EditError::OutOfRange { param, min: COORD_MIN, max: COORD_MAX, got: v });
    }
    Ok(())
}

fn check_point(xn: &'static str, x: f32, yn: &'static str, y: f32) -> Result<Point, JsValue> {
    check_coord(xn, x)
        .and_then(|_| check_coord(yn, y))
        .map(|_| Point::new(x, y))
        .map_err(|e| error::from_edit_error(&e))
}

fn parse_config(v: JsValue) -> Result<EditorConfig, JsValue> {
    let cfg: EditorConfig = serde_wasm_bindgen::from_value(v)
        .map_err(|e| error::err("invalid_config", &e.to_string(), None))?;
    cfg.validate().map_err(|e| error::from_edit_error(&e))?;
    Ok(cfg)
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        crate::Editor::rs_new()
    }
    /// Changes whenever `frame()` may return something different.
    pub fn revision(&self) -> u64 {
        self.rs_revision()
    }
    pub fn with_config_res(cfg: JsValue) -> JsValue {
        match parse_config(cfg).and_then(|c| {
            EditSession::with_config(c).map_err(|e| error::from_edit_error(&e))
        }) {
            Ok(inner) => error::ok(JsValue::from(Editor { inner })),
            Err(e) => e,
        }
    }
    pub fn set_config_res(&mut self, cfg: JsValue) -> JsValue {
        let cfg = match parse_config(cfg) {
            Ok(c) => c,
            Err(e) => return e,
        };
        match self.inner.set_config(cfg) {
            Ok(()) => {
                tracing::debug!(?cfg, "editor config updated");
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => error::from_edit_error(&e),
        }
    }
    pub fn get_config(&self) -> JsValue {
        to_js(self.inner.config())
    }

    // Pointer input
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.inner.pointer_down(Point::new(x, y))
    }
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.inner.pointer_move(Point::new(x, y))
    }
    /// Id of the anchor the gesture committed, if it drew one.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<u32> {
        self.inner.pointer_up(Point::new(x, y)).map(|id| id.0)
    }
    pub fn cancel(&mut self) {
        self.inner.cancel()
    }
    pub fn pointer_down_res(&mut self, x: f32, y: f32) -> JsValue {
        match check_point("x", x, "y", y) {
            Ok(p) => {
                self.inner.pointer_down(p);
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => e,
        }
    }
    pub fn pointer_move_res(&mut self, x: f32, y: f32) -> JsValue {
        match check_point("x", x, "y", y) {
            Ok(p) => {
                self.inner.pointer_move(p);
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => e,
        }
    }
    pub fn pointer_up_res(&mut self, x: f32, y: f32) -> JsValue {
        match check_point("x", x, "y", y) {
            Ok(p) => match self.inner.pointer_up(p) {
                Some(id) => error::ok(JsValue::from_f64(id.0 as f64)),
                None => error::ok(JsValue::NULL),
            },
            Err(e) => e,
        }
    }
    /// Accepts `{ phase: "down"|"move"|"up"|"cancel", position: { x, y } }`.
    pub fn handle_event_res(&mut self, ev: JsValue) -> JsValue {
        let ev: PointerEvent = match serde_wasm_bindgen::from_value(ev) {
            Ok(ev) => ev,
            Err(e) => return error::err("invalid_event", &e.to_string(), None),
        };
        if let Err(e) = check_point("position.x", ev.position.x, "position.y", ev.position.y) {
            return e;
        }
        match self.inner.handle_event(ev) {
            Some(id) => error::ok(JsValue::from_f64(id.0 as f64)),
            None => error::ok(JsValue::NULL),
        }
    }

    // Frame output
    pub fn frame(&self) -> JsValue {
        to_js(&self.inner.frame())
    }
    pub fn svg_path(&self) -> String {
        self.inner.preview().path().to_svg_d()
    }
    pub fn polyline(&self) -> Float32Array {
        points_f32(&self.inner.flatten_preview())
    }
    pub fn marker_data(&self) -> JsValue {
        let set = self.inner.preview().markers();
        let ids: Vec<u32> = set.markers.iter().map(|m| m.id.0).collect();
        let kinds: Vec<u8> = set.markers.iter().map(|m| m.kind as u8).collect();
        let positions: Vec<Point> = set.markers.iter().map(|m| m.position).collect();
        let guide_ids: Vec<u32> = set.guides.iter().map(|g| g.id.0).collect();
        let guide_points: Vec<Point> = set.guides.iter().flat_map(|g| g.points).collect();
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&ids).into());
        set_kv(&obj, "kinds", &arr_u8(&kinds).into());
        set_kv(&obj, "positions", &points_f32(&positions).into());
        set_kv(&obj, "guide_ids", &arr_u32(&guide_ids).into());
        set_kv(&obj, "guide_points", &points_f32(&guide_points).into());
        obj.into()
    }

    // Committed drawing
    pub fn anchor_count(&self) -> u32 {
        self.inner.drawing().len() as u32
    }
    pub fn get_anchor(&self, id: u32) -> JsValue {
        match self.inner.drawing().get(AnchorId(id)) {
            Some(a) => to_js(a),
            None => JsValue::NULL,
        }
    }
    pub fn get_anchor_res(&self, id: u32) -> JsValue {
        match self.inner.drawing().get(AnchorId(id)) {
            Some(a) => error::ok(to_js(a)),
            None => error::from_edit_error(&EditError::UnknownAnchor(AnchorId(id))),
        }
    }
    pub fn move_anchor(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.inner.apply(Command::MoveAnchor { id: AnchorId(id), to: Point::new(x, y) }).is_ok()
    }
    pub fn move_anchor_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        self.apply_checked(id, x, y, |id, to| Command::MoveAnchor { id, to })
    }
    pub fn move_handle_primary_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        self.apply_checked(id, x, y, |id, to| Command::MoveHandlePrimary { id, to })
    }
    pub fn move_handle_secondary_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        self.apply_checked(id, x, y, |id, to| Command::MoveHandleSecondary { id, to })
    }
    pub fn append_anchor_res(&mut self, x: f32, y: f32, hx: Option<f32>, hy: Option<f32>) -> JsValue {
        let point = match check_point("x", x, "y", y) {
            Ok(p) => p,
            Err(e) => return e,
        };
        let handle = match (hx, hy) {
            (None, None) => None,
            (Some(hx), Some(hy)) => match check_point("hx", hx, "hy", hy) {
                Ok(h) => Some(h),
                Err(e) => return e,
            },
            _ => return error::err("invalid_handle", "hx and hy must be given together", None),
        };
        match self.inner.apply(Command::AppendAnchor { point, handle }) {
            Ok(id) => error::ok(JsValue::from_f64(id.0 as f64)),
            Err(e) => error::from_edit_error(&e),
        }
    }
}

impl Editor {
    fn apply_checked(
        &mut self,
        id: u32,
        x: f32,
        y: f32,
        make: impl FnOnce(AnchorId, Point) -> Command,
    ) -> JsValue {
        let to = match check_point("x", x, "y", y) {
            Ok(p) => p,
            Err(e) => return e,
        };
        match self.inner.apply(make(AnchorId(id), to)) {
            Ok(_) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_edit_error(&e),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
