use js_sys::Object;
use penpath::EditError;
use wasm_bindgen::JsValue;

use crate::interop::{new_obj, set_kv};

pub fn ok(value: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::TRUE);
    set_kv(&o, "value", &value);
    o.into()
}

/// `{ ok: false, error: { code, message, data? } }`
pub fn err(code: &str, message: &str, data: Option<Object>) -> JsValue {
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(message));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::FALSE);
    set_kv(&o, "error", &e);
    o.into()
}

fn data_of(e: &EditError) -> Object {
    let d = new_obj();
    match *e {
        EditError::UnknownAnchor(id) => {
            set_kv(&d, "kind", &JsValue::from_str("anchor"));
            set_kv(&d, "id", &JsValue::from(id.0));
        }
        EditError::NonFinite(param) => set_kv(&d, "param", &JsValue::from_str(param)),
        EditError::OutOfRange { param, min, max, got } => {
            set_kv(&d, "param", &JsValue::from_str(param));
            set_kv(&d, "min", &JsValue::from(min));
            set_kv(&d, "max", &JsValue::from(max));
            set_kv(&d, "got", &JsValue::from(got));
        }
    }
    d
}

pub fn from_edit_error(e: &EditError) -> JsValue {
    err(e.code(), &e.to_string(), Some(data_of(e)))
}
