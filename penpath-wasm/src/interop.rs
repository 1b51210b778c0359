use js_sys::{Float32Array, Object, Reflect, Uint32Array, Uint8Array};
use penpath::Point;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

pub fn arr_u32(data: &[u32]) -> Uint32Array { Uint32Array::from(data) }
pub fn arr_f32(data: &[f32]) -> Float32Array { Float32Array::from(data) }
pub fn arr_u8(data: &[u8]) -> Uint8Array { Uint8Array::from(data) }

/// Interleaved `[x0, y0, x1, y1, ...]`.
pub fn points_f32(points: &[Point]) -> Float32Array {
    let flat: Vec<f32> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    arr_f32(&flat)
}

/// Serializes to a plain JS value; `null` if the value cannot be represented.
pub fn to_js<T: serde::Serialize + ?Sized>(v: &T) -> JsValue {
    match serde_wasm_bindgen::to_value(v) {
        Ok(js) => js,
        Err(e) => {
            tracing::warn!(error = %e, "serialization to JS failed");
            JsValue::NULL
        }
    }
}
