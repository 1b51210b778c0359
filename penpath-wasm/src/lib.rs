use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{init_logging, set_panic_hook};

#[wasm_bindgen]
pub struct Editor { pub(crate) inner: penpath::EditSession }

impl Editor {
    pub fn rs_new() -> Editor { Editor { inner: penpath::EditSession::new() } }
    pub fn rs_revision(&self) -> u64 { self.inner.revision() }
}
