use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

pub fn window() -> Window {
    web_sys::window().expect("no global window")
}

pub fn document() -> Document {
    window().document().expect("no document")
}

pub fn canvas(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no #{id} element")))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not a canvas")))
}

/// Fallible on purpose: a failed schedule is how the loop driver learns it
/// must stop (it transitions to Cancelled rather than panicking).
pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window().request_animation_frame(f.as_ref().unchecked_ref())
}
