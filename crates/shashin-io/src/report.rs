//! Error reporting to the page's error collaborator.
//!
//! The hosting page may inject a global `handleError(message, detail)`
//! function (shared with the management view). When present, errors
//! are forwarded to it; otherwise they land on the browser console.
//! Either way this never fails -- reporting an error must not itself
//! produce one.

use wasm_bindgen::prelude::*;

/// Report an error with a static message and its failure detail.
pub fn report_error(message: &str, detail: &dyn std::fmt::Display) {
    let detail = detail.to_string();

    if let Some(window) = web_sys::window() {
        if let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("handleError")) {
            if func.is_function() {
                let func: js_sys::Function = func.unchecked_into();
                let _ = func.call2(
                    &JsValue::NULL,
                    &JsValue::from_str(message),
                    &JsValue::from_str(&detail),
                );
                return;
            }
        }
    }

    web_sys::console::error_1(&JsValue::from_str(&format!("{message}: {detail}")));
}
