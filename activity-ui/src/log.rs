//! Console logging, the browser analog of structured logs elsewhere.

use wasm_bindgen::JsValue;

pub fn info(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

pub fn info_with(message: &str, detail: &JsValue) {
    web_sys::console::log_2(&JsValue::from_str(message), detail);
}

pub fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
