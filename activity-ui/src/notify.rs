//! Transient notification banners: prepended to the notification container
//! (newest on top), removed again after a fixed delay.

use activity_core::notify::Level;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub fn show(document: &Document, app: &Element, level: Level, message: &str, dismiss_ms: i32) {
    let Ok(banner) = document.create_element("div") else {
        return;
    };
    banner.set_class_name(level.css_class());
    banner.set_text_content(Some(message));

    let container = document
        .query_selector(".notification-container")
        .ok()
        .flatten()
        .unwrap_or_else(|| app.clone());
    let _ = container.insert_before(&banner, container.first_child().as_ref());

    schedule_dismiss(banner, dismiss_ms);
}

fn schedule_dismiss(banner: Element, dismiss_ms: i32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut()>::new(move || banner.remove());
    let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref::<js_sys::Function>(),
        dismiss_ms,
    );
    if scheduled.is_ok() {
        callback.forget();
    }
}
