//! Browser frontend for the activity service.
//!
//! Compiled to WebAssembly, bound to the collaborator-owned markup in
//! `index.html`, talking to the REST API under `/api`, and listening for
//! `activity:*` change events on `window`.

pub mod api;
pub mod config;
pub mod controller;
pub mod dom;
pub mod log;
pub mod notify;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use crate::config::Config;
use crate::controller::Controller;

fn init() {
    match Controller::mount(Config::default()) {
        Ok(_) => log::info("activity frontend loaded"),
        Err(err) => log::error(&format!("activity frontend failed to start: {err}")),
    }
}

/// Entry point. Defers to `DOMContentLoaded` when the document is still
/// loading, so the script may be included from `<head>`.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(init);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        init();
    }
}
