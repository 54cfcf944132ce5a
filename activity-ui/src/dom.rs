//! Small fallible wrappers over the web-sys DOM surface the controller
//! binds to.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

pub fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document not available".to_string())
}

pub fn require(document: &Document, id: &str) -> Result<Element, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("missing element #{id}"))
}

pub fn require_form(document: &Document, id: &str) -> Result<HtmlFormElement, String> {
    require(document, id)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| format!("#{id} is not a form"))
}

pub fn require_input(document: &Document, id: &str) -> Result<HtmlInputElement, String> {
    require(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| format!("#{id} is not an input"))
}

/// Read a named form control. Inputs, selects and textareas all expose
/// `value`, but as different web-sys types.
pub fn field_value(form: &HtmlFormElement, name: &str) -> String {
    match named_control(form, name) {
        Some(control) => control_value(&control),
        None => String::new(),
    }
}

pub fn set_field_value(form: &HtmlFormElement, name: &str, value: &str) {
    let Some(control) = named_control(form, name) else {
        return;
    };
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

pub fn control_value(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn named_control(form: &HtmlFormElement, name: &str) -> Option<Element> {
    form.query_selector(&format!("[name=\"{name}\"]")).ok().flatten()
}
