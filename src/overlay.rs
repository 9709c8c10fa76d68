use crate::constants::LOAD_MESSAGE_ID;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replace the text of the load/status message.
#[inline]
pub fn set_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(LOAD_MESSAGE_ID) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    crate::dom::hide_element(document, LOAD_MESSAGE_ID);
}

/// Hide the status message after `delay_ms`.
pub fn hide_after(document: &web::Document, delay_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::once_into_js(move || hide(&doc));
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        delay_ms,
    );
}
