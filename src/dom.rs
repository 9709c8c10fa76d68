use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up `id` and cast it to the requested element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (u32, u32) {
    let Some(w) = web::window() else {
        return (0, 0);
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (px(w.inner_width()), px(w.inner_height()))
}

/// Size the canvas backing store to the viewport and return the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = viewport_size();
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

pub fn hide_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("display", "none");
        }
    }
}
