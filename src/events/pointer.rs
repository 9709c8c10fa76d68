use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in canvas pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x = ev.client_x() as f32 - rect.left() as f32;
    let y = ev.client_y() as f32 - rect.top() as f32;
    (x, y)
}

pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<FrameContext>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = pointer_canvas_px(&ev, &canvas);
        frame_ctx.borrow_mut().driver.set_pointer(x, y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Resize is a full reset: new canvas size, new points, empty grid.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<FrameContext>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        frame_ctx.borrow_mut().driver.resize(w as f32, h as f32);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
