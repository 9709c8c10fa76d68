use crate::constants::START_EVENTS;
use crate::frame::LoopHandle;
use plexus_core::StartGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `on_start` on the first click or key press, then unregister.
///
/// `gate` guards the transition on its own; removing the listeners only
/// stops further events from reaching it.
pub fn wire_start_gesture(
    document: &web::Document,
    gate: Rc<StartGate>,
    on_start: impl FnOnce() + 'static,
) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_inner = slot.clone();
    let doc = document.clone();
    let mut on_start = Some(on_start);

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        gate.fire(|| {
            log::info!("[gesture] starting media");
            if let Some(start) = on_start.take() {
                start();
            }
        });
        if let Some(cb) = slot_inner.borrow().as_ref() {
            for event in START_EVENTS {
                _ = doc.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = slot.borrow().as_ref() {
        for event in START_EVENTS {
            _ = document.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
    }
}

/// Stop the render loop when the page is being torn down.
pub fn wire_teardown(handle: LoopHandle) {
    let closure = Closure::wrap(Box::new(move || handle.cancel()) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
