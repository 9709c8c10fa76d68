#![cfg(target_arch = "wasm32")]
use plexus_core::{Config, FrameDriver, StartGate};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod media;
mod overlay;
mod render;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plexus-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Startup config: defaults, then `?key=value` overrides from the page URL.
fn load_config(window: &web::Window) -> anyhow::Result<Config> {
    let mut config = Config::default();
    if let Ok(search) = window.location().search() {
        config.apply_query(&search)?;
    }
    config.validate()?;
    log::info!("[config] {:?}", config);
    Ok(config)
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = load_config(&window)?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let media = match (
        dom::element_by_id::<web::HtmlVideoElement>(&document, VIDEO_ID),
        dom::element_by_id::<web::HtmlAudioElement>(&document, AUDIO_ID),
    ) {
        (Ok(video), Ok(audio)) => {
            let media = media::Media::new(video, audio);
            media.wire_load_events(&document);
            Some(media)
        }
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("[media] disabled: {}", e);
            None
        }
    };
    overlay::set_status(&document, STATUS_IDLE);

    let surface = render::CanvasSurface::new(&canvas)?;
    let mut driver = FrameDriver::new(config.clone())?;
    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    driver.resize(w as f32, h as f32);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(driver, surface)));
    events::wire_resize(&canvas, frame_ctx.clone());
    events::wire_pointermove(&canvas, frame_ctx.clone());

    let gate = Rc::new(StartGate::new());
    let doc_start = document.clone();
    events::wire_start_gesture(&document, gate, move || {
        overlay::set_status(&doc_start, STATUS_STARTING);
        if let Some(media) = &media {
            media.start(config.audio_start_sec, config.audio_volume);
        }
        overlay::hide_after(&doc_start, STATUS_HIDE_DELAY_MS);
    });

    let handle = frame::start_loop(frame_ctx);
    events::wire_teardown(handle);
    Ok(())
}
