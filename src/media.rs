//! Background video and music.
//!
//! Each element gets a shared [`PlaybackTask`]: load-error listeners mark it
//! failed, and the start gesture spawns an async task that drives `play()`
//! through the task's retry policy. Nothing here is awaited by the render
//! loop.

use crate::constants::*;
use crate::overlay;
use plexus_core::{NextStep, PlaybackTask};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct Media {
    pub video: web::HtmlVideoElement,
    pub audio: web::HtmlAudioElement,
    pub video_task: Rc<RefCell<PlaybackTask>>,
    pub audio_task: Rc<RefCell<PlaybackTask>>,
}

impl Media {
    pub fn new(video: web::HtmlVideoElement, audio: web::HtmlAudioElement) -> Self {
        audio.set_preload("auto");
        Self {
            video,
            audio,
            video_task: Rc::new(RefCell::new(PlaybackTask::video())),
            audio_task: Rc::new(RefCell::new(PlaybackTask::audio())),
        }
    }

    pub fn wire_load_events(&self, document: &web::Document) {
        on_event(&self.video, "loadeddata", || log::info!("[media] video loaded"));

        let doc = document.clone();
        let task = self.video_task.clone();
        on_event(&self.video, "error", move || {
            let err = task.borrow_mut().on_load_error();
            log::error!("[media] {}", err);
            overlay::set_status(&doc, STATUS_VIDEO_ERROR);
            crate::dom::hide_element(&doc, VIDEO_CONTAINER_ID);
        });

        let doc = document.clone();
        let task = self.audio_task.clone();
        on_event(&self.audio, "error", move || {
            let err = task.borrow_mut().on_load_error();
            log::error!("[media] {}", err);
            overlay::set_status(&doc, STATUS_AUDIO_ERROR);
        });
    }

    /// Fire-and-forget start of both elements.
    pub fn start(&self, audio_start_sec: f64, audio_volume: f64) {
        let video: web::HtmlMediaElement = self.video.clone().unchecked_into();
        spawn_local(run_playback(video, self.video_task.clone(), |_| {}));

        let audio: web::HtmlMediaElement = self.audio.clone().unchecked_into();
        spawn_local(run_playback(
            audio,
            self.audio_task.clone(),
            move |el: &web::HtmlMediaElement| {
                el.set_volume(audio_volume);
                el.set_current_time(audio_start_sec);
                el.set_loop(true);
            },
        ));
    }
}

async fn run_playback(
    el: web::HtmlMediaElement,
    task: Rc<RefCell<PlaybackTask>>,
    prepare: impl Fn(&web::HtmlMediaElement),
) {
    if !task.borrow_mut().request() {
        let t = task.borrow();
        log::warn!("[media] {} not started: {:?}", t.kind(), t.state());
        return;
    }
    loop {
        prepare(&el);
        let outcome = play(&el).await;
        let step = {
            let mut t = task.borrow_mut();
            match outcome {
                Ok(()) => {
                    t.on_started();
                    log::info!("[media] {} playing", t.kind());
                    NextStep::Stop
                }
                Err(reason) => t.on_rejected(reason),
            }
        };
        match step {
            NextStep::Stop => return,
            NextStep::WaitForReady => {
                // A load error while waiting has already failed the task.
                wait_for_any(&el, &["canplaythrough", "error"]).await;
                if !task.borrow_mut().on_ready() {
                    return;
                }
            }
        }
    }
}

async fn play(el: &web::HtmlMediaElement) -> Result<(), String> {
    let promise = el.play().map_err(|e| format!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Resolves the first time `target` dispatches any of `events`.
async fn wait_for_any(target: &web::EventTarget, events: &[&str]) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        for event in events {
            _ = target.add_event_listener_with_callback_and_add_event_listener_options(
                event, &resolve, &opts,
            );
        }
    });
    _ = JsFuture::from(promise).await;
}

fn on_event(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
