use crate::constants::STATS_LOG_INTERVAL_SEC;
use crate::render::CanvasSurface;
use instant::Instant;
use plexus_core::{FrameDriver, FrameStats};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: FrameDriver,
    pub surface: CanvasSurface,

    pub last_report: Instant,
    pub frames_since_report: u32,
    pub last_stats: FrameStats,
}

impl FrameContext {
    pub fn new(driver: FrameDriver, surface: CanvasSurface) -> Self {
        Self {
            driver,
            surface,
            last_report: Instant::now(),
            frames_since_report: 0,
            last_stats: FrameStats::default(),
        }
    }

    pub fn frame(&mut self) {
        self.last_stats = self.driver.frame(&mut self.surface);
        self.frames_since_report += 1;

        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= STATS_LOG_INTERVAL_SEC {
            let s = &self.last_stats;
            log::debug!(
                "[frame] fps={:.1} points={} segments={} pointer={} candidates={}",
                self.frames_since_report as f32 / elapsed,
                s.points,
                s.segments,
                s.pointer_segments,
                s.candidates
            );
            self.last_report = Instant::now();
            self.frames_since_report = 0;
        }
    }
}

/// Handle to a running requestAnimationFrame loop.
#[derive(Clone)]
pub struct LoopHandle {
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    /// Cancel the queued frame and stop rescheduling. Idempotent.
    pub fn cancel(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop stopped");
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        pending: Rc::new(Cell::new(None)),
        stopped: Rc::new(Cell::new(false)),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.pending.set(None);
        if handle_tick.stopped.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            handle_tick.pending.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        handle.pending.set(request_frame(cb));
    }
    handle
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
