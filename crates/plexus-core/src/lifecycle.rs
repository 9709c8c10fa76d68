//! One-shot Idle -> Running transition triggered by the first user gesture.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Rendering, media not started yet.
    Idle,
    /// Media started; there is no way back.
    Running,
}

#[derive(Debug, Default)]
pub struct StartGate {
    started: AtomicBool,
}

impl StartGate {
    pub const fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.started.load(Ordering::SeqCst) {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// True exactly once: for the caller that moved the gate to Running.
    pub fn try_start(&self) -> bool {
        !self.started.swap(true, Ordering::SeqCst)
    }

    /// Run `start` if this call wins the transition. Returns whether it ran.
    pub fn fire<F: FnOnce()>(&self, start: F) -> bool {
        if self.try_start() {
            start();
            true
        } else {
            log::warn!("[gesture] start already triggered; ignoring");
            false
        }
    }
}
