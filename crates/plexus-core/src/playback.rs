//! Retry policy for starting media playback.
//!
//! The browser may refuse `play()` until the element has buffered enough or
//! the page has user activation. A [`PlaybackTask`] tracks one element's
//! attempts: a rejection schedules a retry on the element's readiness
//! signal while retries remain, after that the task ends in `Failed`.

use crate::error::{Error, MediaKind};

#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackState {
    NotStarted,
    /// `play()` issued, waiting on its outcome.
    Requested { attempt: u32 },
    /// Rejected once; waiting for the element to signal it can play through.
    AwaitingReady { attempt: u32 },
    Playing,
    Failed(Error),
}

/// What the caller should do after reporting an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    /// Wait for the readiness event, then call [`PlaybackTask::on_ready`].
    WaitForReady,
    /// Terminal: nothing else to do.
    Stop,
}

#[derive(Clone, Debug)]
pub struct PlaybackTask {
    kind: MediaKind,
    max_retries: u32,
    state: PlaybackState,
}

impl PlaybackTask {
    pub fn new(kind: MediaKind, max_retries: u32) -> Self {
        Self {
            kind,
            max_retries,
            state: PlaybackState::NotStarted,
        }
    }

    /// Audio policy: one deferred retry.
    pub fn audio() -> Self {
        Self::new(MediaKind::Audio, 1)
    }

    /// Video policy: best effort, no retry.
    pub fn video() -> Self {
        Self::new(MediaKind::Video, 0)
    }

    #[inline]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[inline]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            PlaybackState::Playing | PlaybackState::Failed(_)
        )
    }

    /// Record the initial `play()` request. Returns false if already begun.
    pub fn request(&mut self) -> bool {
        if self.state != PlaybackState::NotStarted {
            return false;
        }
        self.state = PlaybackState::Requested { attempt: 0 };
        true
    }

    pub fn on_started(&mut self) {
        if let PlaybackState::Requested { .. } = self.state {
            self.state = PlaybackState::Playing;
        }
    }

    pub fn on_rejected(&mut self, reason: impl Into<String>) -> NextStep {
        let PlaybackState::Requested { attempt } = self.state else {
            return NextStep::Stop;
        };
        let reason = reason.into();
        if attempt < self.max_retries {
            log::info!(
                "[media] {} play rejected ({}); retrying when ready",
                self.kind,
                reason
            );
            self.state = PlaybackState::AwaitingReady { attempt };
            NextStep::WaitForReady
        } else {
            let err = Error::PlaybackRejected {
                kind: self.kind,
                reason,
            };
            log::error!("[media] {}", err);
            self.state = PlaybackState::Failed(err);
            NextStep::Stop
        }
    }

    /// The element signalled readiness. Returns true if `play()` should be
    /// issued again.
    pub fn on_ready(&mut self) -> bool {
        let PlaybackState::AwaitingReady { attempt } = self.state else {
            return false;
        };
        self.state = PlaybackState::Requested {
            attempt: attempt + 1,
        };
        true
    }

    /// The asset itself failed to load; terminal whatever the current state.
    pub fn on_load_error(&mut self) -> Error {
        let err = Error::MediaLoadFailure { kind: self.kind };
        self.state = PlaybackState::Failed(err.clone());
        err
    }
}
