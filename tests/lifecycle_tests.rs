// Host-side tests for the start gate and media retry policy.

use plexus_core::{Error, MediaKind, NextStep, PlaybackState, PlaybackTask, Phase, StartGate};
use std::cell::Cell;

#[test]
fn start_gate_fires_exactly_once() {
    let gate = StartGate::new();
    let starts = Cell::new(0);
    assert_eq!(gate.phase(), Phase::Idle);

    // A click followed by several key presses.
    let fired: Vec<bool> = (0..5)
        .map(|_| gate.fire(|| starts.set(starts.get() + 1)))
        .collect();

    assert_eq!(starts.get(), 1);
    assert_eq!(fired, vec![true, false, false, false, false]);
    assert_eq!(gate.phase(), Phase::Running);
}

#[test]
fn try_start_has_one_winner() {
    let gate = StartGate::default();
    assert!(gate.try_start());
    assert!(!gate.try_start());
    assert_eq!(gate.phase(), Phase::Running);
}

#[test]
fn audio_plays_first_time() {
    let mut task = PlaybackTask::audio();
    assert!(task.request());
    assert!(!task.request());
    task.on_started();
    assert_eq!(task.state(), &PlaybackState::Playing);
    assert!(task.is_finished());
}

#[test]
fn audio_retries_once_when_ready() {
    let mut task = PlaybackTask::audio();
    task.request();

    assert_eq!(task.on_rejected("NotAllowedError"), NextStep::WaitForReady);
    assert_eq!(task.state(), &PlaybackState::AwaitingReady { attempt: 0 });
    assert!(!task.is_finished());

    assert!(task.on_ready());
    assert_eq!(task.state(), &PlaybackState::Requested { attempt: 1 });
    task.on_started();
    assert_eq!(task.state(), &PlaybackState::Playing);
}

#[test]
fn audio_gives_up_after_second_rejection() {
    let mut task = PlaybackTask::audio();
    task.request();
    task.on_rejected("blocked");
    task.on_ready();

    assert_eq!(task.on_rejected("still blocked"), NextStep::Stop);
    assert_eq!(
        task.state(),
        &PlaybackState::Failed(Error::PlaybackRejected {
            kind: MediaKind::Audio,
            reason: "still blocked".into(),
        })
    );
    // Late readiness events change nothing.
    assert!(!task.on_ready());
}

#[test]
fn video_is_best_effort() {
    let mut task = PlaybackTask::video();
    task.request();
    assert_eq!(task.on_rejected("NotAllowedError"), NextStep::Stop);
    assert!(task.is_finished());
}

#[test]
fn load_error_is_terminal_and_blocks_start() {
    let mut task = PlaybackTask::audio();
    let err = task.on_load_error();
    assert_eq!(err, Error::MediaLoadFailure { kind: MediaKind::Audio });
    assert_eq!(err.to_string(), "audio failed to load");
    assert!(!task.request());
    assert!(task.is_finished());
}

#[test]
fn ready_without_rejection_is_ignored() {
    let mut task = PlaybackTask::audio();
    assert!(!task.on_ready());
    task.request();
    assert!(!task.on_ready());
    assert_eq!(task.state(), &PlaybackState::Requested { attempt: 0 });
}

#[test]
fn load_error_while_waiting_cancels_retry() {
    let mut task = PlaybackTask::audio();
    task.request();
    assert_eq!(task.on_rejected("NotAllowedError"), NextStep::WaitForReady);

    // The element errors out instead of becoming playable.
    task.on_load_error();
    assert!(!task.on_ready());
    assert_eq!(
        task.state(),
        &PlaybackState::Failed(Error::MediaLoadFailure {
            kind: MediaKind::Audio
        })
    );
}
