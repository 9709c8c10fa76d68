//! Error taxonomy shared by the core and the web front-end.

use std::fmt;

/// Which media element an error or playback task refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => f.write_str("video"),
            MediaKind::Audio => f.write_str("audio"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A media asset failed to load or decode. Never fatal.
    #[error("{kind} failed to load")]
    MediaLoadFailure { kind: MediaKind },

    /// The platform refused to start playback (autoplay policy and friends).
    #[error("{kind} playback rejected: {reason}")]
    PlaybackRejected { kind: MediaKind, reason: String },

    #[error("invalid configuration: {field} = {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },

    #[error("invalid override: {key}={value}")]
    InvalidOverride { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
