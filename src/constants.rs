// Page wiring constants: element ids, status text and timings.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "canvas";
pub const VIDEO_ID: &str = "video-background";
pub const VIDEO_CONTAINER_ID: &str = "video-container";
pub const AUDIO_ID: &str = "background-music";
pub const LOAD_MESSAGE_ID: &str = "load-message";

// Status text shown in #load-message
pub const STATUS_IDLE: &str = "Click or press any key to start";
pub const STATUS_STARTING: &str = "Starting...";
pub const STATUS_VIDEO_ERROR: &str = "Video failed to load";
pub const STATUS_AUDIO_ERROR: &str = "Audio failed to load";

// Timings
pub const STATUS_HIDE_DELAY_MS: i32 = 2000; // after the start gesture
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0; // periodic [frame] debug summary

// Events that trigger the Idle -> Running transition
pub const START_EVENTS: [&str; 2] = ["click", "keydown"];
