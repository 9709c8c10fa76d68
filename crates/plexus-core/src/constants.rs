// Shared tuning constants for the point field and its renderer.

// Default configuration
pub const POINT_COUNT_DIVISOR: f32 = 12_000.0; // canvas area (px²) per point
pub const CONNECTION_DISTANCE: f32 = 120.0; // max px between linked points
pub const CURSOR_DISTANCE: f32 = 180.0; // max px between a point and the pointer
pub const POINTER_RADIUS: f32 = 150.0; // repel radius around the pointer
pub const GRID_CELL_SIZE: f32 = 120.0; // keep close to CONNECTION_DISTANCE
pub const USE_SPATIAL_INDEX: bool = true;
pub const AUDIO_START_SEC: f64 = 51.0;
pub const AUDIO_VOLUME: f64 = 0.2;

// Point motion
pub const POINT_RADIUS: f32 = 1.5;
pub const POINT_MAX_SPEED: f32 = 0.5; // px per frame, per axis
pub const REPEL_MAX_STEP: f32 = 2.0; // px per frame at the pointer's centre
pub const MAX_POINTS: usize = 20_000; // upper bound whatever the divisor

// Stroke styles
pub const POINT_COLOR: [u8; 3] = [236, 240, 241];
pub const CONNECTION_COLOR: [u8; 3] = [52, 152, 219];
pub const CONNECTION_LINE_WIDTH: f32 = 0.7;
pub const CURSOR_COLOR: [u8; 3] = [149, 165, 166];
pub const CURSOR_LINE_WIDTH: f32 = 0.8;
