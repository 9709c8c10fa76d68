pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod field;
pub mod lifecycle;
pub mod playback;
pub mod point;
pub mod spatial;

pub use config::Config;
pub use driver::*;
pub use error::{Error, MediaKind};
pub use field::PointField;
pub use lifecycle::*;
pub use playback::*;
pub use point::*;
pub use spatial::*;
