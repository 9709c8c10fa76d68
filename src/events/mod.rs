pub mod gesture;
pub mod pointer;

pub use gesture::{wire_start_gesture, wire_teardown};
pub use pointer::{wire_pointermove, wire_resize};
