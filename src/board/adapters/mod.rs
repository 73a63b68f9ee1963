//! Adapter implementations of the board ports.

mod log;
mod memory;

pub use log::TracingNotifier;
pub use memory::{Notification, RecordingNotifier};
