//! Application services for the board: the transition engine and the
//! per-view controller.

mod controller;
mod transition;

pub use controller::{BoardContext, BoardController, DragOutcome};
pub use transition::{BoardError, BoardResult, TransitionEngine, TransitionOutcome};
