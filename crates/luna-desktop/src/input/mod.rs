//! Pointer interaction: drag and resize gestures
//!
//! A single [`InputRouter`] serves the whole desktop. At most one gesture
//! is active at a time; it starts on a pointer-down over a window frame
//! and ends on the next pointer-up wherever that happens.

mod drag;
mod router;

pub use drag::{DragState, GestureTarget, InteractionPhase};
pub use router::{InputResult, InputRouter, InteractionConfig};
