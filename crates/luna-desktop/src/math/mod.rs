//! Core geometry types for the desktop surface
//!
//! Positions and pointer coordinates live in desktop space: the origin is
//! the top-left corner of the desktop and y grows downwards.

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
