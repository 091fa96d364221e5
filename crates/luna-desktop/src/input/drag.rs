//! Drag state machine types

use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// State of an active pointer gesture
///
/// The idle state is represented by the absence of a `DragState`.
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Dragging a window by its title bar
    MoveWindow {
        window_id: WindowId,
        /// Pointer position minus window position at gesture start
        offset: Vec2,
    },
    /// Resizing a window from its bottom-right handle
    ResizeWindow {
        window_id: WindowId,
        /// Pointer position at gesture start
        start_mouse: Vec2,
        /// Window size at gesture start
        start_size: Size,
    },
}

impl DragState {
    /// Window this gesture operates on
    pub fn window_id(&self) -> &str {
        match self {
            DragState::MoveWindow { window_id, .. } => window_id,
            DragState::ResizeWindow { window_id, .. } => window_id,
        }
    }

    /// Compute the geometry change for the current pointer position
    pub fn target(&self, pointer: Vec2) -> GestureTarget<'_> {
        match self {
            DragState::MoveWindow { window_id, offset } => GestureTarget::Move {
                window_id,
                position: pointer - *offset,
            },
            DragState::ResizeWindow {
                window_id,
                start_mouse,
                start_size,
            } => GestureTarget::Resize {
                window_id,
                size: start_size.grow(pointer - *start_mouse),
            },
        }
    }
}

/// Geometry request produced by a pointer move
///
/// Sizes are unclamped; the window manager applies the minimum size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureTarget<'a> {
    Move { window_id: &'a str, position: Vec2 },
    Resize { window_id: &'a str, size: Size },
}

/// Coarse interaction state, for the rendering layer (cursor, styling)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionPhase {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_target_subtracts_offset() {
        let drag = DragState::MoveWindow {
            window_id: "about".to_string(),
            offset: Vec2::new(20.0, 10.0),
        };

        assert_eq!(drag.window_id(), "about");
        assert_eq!(
            drag.target(Vec2::new(300.0, 200.0)),
            GestureTarget::Move {
                window_id: "about",
                position: Vec2::new(280.0, 190.0),
            }
        );
    }

    #[test]
    fn test_resize_target_adds_delta_unclamped() {
        let drag = DragState::ResizeWindow {
            window_id: "game".to_string(),
            start_mouse: Vec2::new(700.0, 450.0),
            start_size: Size::new(600.0, 400.0),
        };

        assert_eq!(
            drag.target(Vec2::new(400.0, 100.0)),
            GestureTarget::Resize {
                window_id: "game",
                size: Size::new(300.0, 50.0),
            }
        );
    }
}
