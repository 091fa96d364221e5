//! Input router holding the single active gesture
//!
//! The router only records gesture state; the engine feeds it pointer
//! events and turns the resulting [`GestureTarget`]s into window manager
//! calls. Entering a gesture acquires the global move/up subscription,
//! and every exit path (pointer-up, window closed or minimized, show
//! desktop) goes through [`InputRouter::end_drag`] or
//! [`InputRouter::release_for`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::drag::{DragState, GestureTarget, InteractionPhase};
use crate::math::{Size, Vec2};

/// Tunables for pointer interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionConfig {
    /// Start a move drag from a press on bare frame padding, not just the
    /// title bar
    pub drag_from_frame: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_from_frame: true,
        }
    }
}

/// Result of routing a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Event was consumed by the desktop
    Handled,
    /// Event was not consumed (let the content handle it)
    Unhandled,
}

impl InputResult {
    /// Check if the event was consumed
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}

/// Desktop-wide pointer gesture state
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    config: InteractionConfig,
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle router with custom tunables
    pub fn with_config(config: InteractionConfig) -> Self {
        Self { config, drag: None }
    }

    /// Interaction tunables
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Active gesture, if any
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a gesture is active
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Window the active gesture operates on
    pub fn gesture_window(&self) -> Option<&str> {
        self.drag_state().map(DragState::window_id)
    }

    /// Current interaction phase
    pub fn phase(&self) -> InteractionPhase {
        match self.drag_state() {
            None => InteractionPhase::Idle,
            Some(DragState::MoveWindow { .. }) => InteractionPhase::Dragging,
            Some(DragState::ResizeWindow { .. }) => InteractionPhase::Resizing,
        }
    }

    /// Enter the dragging state
    ///
    /// Returns `false` (and changes nothing) if a gesture is already active.
    pub fn start_window_move(&mut self, window_id: &str, offset: Vec2) -> bool {
        if self.is_dragging() {
            return false;
        }
        debug!(window = window_id, "move gesture started");
        self.drag = Some(DragState::MoveWindow {
            window_id: window_id.to_string(),
            offset,
        });
        true
    }

    /// Enter the resizing state
    ///
    /// Returns `false` (and changes nothing) if a gesture is already active.
    pub fn start_window_resize(&mut self, window_id: &str, start_mouse: Vec2, start_size: Size) -> bool {
        if self.is_dragging() {
            return false;
        }
        debug!(window = window_id, "resize gesture started");
        self.drag = Some(DragState::ResizeWindow {
            window_id: window_id.to_string(),
            start_mouse,
            start_size,
        });
        true
    }

    /// Geometry request for a pointer move, if a gesture is active
    pub fn target(&self, pointer: Vec2) -> Option<GestureTarget<'_>> {
        self.drag.as_ref().map(|drag| drag.target(pointer))
    }

    /// Return to idle, unconditionally
    pub fn end_drag(&mut self) -> Option<DragState> {
        let ended = self.drag.take();
        if let Some(drag) = &ended {
            debug!(window = drag.window_id(), "gesture ended");
        }
        ended
    }

    /// End the active gesture if it targets `window_id`
    ///
    /// Used when a window goes away mid-gesture so no further pointer
    /// moves are routed to it.
    pub fn release_for(&mut self, window_id: &str) -> bool {
        if self.gesture_window() == Some(window_id) {
            self.end_drag();
            true
        } else {
            false
        }
    }
}
