//! Desktop engine - coordinates windows, gestures, launchers and observers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    DesktopEngine                     │
//! │  ┌──────────────┐ ┌─────────────┐ ┌──────────────┐   │
//! │  │WindowManager │ │ InputRouter │ │  StartMenu   │   │
//! │  │ (collection) │ │ (gestures)  │ │ (open flag)  │   │
//! │  └──────────────┘ └─────────────┘ └──────────────┘   │
//! │  ┌────────────────┐ ┌─────────────────────────────┐  │
//! │  │ RecencyTracker │ │ Subscribers (snapshot sink) │  │
//! │  └────────────────┘ └─────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is the only mutation path for the window collection. Verbs
//! given a stale or unknown id are logged at debug level and ignored; they
//! never reach observers.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::DesktopResult;
use crate::input::{GestureTarget, InputResult, InputRouter, InteractionConfig};
use crate::launch::{self, Activation, ActivationSource, RecencyTracker, RecentApps};
use crate::math::{Size, Vec2};
use crate::observer::{Subscribers, SubscriptionId};
use crate::shell::{taskbar_buttons, StartMenu, TaskbarButton, TaskbarEvent};
use crate::snapshot::{Snapshot, SnapshotView};
use crate::window::{WindowConfig, WindowManager, WindowRegion};

/// Engine tuning: window geometry plus pointer behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub window: WindowConfig,
    pub interaction: InteractionConfig,
}

impl EngineConfig {
    /// Parse from JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

type SnapshotObserver = dyn FnMut(SnapshotView<'_>);

/// Desktop engine coordinating all desktop components
///
/// Generic over the recency tracker so hosts can plug in a persistent
/// store; the default keeps the recent list in memory.
pub struct DesktopEngine<R: RecencyTracker = RecentApps> {
    windows: WindowManager,
    input: InputRouter,
    start_menu: StartMenu,
    recent: R,
    observers: Subscribers<SnapshotObserver>,
}

impl Default for DesktopEngine<RecentApps> {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine<RecentApps> {
    /// Create an engine with default geometry and an in-memory recent list
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom geometry and pointer behavior
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_tracker(config, RecentApps::new())
    }
}

impl<R: RecencyTracker> DesktopEngine<R> {
    /// Create an engine that reports new windows to `recent`
    pub fn with_tracker(config: EngineConfig, recent: R) -> Self {
        Self {
            windows: WindowManager::with_config(config.window),
            input: InputRouter::with_config(config.interaction),
            start_menu: StartMenu::new(),
            recent,
            observers: Subscribers::new(),
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Window collection (read-only)
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Gesture state (read-only)
    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    /// Borrowed view of the collection and focus
    pub fn view(&self) -> SnapshotView<'_> {
        SnapshotView::of(&self.windows)
    }

    /// Owned copy of the collection and focus
    pub fn snapshot(&self) -> Snapshot {
        self.view().to_snapshot()
    }

    /// One taskbar button per open window, in collection order
    pub fn taskbar_buttons(&self) -> Vec<TaskbarButton> {
        taskbar_buttons(self.view())
    }

    /// Start menu state
    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    /// Recent ids, most recent first
    pub fn recent(&self) -> &[String] {
        self.recent.recent()
    }

    /// Recency tracker in use
    pub fn tracker(&self) -> &R {
        &self.recent
    }

    /// Mutable access to the recency tracker (e.g., preference setters)
    pub fn tracker_mut(&mut self) -> &mut R {
        &mut self.recent
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Receive a snapshot after every state change
    pub fn subscribe(&mut self, callback: impl FnMut(SnapshotView<'_>) + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(callback))
    }

    /// Stop notifications for a subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let view = SnapshotView::of(&self.windows);
        for observer in self.observers.iter_mut() {
            observer(view);
        }
    }

    /// Log a rejected verb and drop its error
    fn settle<T>(op: &'static str, id: &str, result: DesktopResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(op, window = id, error = %err, "ignored");
                None
            }
        }
    }

    // =========================================================================
    // Window verbs
    // =========================================================================

    /// Open a window for `id`, or focus the existing one
    ///
    /// Returns `true` when a new window was created.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(created) = Self::settle("open", id, self.windows.open(id)) else {
            return false;
        };
        if created {
            self.recent.record_opened(id);
        }
        self.notify();
        created
    }

    /// Close a window, ending any gesture on it
    pub fn close(&mut self, id: &str) -> bool {
        if Self::settle("close", id, self.windows.close(id)).is_none() {
            return false;
        }
        self.input.release_for(id);
        self.notify();
        true
    }

    /// Minimize a window, ending any gesture on it
    pub fn minimize(&mut self, id: &str) -> bool {
        if Self::settle("minimize", id, self.windows.minimize(id)).is_none() {
            return false;
        }
        self.input.release_for(id);
        self.notify();
        true
    }

    /// Flip the maximized flag, returning the new value
    pub fn toggle_maximize(&mut self, id: &str) -> Option<bool> {
        let maximized = Self::settle("toggle_maximize", id, self.windows.toggle_maximize(id))?;
        self.notify();
        Some(maximized)
    }

    /// Focus a visible window and bring it to the front
    pub fn focus(&mut self, id: &str) -> bool {
        if Self::settle("focus", id, self.windows.focus(id)).is_none() {
            return false;
        }
        self.notify();
        true
    }

    /// Set a window's position; returns `true` if it changed
    pub fn move_window(&mut self, id: &str, position: Vec2) -> bool {
        let changed = Self::settle("move", id, self.windows.move_window(id, position)).unwrap_or(false);
        if changed {
            self.notify();
        }
        changed
    }

    /// Set a window's size (floored at the minimum); returns `true` if it changed
    pub fn resize(&mut self, id: &str, size: Size) -> bool {
        let changed = Self::settle("resize", id, self.windows.resize(id, size)).unwrap_or(false);
        if changed {
            self.notify();
        }
        changed
    }

    /// Minimize everything and clear focus
    pub fn show_desktop(&mut self) {
        self.windows.show_desktop();
        self.input.end_drag();
        self.notify();
    }

    // =========================================================================
    // Launchers
    // =========================================================================

    /// Activate `id` from a launcher; closes the start menu
    pub fn activate(&mut self, id: &str, source: ActivationSource) -> Option<Activation> {
        self.start_menu.close();
        let result = launch::activate(&mut self.windows, &mut self.recent, id, source);
        let activation = Self::settle("activate", id, result)?;
        if activation == Activation::Minimized {
            self.input.release_for(id);
        }
        self.notify();
        Some(activation)
    }

    /// Route a taskbar button event
    ///
    /// Primary clicks follow the taskbar activation rules; secondary clicks
    /// minimize directly.
    pub fn handle_taskbar(&mut self, event: TaskbarEvent) -> Option<Activation> {
        match event {
            TaskbarEvent::Click(id) => self.activate(&id, ActivationSource::Taskbar),
            TaskbarEvent::SecondaryClick(id) => self.minimize(&id).then_some(Activation::Minimized),
        }
    }

    /// Open or close the start menu, returning the new state
    pub fn toggle_start_menu(&mut self) -> bool {
        self.start_menu.toggle()
    }

    /// Close the start menu (e.g., click on the desktop)
    pub fn close_start_menu(&mut self) {
        self.start_menu.close();
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    /// Handle pointer down on a region of window `id`
    ///
    /// Ignored while another gesture is active, and for unknown or
    /// minimized windows.
    pub fn handle_pointer_down(&mut self, id: &str, region: WindowRegion, pointer: Vec2) -> InputResult {
        if self.input.is_dragging() {
            return InputResult::Unhandled;
        }

        let (position, size, maximized, resizable) = match self.windows.get(id) {
            Some(window) if window.is_visible() => {
                (window.position, window.size, window.is_maximized, window.is_resizable())
            }
            _ => return InputResult::Unhandled,
        };

        match region {
            WindowRegion::CloseButton => {
                self.close(id);
            }
            WindowRegion::MinimizeButton => {
                self.minimize(id);
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize(id);
            }
            WindowRegion::TitleBar | WindowRegion::FrameBackground => {
                self.focus(id);
                let draggable = region == WindowRegion::TitleBar || self.input.config().drag_from_frame;
                // Maximized frames do not move; position is kept for restore.
                if draggable && !maximized {
                    self.input.start_window_move(id, pointer - position);
                }
            }
            WindowRegion::Content => {
                self.focus(id);
            }
            WindowRegion::ResizeHandle => {
                if !resizable {
                    return InputResult::Unhandled;
                }
                self.focus(id);
                self.input.start_window_resize(id, pointer, size);
            }
        }
        InputResult::Handled
    }

    /// Handle pointer move anywhere on the page
    pub fn handle_pointer_move(&mut self, pointer: Vec2) -> InputResult {
        let changed = match self.input.target(pointer) {
            Some(GestureTarget::Move { window_id, position }) => {
                self.windows.move_window(window_id, position)
            }
            Some(GestureTarget::Resize { window_id, size }) => self.windows.resize(window_id, size),
            None => return InputResult::Unhandled,
        };

        match changed {
            Ok(true) => {
                trace!(x = pointer.x, y = pointer.y, "gesture update");
                self.notify();
            }
            Ok(false) => {}
            Err(err) => {
                debug!(error = %err, "gesture target vanished");
                self.input.end_drag();
                return InputResult::Unhandled;
            }
        }
        InputResult::Handled
    }

    /// Handle pointer up anywhere on the page
    pub fn handle_pointer_up(&mut self) -> InputResult {
        if self.input.end_drag().is_some() {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }
}

impl<R: RecencyTracker + std::fmt::Debug> std::fmt::Debug for DesktopEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopEngine")
            .field("windows", &self.windows)
            .field("input", &self.input)
            .field("start_menu", &self.start_menu)
            .field("recent", &self.recent)
            .field("observers", &self.observers.len())
            .finish()
    }
}
