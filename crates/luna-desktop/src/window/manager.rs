//! Window Manager - owns the ordered window collection and focus
//!
//! The collection order is the stacking order: the last window is the
//! front-most. Focus names at most one window, and that window is always
//! present and not minimized.
//!
//! Every verb validates its id against the current state. Unknown ids
//! yield [`DesktopError::WindowNotFound`] and leave the manager untouched.

use tracing::{debug, info};

use super::{Window, WindowConfig, WindowId};
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};

/// Ordered collection of open windows plus the focused id
#[derive(Clone, Debug, Default)]
pub struct WindowManager {
    config: WindowConfig,
    windows: Vec<Window>,
    focused: Option<WindowId>,
}

impl WindowManager {
    /// Create an empty window manager with default geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty window manager with custom geometry
    pub fn with_config(config: WindowConfig) -> Self {
        Self {
            config,
            windows: Vec::new(),
            focused: None,
        }
    }

    /// Geometry constants in use
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Windows back-to-front
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Check if a window with this id is open
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of open windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Currently focused window id
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Check if the given window holds focus
    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Front-most window (minimized or not)
    pub fn top(&self) -> Option<&Window> {
        self.windows.last()
    }

    fn index_of(&self, id: &str) -> DesktopResult<usize> {
        self.windows
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))
    }

    fn window_mut(&mut self, id: &str) -> DesktopResult<&mut Window> {
        let index = self.index_of(id)?;
        Ok(&mut self.windows[index])
    }

    fn clear_focus_if(&mut self, id: &str) {
        if self.is_focused(id) {
            self.focused = None;
        }
    }

    /// Open a window for `id`, or focus the existing one
    ///
    /// Returns `true` when a new window was created. A new window is
    /// appended at the front with the default size and a cascading
    /// position derived from the number of open windows.
    pub fn open(&mut self, id: &str) -> DesktopResult<bool> {
        if self.contains(id) {
            self.focus(id)?;
            return Ok(false);
        }

        let position = self.config.cascade_position(self.windows.len());
        let window = Window::new(id, position, self.config.initial_size());
        info!(window = id, x = position.x, y = position.y, "window opened");

        self.windows.push(window);
        self.focused = Some(id.to_string());
        Ok(true)
    }

    /// Close a window, keeping the relative order of the rest
    pub fn close(&mut self, id: &str) -> DesktopResult<Window> {
        let index = self.index_of(id)?;
        let window = self.windows.remove(index);
        self.clear_focus_if(id);
        info!(window = id, remaining = self.windows.len(), "window closed");
        Ok(window)
    }

    /// Minimize a window; drops focus if it was focused
    pub fn minimize(&mut self, id: &str) -> DesktopResult<()> {
        self.window_mut(id)?.is_minimized = true;
        self.clear_focus_if(id);
        Ok(())
    }

    /// Un-minimize a window without focusing it
    ///
    /// Only the activation policy restores windows, so this is not part of
    /// the public verb set.
    pub(crate) fn restore(&mut self, id: &str) -> DesktopResult<()> {
        self.window_mut(id)?.is_minimized = false;
        Ok(())
    }

    /// Flip the maximized flag, returning the new value
    ///
    /// Focus, order, position and size are left alone.
    pub fn toggle_maximize(&mut self, id: &str) -> DesktopResult<bool> {
        let window = self.window_mut(id)?;
        window.is_maximized = !window.is_maximized;
        Ok(window.is_maximized)
    }

    /// Focus a window and bring it to the front
    ///
    /// A minimized window cannot take focus; restore it first.
    pub fn focus(&mut self, id: &str) -> DesktopResult<()> {
        let index = self.index_of(id)?;
        if self.windows[index].is_minimized {
            return Err(DesktopError::InvalidOperation {
                op: "focus",
                reason: "window is minimized",
            });
        }

        if index + 1 != self.windows.len() {
            let window = self.windows.remove(index);
            self.windows.push(window);
        }
        if !self.is_focused(id) {
            debug!(window = id, "focus changed");
            self.focused = Some(id.to_string());
        }
        Ok(())
    }

    /// Set a window's position (no bounds clamping)
    ///
    /// Returns `true` if the position changed.
    pub fn move_window(&mut self, id: &str, position: Vec2) -> DesktopResult<bool> {
        let window = self.window_mut(id)?;
        let changed = window.position != position;
        window.position = position;
        Ok(changed)
    }

    /// Set a window's size, applying the minimum size floor
    ///
    /// Returns `true` if the size changed.
    pub fn resize(&mut self, id: &str, size: Size) -> DesktopResult<bool> {
        let size = self.config.clamp_size(size);
        let window = self.window_mut(id)?;
        let changed = window.size != size;
        window.size = size;
        Ok(changed)
    }

    /// Minimize every window and clear focus
    pub fn show_desktop(&mut self) {
        for window in &mut self.windows {
            window.is_minimized = true;
        }
        self.focused = None;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const IDS: &[&str] = &["a", "b", "c", "d", "e"];

    #[derive(Clone, Debug)]
    enum Op {
        Open(usize),
        Close(usize),
        Minimize(usize),
        Maximize(usize),
        Focus(usize),
        Move(usize, f32, f32),
        Resize(usize, f32, f32),
        ShowDesktop,
    }

    fn op() -> impl Strategy<Value = Op> {
        let id = 0..IDS.len();
        prop_oneof![
            id.clone().prop_map(Op::Open),
            id.clone().prop_map(Op::Close),
            id.clone().prop_map(Op::Minimize),
            id.clone().prop_map(Op::Maximize),
            id.clone().prop_map(Op::Focus),
            (id.clone(), -2000.0f32..2000.0, -2000.0f32..2000.0)
                .prop_map(|(i, x, y)| Op::Move(i, x, y)),
            (id, -500.0f32..2000.0, -500.0f32..2000.0)
                .prop_map(|(i, w, h)| Op::Resize(i, w, h)),
            Just(Op::ShowDesktop),
        ]
    }

    fn apply(wm: &mut WindowManager, op: &Op) {
        // Errors are the no-op path; the invariants must hold either way.
        let _ = match *op {
            Op::Open(i) => wm.open(IDS[i]).map(|_| ()),
            Op::Close(i) => wm.close(IDS[i]).map(|_| ()),
            Op::Minimize(i) => wm.minimize(IDS[i]),
            Op::Maximize(i) => wm.toggle_maximize(IDS[i]).map(|_| ()),
            Op::Focus(i) => wm.focus(IDS[i]),
            Op::Move(i, x, y) => wm.move_window(IDS[i], Vec2::new(x, y)).map(|_| ()),
            Op::Resize(i, w, h) => wm.resize(IDS[i], Size::new(w, h)).map(|_| ()),
            Op::ShowDesktop => {
                wm.show_desktop();
                Ok(())
            }
        };
    }

    fn ids(wm: &WindowManager) -> Vec<String> {
        wm.windows().iter().map(|w| w.id.clone()).collect()
    }

    proptest! {
        /// Ids stay unique, sizes stay above the floor, focus stays valid
        #[test]
        fn invariants_hold_after_any_sequence(ops in prop::collection::vec(op(), 0..60)) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);

                let mut seen = ids(&wm);
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), wm.count());

                for window in wm.windows() {
                    prop_assert!(window.size.width >= 300.0);
                    prop_assert!(window.size.height >= 200.0);
                }

                if let Some(focused) = wm.focused() {
                    let window = wm.get(focused);
                    prop_assert!(window.is_some(), "focus on missing window {}", focused);
                    prop_assert!(!window.unwrap().is_minimized);
                }
            }
        }

        /// Focus moves exactly one window to the tail
        #[test]
        fn focus_moves_only_target(ops in prop::collection::vec(op(), 0..30), target in 0..IDS.len()) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
            }
            let id = IDS[target];
            let before = ids(&wm);

            if wm.focus(id).is_ok() {
                let after = ids(&wm);
                prop_assert_eq!(after.last().map(String::as_str), Some(id));
                let rest_before: Vec<_> = before.iter().filter(|w| *w != id).collect();
                let rest_after: Vec<_> = after.iter().filter(|w| *w != id).collect();
                prop_assert_eq!(rest_before, rest_after);
            } else {
                prop_assert_eq!(before, ids(&wm));
            }
        }

        /// Close removes exactly the matching window
        #[test]
        fn close_preserves_rest(ops in prop::collection::vec(op(), 0..30), target in 0..IDS.len()) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
            }
            let id = IDS[target];
            let before = ids(&wm);
            let was_focused = wm.is_focused(id);

            if wm.close(id).is_ok() {
                let expected: Vec<_> = before.into_iter().filter(|w| w != id).collect();
                prop_assert_eq!(ids(&wm), expected);
                if was_focused {
                    prop_assert_eq!(wm.focused(), None);
                }
            }
        }

        /// Minimize never reorders
        #[test]
        fn minimize_preserves_order(ops in prop::collection::vec(op(), 0..30), target in 0..IDS.len()) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
            }
            let before = ids(&wm);
            let _ = wm.minimize(IDS[target]);
            prop_assert_eq!(before, ids(&wm));
        }

        /// Show desktop is idempotent
        #[test]
        fn show_desktop_idempotent(ops in prop::collection::vec(op(), 0..30)) {
            let mut wm = WindowManager::new();
            for op in &ops {
                apply(&mut wm, op);
            }
            wm.show_desktop();
            let once = (wm.windows().to_vec(), wm.focused().map(str::to_string));
            wm.show_desktop();
            let twice = (wm.windows().to_vec(), wm.focused().map(str::to_string));
            prop_assert_eq!(once, twice);
            prop_assert!(wm.windows().iter().all(|w| w.is_minimized));
        }
    }
}
