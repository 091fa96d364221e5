//! Snapshots of the window collection for the rendering layer
//!
//! Observers receive a borrowed [`SnapshotView`] after every mutation, so
//! high-frequency drag updates cost no allocation. [`Snapshot`] is the
//! owned form for hosts that keep or serialize state.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::error::DesktopResult;
use crate::window::{Window, WindowManager};

/// Borrowed view of `{windows, focusedId}`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotView<'a> {
    /// Windows back-to-front
    pub windows: &'a [Window],
    /// Focused window id
    pub focused_id: Option<&'a str>,
}

impl<'a> SnapshotView<'a> {
    /// View of a window manager's current state
    pub fn of(manager: &'a WindowManager) -> Self {
        Self {
            windows: manager.windows(),
            focused_id: manager.focused(),
        }
    }

    /// Windows that should be rendered, back-to-front
    pub fn visible(&self) -> impl Iterator<Item = &'a Window> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Copy into an owned snapshot
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            windows: self.windows.to_vec(),
            focused_id: self.focused_id.map(str::to_string),
        }
    }

    /// Serialize to JSON for a JavaScript host
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize and hand the JSON to `sink`
    ///
    /// Failures on either side are logged and dropped; returns `true` if
    /// the sink accepted the snapshot.
    pub fn send_json<E: fmt::Debug>(&self, sink: impl FnOnce(&str) -> Result<(), E>) -> bool {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize snapshot");
                return false;
            }
        };
        match sink(&json) {
            Ok(()) => true,
            Err(err) => {
                warn!(?err, "snapshot sink failed");
                false
            }
        }
    }
}

/// Owned copy of the window collection and focus
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Windows back-to-front
    pub windows: Vec<Window>,
    /// Focused window id
    pub focused_id: Option<String>,
}

impl Snapshot {
    /// Borrow as a view
    pub fn view(&self) -> SnapshotView<'_> {
        SnapshotView {
            windows: &self.windows,
            focused_id: self.focused_id.as_deref(),
        }
    }

    /// Window ids back-to-front
    pub fn ids(&self) -> Vec<&str> {
        self.windows.iter().map(|w| w.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_manager() {
        let mut wm = WindowManager::new();
        wm.open("about").unwrap();
        wm.open("game").unwrap();
        wm.minimize("about").unwrap();

        let view = SnapshotView::of(&wm);
        assert_eq!(view.windows.len(), 2);
        assert_eq!(view.focused_id, Some("game"));
        assert_eq!(view.visible().count(), 1);

        let owned = view.to_snapshot();
        assert_eq!(owned.ids(), vec!["about", "game"]);
        assert_eq!(owned.view(), view);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut wm = WindowManager::new();
        wm.open("about").unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&SnapshotView::of(&wm).to_json().unwrap()).unwrap();
        assert_eq!(json["focusedId"], "about");
        assert_eq!(json["windows"][0]["id"], "about");
        assert_eq!(json["windows"][0]["title"], "About");
        assert_eq!(json["windows"][0]["position"]["x"], 100.0);

        wm.close("about").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&SnapshotView::of(&wm).to_json().unwrap()).unwrap();
        assert!(json["focusedId"].is_null());
    }

    #[test]
    fn test_send_json_reports_sink_failure() {
        let mut wm = WindowManager::new();
        wm.open("about").unwrap();
        let view = SnapshotView::of(&wm);

        let mut received = String::new();
        assert!(view.send_json(|json| {
            received.push_str(json);
            Ok::<(), ()>(())
        }));
        assert_eq!(received, view.to_json().unwrap());

        assert!(!view.send_json(|_| Err("recursive use of an object")));
    }
}
