//! Taskbar buttons

use serde::Serialize;

use crate::snapshot::SnapshotView;

/// One taskbar button per open window
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskbarButton {
    pub id: String,
    pub title: String,
    /// Window holds focus
    pub active: bool,
    /// Window is minimized
    pub minimized: bool,
}

/// Pointer event on a taskbar button
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskbarEvent {
    /// Primary click: goes through the taskbar activation rules
    Click(String),
    /// Secondary click (context menu): minimizes directly
    SecondaryClick(String),
}

/// Build the taskbar in collection order
pub fn taskbar_buttons(view: SnapshotView<'_>) -> Vec<TaskbarButton> {
    view.windows
        .iter()
        .map(|w| TaskbarButton {
            id: w.id.clone(),
            title: w.title.clone(),
            active: view.focused_id == Some(w.id.as_str()),
            minimized: w.is_minimized,
        })
        .collect()
}
