//! Activation rules for launcher triggers

use tracing::debug;

use super::RecencyTracker;
use crate::error::DesktopResult;
use crate::window::WindowManager;

/// Where an activation request came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationSource {
    /// Desktop icon (double-)click
    DesktopIcon,
    /// Start menu entry
    StartMenu,
    /// Taskbar button primary click
    Taskbar,
}

impl ActivationSource {
    /// Parse from string ID (e.g., "icon", "start-menu", "taskbar")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "icon" | "desktop-icon" => Some(ActivationSource::DesktopIcon),
            "start-menu" | "startmenu" => Some(ActivationSource::StartMenu),
            "taskbar" => Some(ActivationSource::Taskbar),
            _ => None,
        }
    }

    /// Whether clicking the already-focused window minimizes it
    pub fn toggles_focused(&self) -> bool {
        matches!(self, ActivationSource::Taskbar)
    }
}

/// What an activation did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// A new window was created and focused
    Opened,
    /// A minimized window was restored and focused
    Restored,
    /// An open window was brought to the front and focused
    Focused,
    /// The focused window was minimized (taskbar toggle)
    Minimized,
}

impl Activation {
    /// String ID for the rendering layer
    pub fn id(&self) -> &'static str {
        match self {
            Activation::Opened => "opened",
            Activation::Restored => "restored",
            Activation::Focused => "focused",
            Activation::Minimized => "minimized",
        }
    }
}

/// Apply the activation rules for `id`
///
/// 1. Not open: open it (the tracker records the new window).
/// 2. Open and minimized: restore it and focus it.
/// 3. Open, visible and focused, from the taskbar: minimize it.
/// 4. Otherwise: focus it.
pub fn activate<R>(
    windows: &mut WindowManager,
    recent: &mut R,
    id: &str,
    source: ActivationSource,
) -> DesktopResult<Activation>
where
    R: RecencyTracker + ?Sized,
{
    let Some(window) = windows.get(id) else {
        windows.open(id)?;
        recent.record_opened(id);
        return Ok(Activation::Opened);
    };

    let activation = if window.is_minimized {
        windows.restore(id)?;
        windows.focus(id)?;
        Activation::Restored
    } else if source.toggles_focused() && windows.is_focused(id) {
        windows.minimize(id)?;
        Activation::Minimized
    } else {
        windows.focus(id)?;
        Activation::Focused
    };

    debug!(window = id, ?source, ?activation, "activation applied");
    Ok(activation)
}
