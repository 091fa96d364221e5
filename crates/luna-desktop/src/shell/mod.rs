//! Taskbar and start menu presentation
//!
//! View models built from the window collection and focus, plus the
//! static application catalog. Clicks are forwarded back to the engine as
//! [`TaskbarEvent`]s; nothing here mutates windows directly.

mod catalog;
mod clock;
mod start_menu;
mod taskbar;

pub use catalog::{AppCatalog, AppEntry, CATALOG};
pub use clock::format_clock;
pub use start_menu::StartMenu;
pub use taskbar::{taskbar_buttons, TaskbarButton, TaskbarEvent};
