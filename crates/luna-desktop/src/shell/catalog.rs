//! Static catalog of launchable applications

use serde::Serialize;

use crate::math::Vec2;

/// A launchable application
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    /// Content id, also the window id
    pub id: &'static str,
    /// Label shown under the icon and in the start menu
    pub name: &'static str,
    /// Emoji glyph for the icon
    pub icon: &'static str,
    /// Icon position on the desktop, if it has a desktop icon
    pub desktop_position: Option<Vec2>,
    /// Listed in the start menu's program list
    pub in_start_menu: bool,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    desktop_position: Option<Vec2>,
    in_start_menu: bool,
) -> AppEntry {
    AppEntry {
        id,
        name,
        icon,
        desktop_position,
        in_start_menu,
    }
}

/// Every application the shell knows how to launch
pub const CATALOG: &[AppEntry] = &[
    entry("my-computer", "My Computer", "🖥️", Some(Vec2::new(20.0, 20.0)), true),
    entry("recycle-bin", "Recycle Bin", "♻️", Some(Vec2::new(20.0, 120.0)), true),
    entry("projects", "Projects", "📁", Some(Vec2::new(20.0, 220.0)), true),
    entry("skills", "Skills", "📁", Some(Vec2::new(20.0, 320.0)), true),
    entry("certifications", "Certifications", "📁", Some(Vec2::new(20.0, 420.0)), true),
    entry("about", "About", "ℹ️", Some(Vec2::new(120.0, 20.0)), true),
    entry("contact", "Contact", "✉️", Some(Vec2::new(120.0, 120.0)), true),
    entry("game", "Tic-Tac-Toe", "🎮", Some(Vec2::new(120.0, 220.0)), true),
    entry("terminal", "Terminal", "⌨️", None, true),
    entry("settings", "Settings", "⚙️", None, true),
    entry("dont-open", "Don't Open", "☠️", None, true),
];

/// Lookup helpers over a catalog slice
#[derive(Clone, Copy, Debug)]
pub struct AppCatalog {
    entries: &'static [AppEntry],
}

impl Default for AppCatalog {
    fn default() -> Self {
        Self { entries: CATALOG }
    }
}

impl AppCatalog {
    /// Catalog over the built-in entries
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries
    pub fn entries(&self) -> &'static [AppEntry] {
        self.entries
    }

    /// Find an entry by id
    pub fn find(&self, id: &str) -> Option<&'static AppEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries that have a desktop icon
    pub fn desktop_icons(&self) -> impl Iterator<Item = &'static AppEntry> {
        self.entries.iter().filter(|e| e.desktop_position.is_some())
    }

    /// Entries in the start menu's program list
    pub fn start_menu_items(&self) -> impl Iterator<Item = &'static AppEntry> {
        self.entries.iter().filter(|e| e.in_start_menu)
    }

    /// Resolve ids to entries in order, skipping unknown ids
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&'static AppEntry> {
        ids.iter().filter_map(|id| self.find(id.as_ref())).collect()
    }
}
