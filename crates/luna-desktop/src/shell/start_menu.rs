//! Start menu state

use super::{AppCatalog, AppEntry};

/// Start menu open/closed state plus list builders
#[derive(Clone, Copy, Debug, Default)]
pub struct StartMenu {
    open: bool,
    catalog: AppCatalog,
}

impl StartMenu {
    /// Closed start menu over the built-in catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the menu is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Start button click
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close after an item is picked or the desktop is clicked
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Catalog backing the menu
    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    /// Static program list
    pub fn items(&self) -> Vec<&'static AppEntry> {
        self.catalog.start_menu_items().collect()
    }

    /// Recent programs from the recency tracker's ids
    pub fn recent<S: AsRef<str>>(&self, recent_ids: &[S]) -> Vec<&'static AppEntry> {
        self.catalog.resolve(recent_ids)
    }

    /// Pinned programs from the preference store's ids
    pub fn pinned<S: AsRef<str>>(&self, pinned_ids: &[S]) -> Vec<&'static AppEntry> {
        self.catalog.resolve(pinned_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = StartMenu::new();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_items_are_static_catalog() {
        let menu = StartMenu::new();
        let items = menu.items();
        let ids: Vec<_> = items.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 11);
        assert_eq!(ids[7], "game");
        assert_eq!(&ids[8..], ["terminal", "settings", "dont-open"]);
    }

    #[test]
    fn test_recent_resolves_known_ids() {
        let menu = StartMenu::new();
        let recent = menu.recent(&["terminal".to_string(), "gone".to_string()]);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].name, "Terminal");
    }
}
