//! Preference store: load, mutate, persist, notify

use tracing::warn;

use super::{MemoryStorage, Preferences, StorageBackend, Theme};
use crate::error::DesktopResult;
use crate::launch::RecencyTracker;
use crate::observer::{Subscribers, SubscriptionId};

/// Storage key for the preferences document
pub const SETTINGS_KEY: &str = "xp_settings_v1";

/// Owns the current preferences and writes every change through
///
/// Subscribers are notified after each mutation, whether or not the write
/// to storage succeeded; the write error is returned to the caller.
pub struct PreferenceStore {
    prefs: Preferences,
    backend: Box<dyn StorageBackend>,
    subscribers: Subscribers<dyn FnMut(&Preferences)>,
}

impl PreferenceStore {
    /// Load preferences from a backend, falling back to defaults
    pub fn load(backend: Box<dyn StorageBackend>) -> Self {
        let prefs = match backend.load(SETTINGS_KEY) {
            Ok(Some(raw)) => Preferences::from_json(&raw),
            Ok(None) => Preferences::default(),
            Err(err) => {
                warn!(%err, "failed to read preferences, using defaults");
                Preferences::default()
            }
        };

        Self {
            prefs,
            backend,
            subscribers: Subscribers::new(),
        }
    }

    /// Store backed by a fresh in-memory map
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStorage::new()))
    }

    /// Current preferences
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Get notified after every change
    pub fn subscribe(&mut self, callback: impl FnMut(&Preferences) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(Box::new(callback))
    }

    /// Stop notifications for a subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Apply a change, notify subscribers, then persist
    pub fn update(&mut self, change: impl FnOnce(&mut Preferences)) -> DesktopResult<()> {
        change(&mut self.prefs);
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.prefs);
        }
        self.save()
    }

    /// Write the current preferences to the backend
    pub fn save(&mut self) -> DesktopResult<()> {
        let json = self.prefs.to_json()?;
        self.backend.save(SETTINGS_KEY, &json)
    }

    /// Set a custom wallpaper; blank input restores the built-in one
    pub fn set_wallpaper_url(&mut self, url: Option<String>) -> DesktopResult<()> {
        let url = url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        self.update(|p| p.wallpaper_url = url)
    }

    pub fn set_use_24_hour_clock(&mut self, enabled: bool) -> DesktopResult<()> {
        self.update(|p| p.use_24_hour_clock = enabled)
    }

    pub fn set_theme(&mut self, theme: Theme) -> DesktopResult<()> {
        self.update(|p| p.theme = theme)
    }

    pub fn toggle_pinned(&mut self, id: &str) -> DesktopResult<()> {
        self.update(|p| p.toggle_pinned(id))
    }

    pub fn add_recent(&mut self, id: &str) -> DesktopResult<()> {
        self.update(|p| p.add_recent(id))
    }

    pub fn set_accent_color(&mut self, color: &str) -> DesktopResult<()> {
        self.update(|p| p.accent_color = color.to_string())
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("prefs", &self.prefs)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

impl RecencyTracker for PreferenceStore {
    fn record_opened(&mut self, id: &str) {
        if let Err(err) = self.add_recent(id) {
            warn!(window = id, %err, "failed to persist recent apps");
        }
    }

    fn recent(&self) -> &[String] {
        &self.prefs.recent_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesktopError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Backend that shares its map with the test so writes can be inspected
    #[derive(Clone, Default)]
    struct SharedStorage(Rc<RefCell<MemoryStorage>>);

    impl StorageBackend for SharedStorage {
        fn load(&self, key: &str) -> DesktopResult<Option<String>> {
            self.0.borrow().load(key)
        }

        fn save(&mut self, key: &str, value: &str) -> DesktopResult<()> {
            self.0.borrow_mut().save(key, value)
        }
    }

    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn load(&self, _key: &str) -> DesktopResult<Option<String>> {
            Err(DesktopError::PersistenceError("offline".to_string()))
        }

        fn save(&mut self, _key: &str, _value: &str) -> DesktopResult<()> {
            Err(DesktopError::PersistenceError("offline".to_string()))
        }
    }

    #[test]
    fn test_load_existing_document() {
        let storage = MemoryStorage::with_entry(SETTINGS_KEY, r#"{"theme":"dark"}"#);
        let store = PreferenceStore::load(Box::new(storage));
        assert_eq!(store.preferences().theme, Theme::Dark);
        assert_eq!(store.preferences().accent_color, "#0054E3");
    }

    #[test]
    fn test_changes_are_persisted() {
        let shared = SharedStorage::default();
        let mut store = PreferenceStore::load(Box::new(shared.clone()));

        store.set_use_24_hour_clock(true).unwrap();
        store.set_accent_color("#FF0000").unwrap();

        let raw = shared.load(SETTINGS_KEY).unwrap().unwrap();
        let stored = Preferences::from_json(&raw);
        assert!(stored.use_24_hour_clock);
        assert_eq!(stored.accent_color, "#FF0000");

        let reloaded = PreferenceStore::load(Box::new(shared));
        assert_eq!(reloaded.preferences(), store.preferences());
    }

    #[test]
    fn test_wallpaper_url_is_trimmed() {
        let mut store = PreferenceStore::in_memory();

        store
            .set_wallpaper_url(Some("  https://example.com/bliss.jpg \n".to_string()))
            .unwrap();
        assert_eq!(
            store.preferences().wallpaper_url.as_deref(),
            Some("https://example.com/bliss.jpg")
        );

        store.set_wallpaper_url(Some("   ".to_string())).unwrap();
        assert_eq!(store.preferences().wallpaper_url, None);

        store.set_wallpaper_url(Some(String::new())).unwrap();
        assert_eq!(store.preferences().wallpaper_url, None);
    }

    #[test]
    fn test_subscribers_notified() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = PreferenceStore::in_memory();
        let id = {
            let seen = Rc::clone(&seen);
            store.subscribe(move |p| seen.borrow_mut().push(p.theme))
        };

        store.set_theme(Theme::Dark).unwrap();
        assert!(store.unsubscribe(id));
        store.set_theme(Theme::Light).unwrap();

        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn test_failing_backend_keeps_in_memory_state() {
        let mut store = PreferenceStore::load(Box::new(FailingStorage));
        assert_eq!(store.preferences(), &Preferences::default());

        let result = store.set_theme(Theme::Dark);
        assert!(matches!(result, Err(DesktopError::PersistenceError(_))));
        assert_eq!(store.preferences().theme, Theme::Dark);

        store.record_opened("about");
        assert_eq!(store.recent(), ["about"]);
    }

    #[test]
    fn test_store_as_recency_tracker() {
        let mut store = PreferenceStore::in_memory();
        store.record_opened("about");
        store.record_opened("game");
        store.record_opened("about");
        assert_eq!(store.recent(), ["about", "game"]);
    }
}
