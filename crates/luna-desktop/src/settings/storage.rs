//! Key-value storage backends for preferences

use std::collections::HashMap;

use crate::error::DesktopResult;

/// String key-value storage (browser localStorage or an in-memory map)
pub trait StorageBackend {
    /// Read a stored value
    fn load(&self, key: &str) -> DesktopResult<Option<String>>;

    /// Write a value
    fn save(&mut self, key: &str, value: &str) -> DesktopResult<()>;
}

/// In-memory storage for native hosts and tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one pre-seeded entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> DesktopResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> DesktopResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `window.localStorage`
#[cfg(feature = "wasm")]
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "wasm")]
impl LocalStorage {
    /// Open the page's local storage
    pub fn open() -> DesktopResult<Self> {
        use crate::error::DesktopError;

        let storage = web_sys::window()
            .ok_or_else(|| DesktopError::PersistenceError("no window object".to_string()))?
            .local_storage()
            .map_err(|_| DesktopError::PersistenceError("localStorage access denied".to_string()))?
            .ok_or_else(|| DesktopError::PersistenceError("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "wasm")]
impl StorageBackend for LocalStorage {
    fn load(&self, key: &str) -> DesktopResult<Option<String>> {
        self.storage.get_item(key).map_err(|_| {
            crate::error::DesktopError::PersistenceError(format!("failed to read {}", key))
        })
    }

    fn save(&mut self, key: &str, value: &str) -> DesktopResult<()> {
        self.storage.set_item(key, value).map_err(|_| {
            crate::error::DesktopError::PersistenceError(format!("failed to write {}", key))
        })
    }
}
