//! User preferences
//!
//! Wallpaper, clock format, theme, pinned and recent apps, accent color.
//! Preferences are read by the presentation layer only; the window manager
//! never consults them. They persist as one JSON document under
//! [`SETTINGS_KEY`].

mod preferences;
mod storage;
mod store;

pub use preferences::{Preferences, Theme, DEFAULT_ACCENT_COLOR, DEFAULT_PINNED_IDS};
pub use storage::{MemoryStorage, StorageBackend};
pub use store::{PreferenceStore, SETTINGS_KEY};

#[cfg(feature = "wasm")]
pub use storage::LocalStorage;
