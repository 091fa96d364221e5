//! Window manager core for the Luna retro desktop shell
//!
//! This crate provides the state behind a classic desktop in the browser:
//! - Window management (open, close, focus, stacking order)
//! - Drag and resize gestures driven by pointer events
//! - Launch/activation policy for icons, start menu and taskbar
//! - Taskbar and start menu presentation state
//! - Preferences with local storage persistence
//! - Boot (loading) screen sequence
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`)
//! - [`window`]: Window entity and the [`WindowManager`] collection
//! - [`input`]: Drag/resize state machine
//! - [`launch`]: Activation rules and recent apps
//! - [`shell`]: Taskbar, start menu, app catalog, clock
//! - [`settings`]: Preferences and their storage
//!
//! [`DesktopEngine`] ties these together and is the only mutation path
//! for the window collection. Renderers read a [`SnapshotView`] after
//! every change.
//!
//! ## Example
//!
//! ```rust
//! use luna_desktop::{ActivationSource, DesktopEngine, Vec2, WindowRegion};
//!
//! let mut engine = DesktopEngine::new();
//! engine.activate("about", ActivationSource::DesktopIcon);
//!
//! engine.handle_pointer_down("about", WindowRegion::TitleBar, Vec2::new(110.0, 60.0));
//! engine.handle_pointer_move(Vec2::new(310.0, 160.0));
//! engine.handle_pointer_up();
//!
//! assert_eq!(engine.windows().get("about").unwrap().position, Vec2::new(300.0, 150.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Time-based state takes timestamps as arguments
//! 3. **Tolerant Verbs**: Stale ids are ignored, never fatal

pub mod input;
pub mod launch;
pub mod math;
pub mod settings;
pub mod shell;
pub mod window;

mod boot;
mod engine;
mod error;
mod observer;
mod snapshot;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use input::{DragState, GestureTarget, InputResult, InputRouter, InteractionConfig, InteractionPhase};
pub use launch::{Activation, ActivationSource, RecencyTracker, RecentApps};
pub use math::{Size, Vec2};
pub use settings::{MemoryStorage, PreferenceStore, Preferences, StorageBackend, Theme};
pub use shell::{format_clock, AppCatalog, AppEntry, StartMenu, TaskbarButton, TaskbarEvent};
pub use window::{Window, WindowConfig, WindowId, WindowManager, WindowRegion, MIN_WINDOW_SIZE};

pub use boot::{BootSequence, BootState, BOOT_DURATION_MS, BOOT_STEPS};
pub use engine::{DesktopEngine, EngineConfig};
pub use error::{DesktopError, DesktopResult};
pub use observer::{Subscribers, SubscriptionId};
pub use snapshot::{Snapshot, SnapshotView};
