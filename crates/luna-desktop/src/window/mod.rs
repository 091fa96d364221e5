//! Window management module
//!
//! Provides the window model, the ordered window collection with focus,
//! and pointer hit regions on a window frame.

mod config;
mod manager;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use config::{WindowConfig, MIN_WINDOW_SIZE};
pub use manager::WindowManager;
pub use region::WindowRegion;
pub use window::{title_for, Window};

/// Window identifier
///
/// A window's id is the content id of the application it shows, so at
/// most one window per application can be open at a time.
pub type WindowId = String;
