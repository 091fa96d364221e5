//! Launch and activation policy
//!
//! Maps launcher triggers (desktop icon, start menu, taskbar button) to
//! window manager operations and keeps the recently-opened list.

mod policy;
mod recent;

pub use policy::{activate, Activation, ActivationSource};
pub use recent::{RecencyTracker, RecentApps, RECENT_LIMIT};
