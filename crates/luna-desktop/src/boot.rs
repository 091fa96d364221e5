//! Boot (loading) screen sequence
//!
//! The loading screen is a pure function of elapsed time. Hosts create a
//! [`BootSequence`] with the current timestamp and sample it each frame;
//! once [`BootState::done`] is set they swap in the desktop.

use serde::Serialize;

/// Captions shown under the logo, in order
pub const BOOT_STEPS: [&str; 5] = [
    "Starting Windows XP...",
    "Loading system files...",
    "Initializing desktop...",
    "Loading portfolio data...",
    "Welcome to Windows XP Portfolio!",
];

/// Time between caption changes
pub const STEP_INTERVAL_MS: f64 = 800.0;

/// Delay before captions appear
pub const TEXT_DELAY_MS: f64 = 500.0;

/// Time for the progress bar to fill
pub const PROGRESS_DURATION_MS: f64 = 3000.0;

/// Time until the desktop replaces the loading screen
pub const BOOT_DURATION_MS: f64 = 4000.0;

/// Loading screen state at one instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootState {
    /// Index into [`BOOT_STEPS`]
    pub step: usize,
    pub caption: &'static str,
    pub show_text: bool,
    /// Progress bar fill, 0..=100
    pub progress: f32,
    pub done: bool,
}

/// Boot sequence anchored at a start timestamp (ms)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BootSequence {
    started_at: f64,
}

impl BootSequence {
    /// Start booting at `now` (ms)
    pub fn new(now: f64) -> Self {
        Self { started_at: now }
    }

    /// Sample the loading screen at `now` (ms)
    pub fn state(&self, now: f64) -> BootState {
        let elapsed = (now - self.started_at).max(0.0);

        let step = ((elapsed / STEP_INTERVAL_MS) as usize).min(BOOT_STEPS.len() - 1);
        let t = (elapsed / PROGRESS_DURATION_MS).min(1.0) as f32;

        BootState {
            step,
            caption: BOOT_STEPS[step],
            show_text: elapsed >= TEXT_DELAY_MS,
            progress: ease_out_cubic(t) * 100.0,
            done: elapsed >= BOOT_DURATION_MS,
        }
    }

    /// Check if the desktop should be shown
    pub fn is_done(&self, now: f64) -> bool {
        now - self.started_at >= BOOT_DURATION_MS
    }
}

/// Ease-out cubic function
#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
