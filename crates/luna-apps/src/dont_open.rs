//! Prank "you're hacked" screen
//!
//! A message types itself out while a fake log scrolls. Both are driven
//! by elapsed milliseconds, so hosts call [`DontOpen::advance`] from a
//! timer or animation frame.

use std::collections::VecDeque;

use serde::Serialize;

use crate::terminal::{time_string, Clock};

/// Message typed under the banner
pub const HACKED_MESSAGE: &str = "You're hacked!";

/// Maximum number of log lines kept on screen
pub const LOG_LIMIT: usize = 18;

/// Delay per typed character
pub const TYPE_INTERVAL_MS: f64 = 100.0;

/// Delay between log lines
pub const LOG_INTERVAL_MS: f64 = 250.0;

/// ASCII-art banner; lines keep their trailing padding for fixed-width display
pub const BANNER: &str = concat!(
    "  ____                 _              _               _            \n",
    " |  _ \\  ___  _ __ __| | ___  _ __  | |__   __ _  ___| | _____ _ __ \n",
    " | | | |/ _ \\| '__/ _` |/ _ \\| '_ \\ | '_ \\ / _` |/ __| |/ / _ \\ '__|\n",
    " | |_| | (_) | | | (_| | (_) | | | || | | | (_| | (__|   <  __/ |   \n",
    " |____/ \\___/|_|  \\__,_|\\___/|_| |_| |_| |_|\\__,_|\\___|_|\\_\\___|_|   ",
);

const LOG_LINES: [&str; 9] = [
    "Initializing payload[OK]",
    "Establishing secure channel... [OK]",
    "Bypassing firewall rules... [OK]",
    "Escalating privileges... [OK]",
    "Deploying confetti.exe ... [OK]",
    "Encrypting snacks drawer ... [FAILED]",
    "Exfiltrating dad jokes ... [OK]",
    "Injecting memes ... [OK]",
    "Launching RickRoll protocol ... [OK]",
];

/// Screen state, anchored at the time the window opened
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DontOpen {
    #[serde(skip)]
    started_at: f64,
    typed: String,
    /// Newest first
    log: VecDeque<String>,
    #[serde(skip)]
    emitted: usize,
}

impl DontOpen {
    /// Start the prank at `now` (ms)
    pub fn new(now: f64) -> Self {
        Self {
            started_at: now,
            typed: String::new(),
            log: VecDeque::with_capacity(LOG_LIMIT),
            emitted: 0,
        }
    }

    /// Catch up to `now` (ms), stamping new log lines with `clock`
    pub fn advance(&mut self, now: f64, clock: &impl Clock) {
        let elapsed = (now - self.started_at).max(0.0);

        let chars = (elapsed / TYPE_INTERVAL_MS) as usize;
        self.typed = HACKED_MESSAGE.chars().take(chars).collect();

        let due = (elapsed / LOG_INTERVAL_MS) as usize;
        if due <= self.emitted {
            return;
        }
        let stamp = time_string(clock.now());
        // Only the newest LOG_LIMIT lines can still be on screen.
        for index in self.emitted.max(due.saturating_sub(LOG_LIMIT))..due {
            let line = LOG_LINES[index % LOG_LINES.len()];
            self.log.push_front(format!("{}  >  {}", stamp, line));
        }
        self.log.truncate(LOG_LIMIT);
        self.emitted = due;
    }

    /// Message typed so far
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Check if the whole message is shown
    pub fn is_typed(&self) -> bool {
        self.typed.len() == HACKED_MESSAGE.len()
    }

    /// Log lines, newest first
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }
}
