//! Time source for `date` and `time`

use chrono::NaiveDateTime;

/// Supplies the local wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

impl<F: Fn() -> NaiveDateTime> Clock for F {
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

/// Date as "Mon Oct 19 2026"
pub fn date_string(time: NaiveDateTime) -> String {
    time.format("%a %b %d %Y").to_string()
}

/// Time as "2:05:09 PM"
pub fn time_string(time: NaiveDateTime) -> String {
    time.format("%-I:%M:%S %p").to_string()
}
