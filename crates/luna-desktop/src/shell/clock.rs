//! Taskbar tray clock formatting

/// Format a wall-clock time for the tray
///
/// 24-hour mode renders `HH:MM`; 12-hour mode renders `hh:MM AM/PM` with
/// a two-digit hour (midnight and noon are 12).
pub fn format_clock(hour: u32, minute: u32, use_24_hour: bool) -> String {
    let hour = hour % 24;
    let minute = minute % 60;
    if use_24_hour {
        return format!("{:02}:{:02}", hour, minute);
    }

    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", hour12, minute, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_24_hour() {
        assert_eq!(format_clock(14, 5, true), "14:05");
        assert_eq!(format_clock(0, 0, true), "00:00");
    }

    #[test]
    fn test_12_hour() {
        assert_eq!(format_clock(14, 5, false), "02:05 PM");
        assert_eq!(format_clock(0, 30, false), "12:30 AM");
        assert_eq!(format_clock(12, 0, false), "12:00 PM");
        assert_eq!(format_clock(9, 41, false), "09:41 AM");
    }
}
