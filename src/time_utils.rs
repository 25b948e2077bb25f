use crate::domain::clock::ClockTime;
use crate::domain::window::HoursMinutes;

/// Format a second count as `HH:MM:SS`. Hours are not wrapped at 24 since the
/// value is a duration, not a time of day.
pub fn format_time(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// `"{H}h {M}m"` with both parts truncated, e.g. `3h 45m`.
pub fn format_hours_minutes(total_seconds: i64) -> String {
    HoursMinutes::from_seconds(total_seconds).to_string()
}

/// en-US 12-hour readout with two-digit fields, e.g. `07:05:09 PM`.
pub fn format_wall_clock_12h(time: &ClockTime) -> String {
    format!(
        "{:02}:{:02}:{:02} {}",
        time.hours12(),
        time.minute(),
        time.second(),
        if time.is_pm() { "PM" } else { "AM" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_durations() {
        assert_eq!(format_time(0), "00:00:00");
        assert_eq!(format_time(3661), "01:01:01");
        assert_eq!(format_time(61_200), "17:00:00");
    }

    #[test]
    fn hours_are_not_wrapped() {
        assert_eq!(format_time(100 * 3600 + 59), "100:00:59");
    }

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_hours_minutes(61_200), "17h 0m");
        assert_eq!(format_hours_minutes(13_559), "3h 45m");
    }

    #[test]
    fn twelve_hour_readout() {
        let t = |h, m, s| format_wall_clock_12h(&ClockTime::new(h, m, s).unwrap());
        assert_eq!(t(0, 0, 5), "12:00:05 AM");
        assert_eq!(t(12, 30, 45), "12:30:45 PM");
        assert_eq!(t(19, 5, 9), "07:05:09 PM");
        assert_eq!(t(7, 0, 0), "07:00:00 AM");
    }
}
