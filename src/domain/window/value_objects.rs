use chrono::TimeDelta;
use derive_more::Display;
use serde::Serialize;
use strum::AsRefStr;

/// The fixed daily window [07:00, 24:00) local time.
pub struct DailyWindow;

impl DailyWindow {
    pub const START_HOUR: u32 = 7;
    pub const END_HOUR: u32 = 24;
    pub const LENGTH_SECONDS: u32 = (Self::END_HOUR - Self::START_HOUR) * 3600;

    pub fn contains_hour(hour: u32) -> bool {
        (Self::START_HOUR..Self::END_HOUR).contains(&hour)
    }
}

/// Value Object - whether the window is currently counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WindowStatus {
    #[display(fmt = "Timer Active (7 AM - 12 AM)")]
    Active,
    #[display(fmt = "Timer Inactive")]
    Inactive,
}

/// Value Object - elapsed share of the window in percent, unclamped
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress(f64);

impl Progress {
    pub fn from_elapsed(elapsed_seconds: u32) -> Self {
        Self(elapsed_seconds as f64 / DailyWindow::LENGTH_SECONDS as f64 * 100.0)
    }

    /// Number shown next to the bar: floored, not clamped.
    pub fn display_percent(&self) -> i64 {
        self.0.floor() as i64
    }

    /// Bar fill in percent, never wider than the track.
    pub fn bar_width(&self) -> f64 {
        self.0.clamp(0.0, 100.0)
    }
}

/// Value Object - a duration broken into whole hours and minutes.
///
/// Both parts are floored; for negative durations the minutes keep the sign
/// of the remainder, so `-100s` reads `-1h -2m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[display(fmt = "{}h {}m", hours, minutes)]
pub struct HoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

impl HoursMinutes {
    const MS_PER_HOUR: i64 = 3_600_000;
    const MS_PER_MINUTE: i64 = 60_000;

    pub fn from_millis(millis: i64) -> Self {
        Self {
            hours: millis.div_euclid(Self::MS_PER_HOUR),
            minutes: (millis % Self::MS_PER_HOUR).div_euclid(Self::MS_PER_MINUTE),
        }
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_millis(seconds.saturating_mul(1000))
    }

    pub fn from_delta(delta: TimeDelta) -> Self {
        Self::from_millis(delta.num_milliseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_seventeen_hours() {
        assert_eq!(DailyWindow::LENGTH_SECONDS, 61_200);
    }

    #[test]
    fn window_contains_seven_through_twenty_three() {
        assert!(!DailyWindow::contains_hour(6));
        assert!(DailyWindow::contains_hour(7));
        assert!(DailyWindow::contains_hour(23));
        assert!(!DailyWindow::contains_hour(0));
    }

    #[test]
    fn half_window_is_fifty_percent() {
        let progress = Progress::from_elapsed(30_600);
        assert_eq!(progress.bar_width(), 50.0);
        assert_eq!(progress.display_percent(), 50);
    }

    #[test]
    fn overflow_clamps_bar_but_not_number() {
        let progress = Progress::from_elapsed(64_800);
        assert_eq!(progress.bar_width(), 100.0);
        assert_eq!(progress.display_percent(), 105);
    }

    #[test]
    fn hours_minutes_truncates_seconds() {
        assert_eq!(HoursMinutes::from_seconds(61_200).to_string(), "17h 0m");
        assert_eq!(HoursMinutes::from_seconds(13_500 + 59).to_string(), "3h 45m");
        assert_eq!(HoursMinutes::from_seconds(59).to_string(), "0h 0m");
    }

    #[test]
    fn negative_durations_floor_each_part() {
        assert_eq!(HoursMinutes::from_seconds(-100).to_string(), "-1h -2m");
    }

    #[test]
    fn status_labels() {
        assert_eq!(WindowStatus::Active.to_string(), "Timer Active (7 AM - 12 AM)");
        assert_eq!(WindowStatus::Inactive.to_string(), "Timer Inactive");
        assert_eq!(WindowStatus::Inactive.as_ref(), "inactive");
    }
}
