use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::domain::clock::{ClockTime, HandAngles, hand_angles_for};
use crate::domain::window::{HoursMinutes, WindowStatus, WindowTimer, time_until_next_start};
use crate::time_utils::{format_time, format_wall_clock_12h};

/// Every value the view needs for one tick, derived from a single sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockSnapshot {
    pub time: ClockTime,
    pub timer: WindowTimer,
    pub status: WindowStatus,
    pub angles: HandAngles,
    pub wall_clock_label: String,
    pub elapsed_label: String,
    pub percent: i64,
    pub bar_width: f64,
    /// Only meaningful while inactive.
    pub next_start: HoursMinutes,
}

impl ClockSnapshot {
    /// Sample both the wall clock and the window timer from `now`.
    pub fn capture<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::from_parts(now, WindowTimer::sample(now))
    }

    /// Wall clock from `now`, timer as given. Used before the first tick when
    /// the timer is meant to start out inactive.
    pub fn from_parts<Tz: TimeZone>(now: &DateTime<Tz>, timer: WindowTimer) -> Self {
        let time = ClockTime::from_timelike(now);
        let progress = timer.progress();
        Self {
            time,
            timer,
            status: timer.status(),
            angles: hand_angles_for(&time),
            wall_clock_label: format_wall_clock_12h(&time),
            elapsed_label: format_time(timer.elapsed_seconds()),
            percent: progress.display_percent(),
            bar_width: progress.bar_width(),
            next_start: time_until_next_start(now),
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }

    pub fn status_label(&self) -> String {
        self.status.to_string()
    }

    pub fn window_caption(&self) -> String {
        if self.is_active() {
            "17-Hour Window".to_string()
        } else {
            format!("Starts in {}", self.next_start)
        }
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent)
    }

    pub fn remaining_caption(&self) -> String {
        if self.is_active() {
            format!("{} remaining", self.timer.remaining())
        } else {
            "Waiting for 7:00 AM".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn inactive_parts_keep_live_clock() {
        let now = Utc.with_ymd_and_hms(2024, 5, 14, 9, 0, 0).unwrap();
        let snapshot = ClockSnapshot::from_parts(&now, WindowTimer::inactive());
        assert_eq!(snapshot.wall_clock_label, "09:00:00 AM");
        assert!(!snapshot.is_active());
        assert_eq!(snapshot.elapsed_label, "00:00:00");
        assert_eq!(snapshot.window_caption(), "Starts in 22h 0m");
    }

    #[test]
    fn capture_at_window_open() {
        let now = Utc.with_ymd_and_hms(2024, 5, 14, 7, 0, 0).unwrap();
        let snapshot = ClockSnapshot::capture(&now);
        assert!(snapshot.is_active());
        assert_eq!(snapshot.elapsed_label, "00:00:00");
        assert_eq!(snapshot.remaining_caption(), "17h 0m remaining");
        assert_eq!(snapshot.percent_label(), "0%");
        assert_eq!(snapshot.bar_width, 0.0);
    }
}
