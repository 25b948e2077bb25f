use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;

use super::services::window_start_on;
use super::value_objects::{DailyWindow, HoursMinutes, Progress, WindowStatus};

/// Entity - elapsed-time state of the daily window for one sampled instant.
///
/// Never advanced incrementally: every tick builds a fresh one with
/// [`WindowTimer::sample`], so a skipped tick costs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WindowTimer {
    elapsed_seconds: u32,
    active: bool,
}

impl WindowTimer {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn sample<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        if !DailyWindow::contains_hour(now.hour()) {
            return Self::inactive();
        }

        let start = window_start_on(now.date_naive(), &now.timezone());
        let elapsed_ms = now.clone().signed_duration_since(start).num_milliseconds();
        // floor, then pin to zero if a DST shift put "now" before 07:00
        let elapsed_seconds = u32::try_from(elapsed_ms.div_euclid(1000)).unwrap_or(0);

        Self { elapsed_seconds, active: true }
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn status(&self) -> WindowStatus {
        if self.active { WindowStatus::Active } else { WindowStatus::Inactive }
    }

    pub fn progress(&self) -> Progress {
        Progress::from_elapsed(self.elapsed_seconds)
    }

    /// Whole hours and minutes left in today's window.
    pub fn remaining(&self) -> HoursMinutes {
        HoursMinutes::from_seconds(
            i64::from(DailyWindow::LENGTH_SECONDS) - i64::from(self.elapsed_seconds),
        )
    }
}
