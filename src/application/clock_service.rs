use crate::application::snapshot::ClockSnapshot;
use crate::config::FirstSample;
use crate::domain::logging::LogComponent;
use crate::domain::window::{WindowStatus, WindowTimer};
use crate::infrastructure::clock::Clock;
use crate::log_info;

/// Samples a clock and turns each sample into a [`ClockSnapshot`].
///
/// Holds no timer state of its own beyond the last status, which is only
/// used to log window transitions.
pub struct TimerClockService<C: Clock> {
    clock: C,
    last_status: Option<WindowStatus>,
}

impl<C: Clock> TimerClockService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, last_status: None }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Snapshot shown on mount, before any tick has fired.
    pub fn initial(&mut self, first_sample: FirstSample) -> ClockSnapshot {
        match first_sample {
            FirstSample::Immediate => self.tick(),
            FirstSample::AfterFirstTick => {
                ClockSnapshot::from_parts(&self.clock.now(), WindowTimer::inactive())
            }
        }
    }

    pub fn tick(&mut self) -> ClockSnapshot {
        let now = self.clock.now();
        let snapshot = ClockSnapshot::capture(&now);
        #[cfg(debug_assertions)]
        trace_sample(&snapshot);
        self.note_status(snapshot.status);
        snapshot
    }

    fn note_status(&mut self, status: WindowStatus) {
        if self.last_status == Some(status) {
            return;
        }
        if self.last_status.is_some() {
            match status {
                WindowStatus::Active => {
                    log_info!(LogComponent::Application("TimerClock"), "▶️ Daily window opened");
                }
                WindowStatus::Inactive => {
                    log_info!(LogComponent::Application("TimerClock"), "⏸️ Daily window closed, timer reset");
                }
            }
        }
        self.last_status = Some(status);
    }
}

/// Per-tick sample with the timer state as structured fields.
#[cfg(debug_assertions)]
fn trace_sample(snapshot: &ClockSnapshot) {
    use crate::domain::logging::{LogEntry, LogLevel, get_logger};

    get_logger().log(
        LogEntry::new(LogLevel::Trace, LogComponent::Application("TimerClock"), snapshot.time.to_string())
            .with_field("active", snapshot.is_active())
            .with_field("elapsed", snapshot.timer.elapsed_seconds()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeDelta, TimeZone, Utc};

    #[test]
    fn after_first_tick_starts_inactive_even_in_window() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 14, 12, 0, 0).unwrap());
        let mut service = TimerClockService::new(clock);
        let first = service.initial(FirstSample::AfterFirstTick);
        assert!(!first.is_active());
        assert_eq!(first.wall_clock_label, "12:00:00 PM");

        service.clock().advance(TimeDelta::seconds(1));
        let next = service.tick();
        assert!(next.is_active());
        assert_eq!(next.timer.elapsed_seconds(), 5 * 3600 + 1);
    }

    #[test]
    fn immediate_samples_on_mount() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 14, 12, 0, 0).unwrap());
        let mut service = TimerClockService::new(clock);
        assert!(service.initial(FirstSample::Immediate).is_active());
    }
}
