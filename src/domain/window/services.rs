use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike};

use super::value_objects::{DailyWindow, HoursMinutes};

fn window_start_time() -> NaiveTime {
    NaiveTime::MIN
        .overflowing_add_signed(TimeDelta::hours(i64::from(DailyWindow::START_HOUR)))
        .0
}

/// Longest gap searched for a valid local time before giving up.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Resolve a local wall-clock reading to an instant.
///
/// Ambiguous readings take the earlier instant. A reading inside a DST gap
/// resolves to the first valid local minute after it, whatever the gap's
/// length. Only a zone without any valid time for a whole day falls back to
/// reading the wall time as UTC.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => (1..=MAX_GAP_MINUTES)
            .find_map(|minutes| tz.from_local_datetime(&(naive + TimeDelta::minutes(minutes))).earliest())
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}

/// 07:00:00.000 local on `date`.
pub fn window_start_on<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    resolve_local(tz, date.and_time(window_start_time()))
}

/// The next 07:00 local: tomorrow once today's 07:00 has been reached.
pub fn next_window_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let today = now.date_naive();
    let date = if now.hour() >= DailyWindow::START_HOUR {
        today.succ_opt().unwrap_or(today)
    } else {
        today
    };
    window_start_on(date, &now.timezone())
}

/// Time left until the window opens again, seconds truncated.
pub fn time_until_next_start<Tz: TimeZone>(now: &DateTime<Tz>) -> HoursMinutes {
    let next = next_window_start(now);
    HoursMinutes::from_delta(next.signed_duration_since(now.clone()))
}
