use chrono::{TimeZone, Utc};
use insta::assert_snapshot;
use timer_clock_wasm::application::ClockSnapshot;

fn summary(h: u32, m: u32, s: u32) -> String {
    let now = Utc.with_ymd_and_hms(2025, 1, 20, h, m, s).unwrap();
    let snapshot = ClockSnapshot::capture(&now);
    format!(
        "{} | {} | {} | {} | {} | {}",
        snapshot.wall_clock_label,
        snapshot.status_label(),
        snapshot.window_caption(),
        snapshot.percent_label(),
        snapshot.elapsed_label,
        snapshot.remaining_caption()
    )
}

#[test]
fn midday_labels() {
    assert_snapshot!(
        summary(12, 30, 45),
        @"12:30:45 PM | Timer Active (7 AM - 12 AM) | 17-Hour Window | 32% | 05:30:45 | 11h 29m remaining"
    );
}

#[test]
fn before_dawn_labels() {
    assert_snapshot!(
        summary(3, 15, 0),
        @"03:15:00 AM | Timer Inactive | Starts in 3h 45m | 0% | 00:00:00 | Waiting for 7:00 AM"
    );
}

#[test]
fn last_second_labels() {
    assert_snapshot!(
        summary(23, 59, 59),
        @"11:59:59 PM | Timer Active (7 AM - 12 AM) | 17-Hour Window | 99% | 16:59:59 | 0h 0m remaining"
    );
}

#[test]
fn bar_tracks_unfloored_progress() {
    let now = Utc.with_ymd_and_hms(2025, 1, 20, 12, 30, 45).unwrap();
    let snapshot = ClockSnapshot::capture(&now);
    assert!((snapshot.bar_width - 32.426_470_588_235_3).abs() < 1e-9);
    assert_eq!(snapshot.percent, 32);
}

#[test]
fn half_window_fills_half_the_bar() {
    let now = Utc.with_ymd_and_hms(2025, 1, 20, 15, 30, 0).unwrap();
    let snapshot = ClockSnapshot::capture(&now);
    assert_eq!(snapshot.timer.elapsed_seconds(), 30_600);
    assert!((snapshot.bar_width - 50.0).abs() < 1e-9);
}
