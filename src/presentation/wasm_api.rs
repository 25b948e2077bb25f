use chrono::{Local, TimeZone};
use wasm_bindgen::prelude::*;

use crate::application::{ClockSnapshot, TimerClockService};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::log_error;
use crate::infrastructure::SystemClock;
use crate::time_utils::{format_hours_minutes, format_time};

/// JS-facing access to the clock numbers without mounting the Leptos view.
/// Thin bridge only: every value comes from the application layer.
#[wasm_bindgen]
pub struct TimerClockApi {
    service: TimerClockService<SystemClock>,
}

#[wasm_bindgen]
impl TimerClockApi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { service: TimerClockService::new(SystemClock::new()) }
    }

    /// Snapshot of the current local instant as JSON.
    pub fn snapshot(&mut self) -> Result<String, JsValue> {
        let snapshot = self.service.tick();
        Ok(serde_json::to_string(&snapshot).map_err(AppError::from).map_err(report)?)
    }

    /// Snapshot for a `Date.now()`-style timestamp, read in local time.
    #[wasm_bindgen(js_name = snapshotAt)]
    pub fn snapshot_at(&self, epoch_ms: f64) -> Result<String, JsValue> {
        Ok(snapshot_json_in(&Local, epoch_ms).map_err(report)?)
    }
}

fn report(err: AppError) -> AppError {
    log_error!(LogComponent::Presentation("TimerClockApi"), "❌ {}", err);
    err
}

impl Default for TimerClockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_name = formatTime)]
pub fn format_time_js(total_seconds: u32) -> String {
    format_time(total_seconds)
}

#[wasm_bindgen(js_name = formatHoursMinutes)]
pub fn format_hours_minutes_js(total_seconds: f64) -> String {
    format_hours_minutes(total_seconds as i64)
}

/// Snapshot JSON for `epoch_ms` read in `tz`.
pub fn snapshot_json_in<Tz: TimeZone>(tz: &Tz, epoch_ms: f64) -> AppResult<String> {
    if !epoch_ms.is_finite() {
        return Err(AppError::Validation(format!("timestamp {} is not finite", epoch_ms)));
    }
    let instant = tz
        .timestamp_millis_opt(epoch_ms.floor() as i64)
        .single()
        .ok_or_else(|| AppError::Validation(format!("timestamp {} out of range", epoch_ms)))?;
    Ok(serde_json::to_string(&ClockSnapshot::capture(&instant))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn epoch_zero_is_midnight_and_inactive() {
        let json = snapshot_json_in(&Utc, 0.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["wall_clock_label"], "12:00:00 AM");
        assert_eq!(value["timer"]["active"], false);
        assert_eq!(value["status"], "inactive");
        assert_eq!(value["next_start"]["hours"], 7);
    }

    #[test]
    fn rejects_non_finite_timestamps() {
        assert!(matches!(snapshot_json_in(&Utc, f64::NAN), Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_out_of_range_timestamps() {
        assert!(snapshot_json_in(&Utc, 1e300).is_err());
    }
}
