//! Browser-backed implementations of the domain logging abstractions.

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Writes entries at or above `min_level` to the devtools console
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// `[time] LEVEL LAYER:unit | message | k=v ...`
    pub fn format_log_entry(entry: &LogEntry, timestamp: &str) -> String {
        let mut line = format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message);
        if !entry.fields.is_empty() {
            line.push_str(" | ");
            line.push_str(&entry.fields_text());
        }
        line
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if !self.accepts(entry.level) {
            return;
        }
        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        let formatted: wasm_bindgen::JsValue = Self::format_log_entry(&entry, &timestamp).into();
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// Millisecond wall-clock timestamps from `Date.now()`, shown as local `HH:MM:SS.mmm`
#[derive(Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogComponent;

    #[test]
    fn filters_below_min_level() {
        let logger = ConsoleLogger::new(LogLevel::Info);
        assert!(!logger.accepts(LogLevel::Debug));
        assert!(logger.accepts(LogLevel::Info));
        assert!(logger.accepts(LogLevel::Error));
    }

    #[test]
    fn appends_fields_after_message() {
        let entry = LogEntry::new(LogLevel::Trace, LogComponent::Application("TimerClock"), "07:00:01")
            .with_field("active", true)
            .with_field("elapsed", 1);
        assert_eq!(
            ConsoleLogger::format_log_entry(&entry, "07:00:01.000"),
            "[07:00:01.000] TRACE APP:TimerClock | 07:00:01 | active=true elapsed=1"
        );
    }

    #[test]
    fn plain_entries_have_no_field_suffix() {
        let entry = LogEntry::new(LogLevel::Warn, LogComponent::Presentation("Config"), "Ignoring log=loud");
        assert_eq!(
            ConsoleLogger::format_log_entry(&entry, "#000001"),
            "[#000001]  WARN PRE:Config | Ignoring log=loud"
        );
    }
}
