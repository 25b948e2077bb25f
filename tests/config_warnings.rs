use std::sync::Mutex;

use timer_clock_wasm::config::{FirstSample, TimerClockConfig};
use timer_clock_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};

static CAPTURED: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        CAPTURED.lock().unwrap().push((entry.level, format!("{} | {}", entry.component, entry.message)));
    }
}

#[test]
fn rejected_query_values_reach_the_installed_logger() {
    let (config, rejected) = TimerClockConfig::from_query("?first_sample=soon&log=loud&log=warn");
    assert_eq!(config.first_sample, FirstSample::Immediate);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(rejected.len(), 2);

    init_logger(Box::new(CapturingLogger));
    TimerClockConfig::report_rejected(&rejected);

    let captured = CAPTURED.lock().unwrap();
    assert_eq!(
        *captured,
        [
            (LogLevel::Warn, "PRE:Config | Ignoring first_sample=soon".to_string()),
            (LogLevel::Warn, "PRE:Config | Ignoring log=loud".to_string()),
        ]
    );
}
