use std::str::FromStr;

use derive_more::Display;
use strum::{AsRefStr, EnumString};

use crate::domain::logging::{LogComponent, LogLevel};
use crate::log_warn;

/// When the window timer gets its first sample after mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum FirstSample {
    /// Sample on mount so the timer is correct from the first frame.
    #[default]
    #[display(fmt = "immediate")]
    Immediate,
    /// Show the clock on mount but leave the timer inactive until the first tick.
    #[display(fmt = "after-first-tick")]
    AfterFirstTick,
}

/// A query parameter whose value did not parse; the default was kept.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}={}", key, value)]
pub struct RejectedSetting {
    pub key: &'static str,
    pub value: String,
}

/// Runtime knobs. The window boundaries are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerClockConfig {
    pub tick_interval_ms: u32,
    pub first_sample: FirstSample,
    pub log_level: LogLevel,
}

impl Default for TimerClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: Self::TICK_INTERVAL_MS,
            first_sample: FirstSample::default(),
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
        }
    }
}

impl TimerClockConfig {
    pub const TICK_INTERVAL_MS: u32 = 1000;

    /// Overlay `first_sample` and `log` keys from a URL query string such as
    /// `?first_sample=after-first-tick&log=trace`. Unknown keys are ignored;
    /// unparsable values keep the default and come back as rejected, to be
    /// passed to [`Self::report_rejected`] once the logger is installed.
    pub fn from_query(query: &str) -> (Self, Vec<RejectedSetting>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();
        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (name, parsed) = match key {
                "first_sample" => ("first_sample", FirstSample::from_str(value).map(|v| config.first_sample = v)),
                "log" => ("log", LogLevel::from_str(value).map(|v| config.log_level = v)),
                _ => continue,
            };
            if parsed.is_err() {
                rejected.push(RejectedSetting { key: name, value: value.to_string() });
            }
        }
        (config, rejected)
    }

    /// Config from the current page URL, defaults outside a browser.
    pub fn from_location() -> (Self, Vec<RejectedSetting>) {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|query| Self::from_query(&query))
            .unwrap_or_default()
    }

    /// Warn about every rejected query value. Call once a logger is installed.
    pub fn report_rejected(rejected: &[RejectedSetting]) {
        for setting in rejected {
            log_warn!(LogComponent::Presentation("Config"), "Ignoring {}", setting);
        }
    }
}
