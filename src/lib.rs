use wasm_bindgen::prelude::*;

#[cfg(not(feature = "logic-only"))]
use crate::app::App;
use crate::config::TimerClockConfig;
use crate::domain::logging::{LogComponent, LogLevel};

pub mod app;
pub mod application;
pub mod clock_state;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Install logging and mount the clock into `<body>`
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (config, rejected) = TimerClockConfig::from_location();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    TimerClockConfig::report_rejected(&rejected);
    domain::logging::emit(
        LogLevel::Info,
        LogComponent::Presentation("Initialize"),
        format!("🚀 Daily timer clock initialized (log level {})", config.log_level.as_ref()),
    );

    #[cfg(not(feature = "logic-only"))]
    leptos::mount_to_body(move || leptos::view! { <App config=config /> });
}
