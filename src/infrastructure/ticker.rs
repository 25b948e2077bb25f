use gloo::timers::callback::Interval;

use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

/// Fixed-period callback on the browser event loop.
///
/// The interval lives exactly as long as the `Ticker`: dropping it (or calling
/// [`Ticker::stop`]) clears the timer. Late ticks are not caught up.
pub struct Ticker {
    interval: Option<Interval>,
}

impl Ticker {
    pub fn start<F>(period_ms: u32, mut on_tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        log_debug!(LogComponent::Infrastructure("Ticker"), "⏱️ Starting {}ms ticker", period_ms);
        let interval = Interval::new(period_ms, move || {
            log_trace!(LogComponent::Infrastructure("Ticker"), "tick");
            on_tick();
        });
        Self { interval: Some(interval) }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            drop(interval);
            log_debug!(LogComponent::Infrastructure("Ticker"), "🛑 Ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
