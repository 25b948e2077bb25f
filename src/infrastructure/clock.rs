//! Wall-clock sources.

use std::cell::RefCell;

use chrono::{DateTime, Local, TimeDelta, TimeZone};

/// Source of the current instant in some local time zone.
pub trait Clock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

/// The host clock in the platform's local zone (browser `Date` on wasm32).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    current: RefCell<DateTime<Tz>>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(start: DateTime<Tz>) -> Self {
        Self { current: RefCell::new(start) }
    }

    pub fn set(&self, instant: DateTime<Tz>) {
        *self.current.borrow_mut() = instant;
    }

    pub fn advance(&self, by: TimeDelta) {
        let next = self.current.borrow().clone() + by;
        self.set(next);
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.current.borrow().clone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    type Tz = C::Tz;

    fn now(&self) -> DateTime<Self::Tz> {
        (**self).now()
    }
}
