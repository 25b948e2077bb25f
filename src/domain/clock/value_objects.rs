use chrono::Timelike;
use derive_more::{Constructor, Display};
use serde::Serialize;
use strum::{AsRefStr, EnumIter};

use crate::domain::errors::{AppError, AppResult};

/// Value Object - local time of day as read off the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8, second: u8) -> AppResult<Self> {
        if hour > 23 {
            return Err(AppError::Validation(format!("hour {} out of range 0..=23", hour)));
        }
        if minute > 59 {
            return Err(AppError::Validation(format!("minute {} out of range 0..=59", minute)));
        }
        if second > 59 {
            return Err(AppError::Validation(format!("second {} out of range 0..=59", second)));
        }
        Ok(Self { hour, minute, second })
    }

    /// Read hour/minute/second from any chrono time-of-day carrier.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        // Timelike guarantees hour < 24, minute < 60, second < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Hour on a 12-hour dial: 0 and 12 both read as 12.
    pub fn hours12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }
}

/// Value Object - point in the 200x200 dial coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Clock hands, drawn back to front in iteration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Hand {
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

impl Hand {
    /// Hand length in dial units.
    pub fn length(self) -> f64 {
        match self {
            Hand::Hour => 45.0,
            Hand::Minute => 65.0,
            Hand::Second => 70.0,
        }
    }
}

/// Value Object - hand angles in degrees, 0° at 3 o'clock, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn of(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

/// One of the twelve static dial positions: a tick mark plus its numeral
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialMark {
    pub index: u8,
    pub angle: f64,
    pub tick_outer: Point,
    pub tick_inner: Point,
    pub numeral_at: Point,
    pub label: String,
}
