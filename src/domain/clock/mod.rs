//! Analog clock aggregate: time-of-day reading and dial geometry.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
