pub mod clock;
pub mod services;
pub mod ticker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ticker::Ticker;
