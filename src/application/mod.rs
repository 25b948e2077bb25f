pub mod clock_service;
pub mod snapshot;

pub use clock_service::TimerClockService;
pub use snapshot::ClockSnapshot;
