pub mod clock;
pub mod errors;
pub mod logging;
pub mod window;
