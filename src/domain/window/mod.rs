//! Daily window aggregate: the fixed 07:00-24:00 timer and its derived values.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
