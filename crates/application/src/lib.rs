//! Application layer - the rain-check pipeline and its ports
//!
//! Orchestrates domain objects through ports implemented by the
//! infrastructure layer: a forecast feed, any number of alert channels,
//! and the once-a-day run marker.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
