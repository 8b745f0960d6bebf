//! Domain layer for raincheck
//!
//! Contains the forecast entities, the watchlist and rain-keyword value
//! objects, and domain errors. This layer has no I/O and no knowledge of
//! feeds, notification channels, or the filesystem.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
