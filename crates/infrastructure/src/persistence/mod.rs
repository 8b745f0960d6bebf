//! Durable state
//!
//! The only thing raincheck persists is the last-run marker.

mod run_marker;

pub use run_marker::FileRunMarker;
