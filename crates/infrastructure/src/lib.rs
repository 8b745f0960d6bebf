//! Infrastructure layer for raincheck
//!
//! Wires the application ports to the outside world: configuration
//! loading, the NEA feed adapter, the two alert channels, and the
//! file-backed run marker.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::{DesktopChannel, NeaForecastAdapter, TelegramChannel};
pub use config::AppConfig;
pub use persistence::FileRunMarker;
