//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod alert_port;
mod forecast_port;
mod run_marker_port;

#[cfg(test)]
pub use alert_port::MockAlertChannelPort;
pub use alert_port::{AlertChannelPort, WeatherAlert};
#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::ForecastPort;
#[cfg(test)]
pub use run_marker_port::MockRunMarkerPort;
pub use run_marker_port::RunMarkerPort;
