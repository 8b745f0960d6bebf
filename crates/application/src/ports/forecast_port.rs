//! Forecast feed port
//!
//! Defines the interface for fetching the current round of area forecasts.

use async_trait::async_trait;
use domain::entities::AreaForecast;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the latest forecast for every area the feed covers
    ///
    /// Returns the feed's full area list; filtering down to the watchlist
    /// is the caller's concern.
    async fn latest_forecasts(&self) -> Result<Vec<AreaForecast>, ApplicationError>;
}
