//! Forecast adapter - implements ForecastPort using integration_nea

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::entities::AreaForecast;
use integration_nea::{ForecastFeed, NeaClient, NeaConfig, NeaError};
use tracing::{debug, instrument};

/// Adapter for the NEA two-hour forecast feed
pub struct NeaForecastAdapter {
    client: NeaClient,
}

impl std::fmt::Debug for NeaForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeaForecastAdapter")
            .field("client", &"NeaClient")
            .finish()
    }
}

impl NeaForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = NeaClient::with_defaults().map_err(|e| Self::map_error(&e))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: NeaConfig) -> Result<Self, ApplicationError> {
        let client = NeaClient::new(config).map_err(|e| Self::map_error(&e))?;
        Ok(Self { client })
    }

    /// Map a feed error to an application error
    fn map_error(err: &NeaError) -> ApplicationError {
        match err {
            NeaError::ConnectionFailed(_)
            | NeaError::Timeout(_)
            | NeaError::RequestFailed(_)
            | NeaError::ServiceUnavailable(_) => ApplicationError::ExternalService(err.to_string()),
            NeaError::ParseError(_) | NeaError::EmptyFeed => {
                ApplicationError::Internal(err.to_string())
            },
            NeaError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl ForecastPort for NeaForecastAdapter {
    #[instrument(skip(self))]
    async fn latest_forecasts(&self) -> Result<Vec<AreaForecast>, ApplicationError> {
        let round = self
            .client
            .latest()
            .await
            .map_err(|e| Self::map_error(&e))?;

        debug!(
            areas = round.entries.len(),
            updated = round.updated_at.as_deref().unwrap_or("unknown"),
            "Forecast round fetched"
        );

        Ok(round
            .entries
            .into_iter()
            .map(|entry| AreaForecast::new(entry.area, entry.forecast))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_map_to_external_service() {
        let err = NeaForecastAdapter::map_error(&NeaError::ConnectionFailed("refused".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));

        let err = NeaForecastAdapter::map_error(&NeaError::Timeout(10));
        assert!(matches!(err, ApplicationError::ExternalService(_)));

        let err =
            NeaForecastAdapter::map_error(&NeaError::ServiceUnavailable("HTTP 503".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn format_errors_map_to_internal() {
        let err = NeaForecastAdapter::map_error(&NeaError::ParseError("bad json".into()));
        assert!(matches!(err, ApplicationError::Internal(_)));

        let err = NeaForecastAdapter::map_error(&NeaError::EmptyFeed);
        assert!(matches!(err, ApplicationError::Internal(_)));
    }

    #[test]
    fn rate_limit_maps_to_rate_limited() {
        let err = NeaForecastAdapter::map_error(&NeaError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn adapter_creation_with_defaults() {
        assert!(NeaForecastAdapter::new().is_ok());
    }
}
