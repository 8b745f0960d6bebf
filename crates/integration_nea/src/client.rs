//! NEA forecast feed client
//!
//! HTTP client for the data.gov.sg two-hour weather forecast endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{FeedResponse, TwoHourForecast};

/// Path of the two-hour forecast endpoint below the API base
const FORECAST_PATH: &str = "/environment/2-hour-weather-forecast";

/// Forecast feed errors
#[derive(Debug, Error)]
pub enum NeaError {
    /// Connection to the feed failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Request to the feed failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the feed payload
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The feed carried no forecast round
    #[error("Feed contained no forecast items")]
    EmptyFeed,

    /// Feed is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Forecast feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeaConfig {
    /// data.gov.sg API base URL (default: <https://api.data.gov.sg/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.data.gov.sg/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for NeaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Forecast feed trait for fetching the current round
#[async_trait]
pub trait ForecastFeed: Send + Sync {
    /// Fetch the latest two-hour forecast round
    async fn latest(&self) -> Result<TwoHourForecast, NeaError>;

    /// Check if the feed is reachable and reports itself healthy
    async fn is_healthy(&self) -> bool;
}

/// data.gov.sg HTTP client implementation
#[derive(Debug)]
pub struct NeaClient {
    client: Client,
    config: NeaConfig,
}

impl NeaClient {
    /// Create a new feed client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: NeaConfig) -> Result<Self, NeaError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NeaError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, NeaError> {
        Self::new(NeaConfig::default())
    }

    /// Full URL of the two-hour forecast endpoint
    fn forecast_url(&self) -> String {
        format!("{}{FORECAST_PATH}", self.config.base_url)
    }

    fn map_request_error(&self, e: &reqwest::Error) -> NeaError {
        if e.is_timeout() {
            NeaError::Timeout(self.config.timeout_secs)
        } else if e.is_connect() {
            NeaError::ConnectionFailed(e.to_string())
        } else {
            NeaError::RequestFailed(e.to_string())
        }
    }

    async fn fetch_feed(&self) -> Result<FeedResponse, NeaError> {
        let url = self.forecast_url();
        debug!(url = %url, "Fetching two-hour forecast feed");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(&e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NeaError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(NeaError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(NeaError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| NeaError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ForecastFeed for NeaClient {
    #[instrument(skip(self))]
    async fn latest(&self) -> Result<TwoHourForecast, NeaError> {
        let feed = self.fetch_feed().await?;
        let item = feed.items.into_iter().next().ok_or(NeaError::EmptyFeed)?;

        debug!(
            updated = item.update_timestamp.as_deref().unwrap_or("unknown"),
            areas = item.forecasts.len(),
            "Fetched forecast round"
        );

        Ok(TwoHourForecast::from(item))
    }

    async fn is_healthy(&self) -> bool {
        match self.fetch_feed().await {
            Ok(feed) => feed.api_info.is_none_or(|info| info.is_healthy()),
            Err(_) => false,
        }
    }
}
