//! Forecast feed models
//!
//! Types for the data.gov.sg two-hour forecast payload. Only the fields
//! the rain check consumes are required; everything else is optional so
//! feed-side additions never break parsing.

use serde::{Deserialize, Serialize};

/// Top-level feed payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    /// Area catalogue with label coordinates
    #[serde(default)]
    pub area_metadata: Vec<AreaMetadata>,

    /// Published forecast rounds; the feed carries exactly one
    #[serde(default)]
    pub items: Vec<ForecastItem>,

    /// Feed self-diagnosis
    #[serde(default)]
    pub api_info: Option<ApiInfo>,
}

/// One entry of the feed's area catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaMetadata {
    /// Area name, matching the `area` field of forecast entries
    pub name: String,

    /// Representative map coordinates for the area
    #[serde(default)]
    pub label_location: Option<LabelLocation>,
}

/// Latitude/longitude pair of an area label
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LabelLocation {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// One published forecast round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    /// When the round was computed, RFC 3339 with +08:00 offset
    #[serde(default)]
    pub update_timestamp: Option<String>,

    /// Nominal publication time of the round
    #[serde(default)]
    pub timestamp: Option<String>,

    /// The two-hour window the round covers
    #[serde(default)]
    pub valid_period: Option<ValidPeriod>,

    /// One forecast per area
    #[serde(default)]
    pub forecasts: Vec<ForecastEntry>,
}

/// Validity window of a forecast round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidPeriod {
    /// Window start, RFC 3339
    pub start: String,
    /// Window end, RFC 3339
    pub end: String,
}

/// A single area's forecast wording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Area name, e.g. "Tampines"
    pub area: String,
    /// Forecast wording, e.g. "Partly Cloudy (Day)"
    pub forecast: String,
}

/// Feed status block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    /// `"healthy"` when the feed considers itself operational
    pub status: String,
}

impl ApiInfo {
    /// Whether the feed reports itself operational
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// The latest forecast round, flattened for consumers
#[derive(Debug, Clone)]
pub struct TwoHourForecast {
    /// When the feed last updated, verbatim from the feed
    pub updated_at: Option<String>,
    /// Start of the validity window, verbatim from the feed
    pub valid_from: Option<String>,
    /// End of the validity window, verbatim from the feed
    pub valid_to: Option<String>,
    /// One entry per area the feed covers
    pub entries: Vec<ForecastEntry>,
}

impl From<ForecastItem> for TwoHourForecast {
    fn from(item: ForecastItem) -> Self {
        let (valid_from, valid_to) = match item.valid_period {
            Some(period) => (Some(period.start), Some(period.end)),
            None => (None, None),
        };
        Self {
            updated_at: item.update_timestamp,
            valid_from,
            valid_to,
            entries: item.forecasts,
        }
    }
}
