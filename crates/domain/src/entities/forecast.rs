//! A single area's two-hour forecast

use std::fmt;

use serde::{Deserialize, Serialize};

/// One area's forecast as delivered by the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaForecast {
    area: String,
    forecast: String,
}

impl AreaForecast {
    /// Create a forecast entry
    #[must_use]
    pub fn new(area: impl Into<String>, forecast: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            forecast: forecast.into(),
        }
    }

    /// Area name as published by the feed
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Forecast wording, e.g. "Partly Cloudy (Day)"
    #[must_use]
    pub fn forecast(&self) -> &str {
        &self.forecast
    }
}

impl fmt::Display for AreaForecast {
    /// The `area: forecast` line format used in reports and alerts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.area, self.forecast)
    }
}
