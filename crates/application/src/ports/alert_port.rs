//! Alert channel port
//!
//! Defines the interface every notification channel implements. Channels
//! receive one channel-agnostic alert and pick the parts that fit their
//! medium.

use async_trait::async_trait;
use domain::entities::WeatherReport;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A rain-check alert ready for dispatch
///
/// `body` carries the area lines alone (popup-sized), `detail` carries the
/// timestamped full text for channels that keep history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherAlert {
    /// Verdict line, used as the notification title
    pub title: String,
    /// One `area: forecast` line per watched area
    pub body: String,
    /// Timestamp header, blank line, then the area lines
    pub detail: String,
}

impl WeatherAlert {
    /// Build the alert for a compiled report
    #[must_use]
    pub fn from_report(report: &WeatherReport) -> Self {
        Self {
            title: report.title().to_string(),
            body: report.body(),
            detail: report.full_text(),
        }
    }
}

/// Port for one notification channel
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AlertChannelPort: Send + Sync {
    /// Stable channel name used in logs and dispatch outcomes
    fn name(&self) -> &'static str;

    /// Deliver the alert
    async fn send(&self, alert: &WeatherAlert) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::entities::AreaForecast;
    use domain::value_objects::{RainKeywords, Watchlist};

    use super::*;

    fn compile(forecast: &str) -> WeatherReport {
        let watchlist = Watchlist::new(["City"]).unwrap();
        let at = NaiveDate::from_ymd_opt(2025, 10, 16)
            .unwrap()
            .and_hms_opt(17, 45, 0)
            .unwrap();
        WeatherReport::compile(
            &[AreaForecast::new("City", forecast)],
            &watchlist,
            &RainKeywords::default(),
            at,
        )
    }

    fn _assert_object_safe(_: &dyn AlertChannelPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AlertChannelPort>();
    }

    #[test]
    fn alert_from_rainy_report() {
        let alert = WeatherAlert::from_report(&compile("Thundery Showers"));
        assert_eq!(alert.title, "🚨 Rain Alert - Bike Safely!");
        assert_eq!(alert.body, "City: Thundery Showers");
        assert_eq!(
            alert.detail,
            "Weather Check - 2025-10-16 17:45\n\nCity: Thundery Showers"
        );
    }

    #[test]
    fn alert_from_clear_report() {
        let alert = WeatherAlert::from_report(&compile("Fair (Day)"));
        assert_eq!(alert.title, "✅ Safe to Bike!");
        assert_eq!(alert.body, "City: Fair (Day)");
        assert!(alert.detail.starts_with("Weather Check - "));
    }

    #[test]
    fn body_has_no_timestamp_header() {
        let alert = WeatherAlert::from_report(&compile("Cloudy"));
        assert!(!alert.body.contains("Weather Check"));
        assert!(alert.detail.contains("Weather Check"));
    }
}
