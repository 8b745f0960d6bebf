//! The compiled rain-check report

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::entities::AreaForecast;
use crate::value_objects::{RainKeywords, Watchlist};

/// Verdict line shown when any watched area expects rain
const RAIN_TITLE: &str = "🚨 Rain Alert - Bike Safely!";
/// Verdict line shown when every watched area is clear
const CLEAR_TITLE: &str = "✅ Safe to Bike!";

/// The outcome of one rain check: the watched forecasts in watch order
/// plus the rain verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    generated_at: NaiveDateTime,
    entries: Vec<AreaForecast>,
    rainy: bool,
}

impl WeatherReport {
    /// Compile a report from fetched forecasts.
    ///
    /// Entries appear in watchlist order regardless of feed order. Areas
    /// the feed does not mention are skipped without a placeholder. When
    /// the feed repeats an area, the last occurrence wins. The report is
    /// rainy iff any included forecast matches the keywords.
    #[must_use]
    pub fn compile(
        forecasts: &[AreaForecast],
        watchlist: &Watchlist,
        keywords: &RainKeywords,
        generated_at: NaiveDateTime,
    ) -> Self {
        let mut latest: HashMap<&str, &str> = HashMap::with_capacity(forecasts.len());
        for entry in forecasts {
            latest.insert(entry.area(), entry.forecast());
        }

        let mut entries = Vec::with_capacity(watchlist.len());
        let mut rainy = false;
        for area in watchlist.iter() {
            let Some(forecast) = latest.get(area) else {
                continue;
            };
            if keywords.matches(forecast) {
                rainy = true;
            }
            entries.push(AreaForecast::new(area, *forecast));
        }

        Self {
            generated_at,
            entries,
            rainy,
        }
    }

    /// Whether any watched area expects rain
    #[must_use]
    pub fn is_rainy(&self) -> bool {
        self.rainy
    }

    /// The watched forecasts, in watchlist order
    #[must_use]
    pub fn entries(&self) -> &[AreaForecast] {
        &self.entries
    }

    /// When the report was compiled (local wall-clock)
    #[must_use]
    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// Timestamp line, `Weather Check - 2025-10-16 17:45`
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "Weather Check - {}",
            self.generated_at.format("%Y-%m-%d %H:%M")
        )
    }

    /// The verdict line for notification titles
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.rainy { RAIN_TITLE } else { CLEAR_TITLE }
    }

    /// One `area: forecast` line per watched area found in the feed
    #[must_use]
    pub fn body_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// The body lines joined for single-field consumers (desktop popup)
    #[must_use]
    pub fn body(&self) -> String {
        self.body_lines().join("\n")
    }

    /// Header, blank line, then the body lines
    #[must_use]
    pub fn full_text(&self) -> String {
        let mut text = self.header();
        text.push('\n');
        for line in self.body_lines() {
            text.push('\n');
            text.push_str(&line);
        }
        text
    }
}
