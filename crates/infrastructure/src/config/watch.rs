//! Watch configuration: monitored areas and rain keywords

use domain::value_objects::{RainKeywords, Watchlist};
use domain::DomainError;
use serde::{Deserialize, Serialize};

/// Monitored-area configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Area names to watch, report order (must match NEA's names exactly)
    #[serde(default = "default_areas")]
    pub areas: Vec<String>,

    /// Substrings that mark a forecast as rain (case-sensitive)
    #[serde(default = "default_rain_keywords")]
    pub rain_keywords: Vec<String>,
}

/// The commute corridor plus home: the stops that decide bike-or-train
fn default_areas() -> Vec<String> {
    [
        "Tampines",
        "City",
        "Paya Lebar",
        "Jurong East",
        "Punggol",
        "Woodlands",
        "Yishun",
        "Queenstown",
    ]
    .map(String::from)
    .to_vec()
}

fn default_rain_keywords() -> Vec<String> {
    ["Showers", "Rain", "Thundery"].map(String::from).to_vec()
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            areas: default_areas(),
            rain_keywords: default_rain_keywords(),
        }
    }
}

impl WatchConfig {
    /// Build the validated watchlist
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the configured list is empty or contains
    /// blank names.
    pub fn watchlist(&self) -> Result<Watchlist, DomainError> {
        Watchlist::new(self.areas.iter().cloned())
    }

    /// Build the validated rain keyword set
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the configured list is empty or contains
    /// blank keywords.
    pub fn keywords(&self) -> Result<RainKeywords, DomainError> {
        RainKeywords::new(self.rain_keywords.iter().cloned())
    }
}
