//! Watchlist value object - the ordered list of monitored areas

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The ordered set of area names a rain check watches.
///
/// Order is significant: reports list areas in watchlist order, never in
/// feed order. Duplicate names collapse to their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    areas: Vec<String>,
}

impl Watchlist {
    /// Create a watchlist from area names, preserving order
    ///
    /// Names are trimmed; blank names are rejected, duplicates are dropped
    /// (first occurrence wins), and the resulting list must be non-empty.
    pub fn new<I, S>(areas: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for area in areas {
            let area = area.into().trim().to_string();
            if area.is_empty() {
                return Err(DomainError::invalid_watchlist(
                    "area names cannot be blank",
                ));
            }
            if !unique.contains(&area) {
                unique.push(area);
            }
        }

        if unique.is_empty() {
            return Err(DomainError::invalid_watchlist(
                "at least one area is required",
            ));
        }

        Ok(Self { areas: unique })
    }

    /// Area names in watch order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.areas.iter().map(String::as_str)
    }

    /// Whether an area is watched (exact name match)
    pub fn contains(&self, area: &str) -> bool {
        self.areas.iter().any(|a| a == area)
    }

    /// Number of watched areas
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Always false for a constructed watchlist; present for completeness
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl fmt::Display for Watchlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.areas.join(", "))
    }
}

impl TryFrom<Vec<String>> for Watchlist {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
