//! Rain keyword value object - what counts as rain in a forecast

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The substrings whose presence in a forecast marks it as rain.
///
/// Matching is case-sensitive containment. The feed capitalizes its
/// weather terms ("Thundery Showers", "Light Rain"), so "Rain" matches
/// while a lowercase "rain" in running text would not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RainKeywords {
    keywords: Vec<String>,
}

impl RainKeywords {
    /// Create a keyword list
    ///
    /// Keywords are kept verbatim (no trimming, matching is literal);
    /// blank entries are rejected and the list must be non-empty.
    pub fn new<I, S>(keywords: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();

        if keywords.is_empty() {
            return Err(DomainError::invalid_keywords(
                "at least one keyword is required",
            ));
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(DomainError::invalid_keywords("keywords cannot be blank"));
        }

        Ok(Self { keywords })
    }

    /// Whether the forecast wording contains any keyword
    pub fn matches(&self, forecast: &str) -> bool {
        self.keywords.iter().any(|k| forecast.contains(k.as_str()))
    }

    /// Keywords in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl Default for RainKeywords {
    /// The canonical bad-weather terms of the two-hour forecast feed
    fn default() -> Self {
        Self {
            keywords: vec![
                "Showers".to_string(),
                "Rain".to_string(),
                "Thundery".to_string(),
            ],
        }
    }
}

impl TryFrom<Vec<String>> for RainKeywords {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_terms_match_feed_wording() {
        let keywords = RainKeywords::default();
        assert!(keywords.matches("Light Rain"));
        assert!(keywords.matches("Thundery Showers"));
        assert!(keywords.matches("Passing Showers"));
        assert!(keywords.matches("Heavy Thundery Showers with Gusty Winds"));
    }

    #[test]
    fn clear_conditions_do_not_match() {
        let keywords = RainKeywords::default();
        assert!(!keywords.matches("Partly Cloudy (Day)"));
        assert!(!keywords.matches("Fair (Night)"));
        assert!(!keywords.matches("Windy"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let keywords = RainKeywords::default();
        assert!(!keywords.matches("light rain"));
        assert!(!keywords.matches("thundery showers"));
        assert!(keywords.matches("Rain"));
    }

    #[test]
    fn substring_matches_mid_word() {
        // Literal containment, not word-boundary matching
        let keywords = RainKeywords::new(["Rain"]).unwrap();
        assert!(keywords.matches("Rainbow"));
    }

    #[test]
    fn empty_list_is_rejected() {
        let result = RainKeywords::new(Vec::<String>::new());
        assert!(matches!(result, Err(DomainError::InvalidKeywords(_))));
    }

    #[test]
    fn blank_keyword_is_rejected() {
        assert!(RainKeywords::new(["Rain", ""]).is_err());
        assert!(RainKeywords::new(["  "]).is_err());
    }

    #[test]
    fn iter_preserves_declaration_order() {
        let keywords = RainKeywords::default();
        let terms: Vec<&str> = keywords.iter().collect();
        assert_eq!(terms, vec!["Showers", "Rain", "Thundery"]);
    }

    #[test]
    fn try_from_vec() {
        let keywords: RainKeywords = vec!["Drizzle".to_string()].try_into().unwrap();
        assert!(keywords.matches("Light Drizzle"));
    }

    #[test]
    fn serialization_roundtrip() {
        let keywords = RainKeywords::default();
        let json = serde_json::to_string(&keywords).unwrap();
        let parsed: RainKeywords = serde_json::from_str(&json).unwrap();
        assert_eq!(keywords, parsed);
    }
}
