//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Watchlist construction rejected
    #[error("Invalid watchlist: {0}")]
    InvalidWatchlist(String),

    /// Rain keyword list construction rejected
    #[error("Invalid rain keywords: {0}")]
    InvalidKeywords(String),
}

impl DomainError {
    /// Create a watchlist validation error
    pub fn invalid_watchlist(reason: impl Into<String>) -> Self {
        Self::InvalidWatchlist(reason.into())
    }

    /// Create a keyword validation error
    pub fn invalid_keywords(reason: impl Into<String>) -> Self {
        Self::InvalidKeywords(reason.into())
    }
}
