//! Value Objects - Immutable, identity-less domain primitives

mod rain_keywords;
mod watchlist;

pub use rain_keywords::RainKeywords;
pub use watchlist::Watchlist;
