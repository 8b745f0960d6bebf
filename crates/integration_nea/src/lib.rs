//! NEA two-hour weather forecast integration
//!
//! Client for the data.gov.sg realtime weather API
//! (<https://api.data.gov.sg/v1/environment/2-hour-weather-forecast>).
//! The feed publishes one forecast round at a time: a short wording per
//! area ("Cloudy", "Thundery Showers") valid for the next two hours.
//! No API key is required.

pub mod client;
mod models;

pub use client::{ForecastFeed, NeaClient, NeaConfig, NeaError};
pub use models::{
    ApiInfo, AreaMetadata, FeedResponse, ForecastEntry, ForecastItem, TwoHourForecast,
    ValidPeriod,
};
