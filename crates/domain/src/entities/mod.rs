//! Domain entities - forecasts and the compiled rain-check report

mod forecast;
mod report;

pub use forecast::AreaForecast;
pub use report::WeatherReport;
