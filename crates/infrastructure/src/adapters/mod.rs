//! Port adapters
//!
//! One adapter per application port: the NEA feed behind `ForecastPort`,
//! and the two notification channels behind `AlertChannelPort`.

mod desktop_channel;
mod forecast_adapter;
mod telegram_channel;

pub use desktop_channel::DesktopChannel;
pub use forecast_adapter::NeaForecastAdapter;
pub use telegram_channel::TelegramChannel;
