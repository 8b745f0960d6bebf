//! Telegram Bot API integration
//!
//! Client for sending messages through a Telegram bot
//! (<https://core.telegram.org/bots/api>). Only the two methods this tool
//! needs are wired up: `sendMessage` for the alert itself and `getMe` as
//! the availability probe.

pub mod client;
mod types;

pub use client::{TelegramClient, TelegramError};
pub use types::{ApiResponse, BotProfile, SentMessage, TelegramConfig};
