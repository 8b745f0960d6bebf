//! Telegram client for sending bot messages
//!
//! Speaks the Bot API over HTTPS. Requests are form-encoded; responses use
//! the uniform `{ ok, result, error_code, description }` envelope.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::types::{ApiResponse, BotProfile, SentMessage, TelegramConfig};

/// Telegram API errors
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Missing or invalid client configuration
    #[error("Missing configuration: {0}")]
    Configuration(String),

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Bot API rejected the request
    #[error("API error: {code} - {description}")]
    Api {
        /// Telegram's numeric error code
        code: i32,
        /// Telegram's failure description
        description: String,
    },

    /// The response body did not match the expected envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    config: TelegramConfig,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("chat_id", &self.config.chat_id)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a new Telegram client
    ///
    /// # Errors
    ///
    /// Returns `TelegramError::Configuration` if the bot token or chat id
    /// is empty, or if the HTTP client cannot be initialized.
    pub fn new(config: TelegramConfig) -> Result<Self, TelegramError> {
        if config.bot_token.is_empty() {
            return Err(TelegramError::Configuration(
                "bot_token is required".to_string(),
            ));
        }
        if config.chat_id.is_empty() {
            return Err(TelegramError::Configuration(
                "chat_id is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TelegramError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// URL of a Bot API method for this bot
    ///
    /// The token is part of the path, so this value must never be logged.
    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.config.base_url, self.config.bot_token
        )
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        form: &[(&str, &str)],
    ) -> Result<T, TelegramError> {
        let response = self
            .client
            .post(self.method_url(method))
            .form(form)
            .send()
            .await?;

        // Telegram wraps failures in the same envelope, with a non-2xx
        // status; decode the body either way.
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::InvalidResponse(e.to_string()))?;

        if !envelope.ok {
            return Err(TelegramError::Api {
                code: envelope.error_code.unwrap_or(0),
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        envelope.result.ok_or_else(|| {
            TelegramError::InvalidResponse("ok response without a result".to_string())
        })
    }

    /// Send a plain-text message to the configured chat
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn send_message(&self, text: &str) -> Result<SentMessage, TelegramError> {
        debug!(chat_id = %self.config.chat_id, "Sending Telegram message");
        self.call(
            "sendMessage",
            &[("chat_id", self.config.chat_id.as_str()), ("text", text)],
        )
        .await
    }

    /// Fetch the bot's own profile, verifying the token works
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<BotProfile, TelegramError> {
        self.call("getMe", &[]).await
    }

    /// Check if the Bot API accepts this bot's credentials
    pub async fn is_available(&self) -> bool {
        self.get_me().await.is_ok()
    }
}
