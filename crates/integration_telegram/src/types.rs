//! Telegram-specific types and the Bot API response envelope

use serde::{Deserialize, Serialize};

/// Configuration for the Telegram client
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather (sensitive, redacted in Debug)
    #[serde(default, skip_serializing)]
    pub bot_token: String,

    /// Chat the bot sends alerts to
    #[serde(default)]
    pub chat_id: String,

    /// Bot API base URL (default: <https://api.telegram.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.telegram.org".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl TelegramConfig {
    /// Create a config with the required credentials and default endpoint
    #[must_use]
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }

    /// Override the API base URL (used by tests against a mock server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_id: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field(
                "bot_token",
                &if self.bot_token.is_empty() {
                    "<empty>"
                } else {
                    "[REDACTED]"
                },
            )
            .field("chat_id", &self.chat_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// The Bot API's uniform response envelope
///
/// Every method returns `{ ok, result?, error_code?, description? }`;
/// `result` is only present when `ok` is true.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was accepted
    pub ok: bool,
    /// Method-specific payload, present on success
    ///
    /// A bare `#[serde(default)]` would put a `Default` bound on `T`;
    /// the explicit path keeps payload types free of that requirement.
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    /// Numeric error code, present on failure
    #[serde(default)]
    pub error_code: Option<i32>,
    /// Human-readable failure reason
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload of a successful `sendMessage`
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    /// Telegram's identifier for the delivered message
    pub message_id: i64,
}

/// Payload of `getMe` - the bot's own profile
#[derive(Debug, Clone, Deserialize)]
pub struct BotProfile {
    /// Bot user id
    pub id: i64,
    /// Bot username (without the `@`)
    #[serde(default)]
    pub username: Option<String>,
    /// Bot display name
    pub first_name: String,
}
