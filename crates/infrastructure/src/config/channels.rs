//! Notification channel configuration: Telegram and the desktop popup

use integration_telegram::TelegramConfig;
use notify_desktop::DesktopConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::default_true;

/// Telegram channel configuration
///
/// The whole `[telegram]` section is optional; without it the run proceeds
/// on the desktop channel alone. An incomplete section (token without chat
/// id, or the reverse) is reported at wiring time.
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramSection {
    /// Bot token issued by BotFather (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,

    /// Chat the bot sends alerts to
    #[serde(default)]
    pub chat_id: Option<String>,

    /// Bot API base URL override
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

const fn default_timeout() -> u64 {
    10
}

impl std::fmt::Debug for TelegramSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramSection")
            .field(
                "bot_token",
                &if self.bot_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("chat_id", &self.chat_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for TelegramSection {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl TelegramSection {
    /// Whether both credentials are present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }

    /// Build the client configuration, when both credentials are present
    #[must_use]
    pub fn client_config(&self) -> Option<TelegramConfig> {
        let token = self.bot_token.as_ref()?;
        let chat_id = self.chat_id.as_ref()?;

        let mut config = TelegramConfig::new(token.expose_secret(), chat_id)
            .with_timeout_secs(self.timeout_secs);
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        Some(config)
    }
}

/// Desktop popup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesktopSection {
    /// Whether the desktop channel is attached at all (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Notification command to invoke (default: `notify-send`)
    #[serde(default = "default_command")]
    pub command: String,

    /// How long the popup stays on screen, in milliseconds (default: 15000)
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

fn default_command() -> String {
    "notify-send".to_string()
}

const fn default_display_ms() -> u64 {
    15_000
}

impl Default for DesktopSection {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_command(),
            display_ms: default_display_ms(),
        }
    }
}

impl DesktopSection {
    /// Build the notifier configuration
    #[must_use]
    pub fn notifier_config(&self) -> DesktopConfig {
        DesktopConfig {
            command: self.command.clone(),
            display_ms: self.display_ms,
        }
    }
}
