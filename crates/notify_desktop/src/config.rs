//! Configuration for the desktop notification channel

use serde::{Deserialize, Serialize};

/// Configuration for desktop notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesktopConfig {
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

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            display_ms: default_display_ms(),
        }
    }
}
