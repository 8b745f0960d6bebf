//! Application configuration
//!
//! Split into focused sub-modules by concern:
//! - `gate`: the earliest-run time window
//! - `watch`: monitored areas and rain keywords
//! - `channels`: Telegram and desktop notification settings
//! - `state`: run-marker file location
//!
//! Loaded from an optional `raincheck.toml` plus `RAINCHECK_*` environment
//! overrides (`__` between path segments, e.g. `RAINCHECK_TELEGRAM__CHAT_ID`).
//! The feed section reuses the integration crate's own config type, so its
//! defaults live in one place.

mod channels;
mod gate;
mod state;
mod watch;

use std::path::Path;

use integration_nea::NeaConfig;
use serde::{Deserialize, Serialize};

pub use channels::{DesktopSection, TelegramSection};
pub use gate::GateConfig;
pub use state::StateConfig;
pub use watch::WatchConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Run-time window settings
    #[serde(default)]
    pub gate: GateConfig,

    /// Monitored areas and rain keywords
    #[serde(default)]
    pub watch: WatchConfig,

    /// NEA forecast feed settings
    #[serde(default)]
    pub feed: NeaConfig,

    /// Telegram channel settings; the channel is skipped when absent
    #[serde(default)]
    pub telegram: Option<TelegramSection>,

    /// Desktop popup settings
    #[serde(default)]
    pub desktop: DesktopSection,

    /// Run-marker persistence settings
    #[serde(default)]
    pub state: StateConfig,
}

impl AppConfig {
    /// Load configuration from `raincheck.toml` (if present) and
    /// `RAINCHECK_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value does not
    /// deserialize into the expected shape.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("raincheck").required(false))
    }

    /// Load configuration from an explicit file path plus environment
    /// overrides
    ///
    /// Unlike [`Self::load`], a missing file is an error here: the caller
    /// asked for that file specifically.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or a value does not
    /// deserialize into the expected shape.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path))
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables; `__` separates path
            // segments so snake_case keys stay addressable
            // (e.g., RAINCHECK_TELEGRAM__CHAT_ID -> telegram.chat_id)
            .add_source(
                config::Environment::with_prefix("RAINCHECK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
