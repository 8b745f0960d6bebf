//! The notify-send wrapper

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::config::DesktopConfig;
use crate::error::NotifyError;

/// Desktop popup notifier backed by `notify-send`
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    config: DesktopConfig,
}

impl DesktopNotifier {
    /// Create a notifier with the given configuration
    #[must_use]
    pub const fn new(config: DesktopConfig) -> Self {
        Self { config }
    }

    /// Create a notifier with the stock `notify-send` setup
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DesktopConfig::default())
    }

    /// Show a popup with the given title and body
    ///
    /// Maps to `notify-send -t {display_ms} {title} {body}`. The command's
    /// output is captured, never inherited, so a chatty daemon cannot leak
    /// into the tool's own console output.
    #[instrument(skip(self, body), fields(title = %title, body_len = body.len()))]
    pub async fn send(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        debug!(command = %self.config.command, "Showing desktop notification");

        let output = Command::new(&self.config.command)
            .arg("-t")
            .arg(self.config.display_ms.to_string())
            .arg(title)
            .arg(body)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| self.map_spawn_error(&e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifyError::CommandFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }

    /// Check if the notification command is installed
    pub async fn is_available(&self) -> bool {
        Command::new(&self.config.command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }

    fn map_spawn_error(&self, e: &std::io::Error) -> NotifyError {
        if e.kind() == std::io::ErrorKind::NotFound {
            NotifyError::NotAvailable(format!(
                "'{}' not found. Install libnotify-bin (or set desktop.command).",
                self.config.command
            ))
        } else {
            NotifyError::SpawnFailed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_command_notifier() -> DesktopNotifier {
        DesktopNotifier::new(DesktopConfig {
            command: "raincheck-no-such-notifier".to_string(),
            display_ms: 1000,
        })
    }

    #[tokio::test]
    async fn missing_command_maps_to_not_available() {
        let notifier = missing_command_notifier();
        let result = notifier.send("title", "body").await;

        match result {
            Err(NotifyError::NotAvailable(msg)) => {
                assert!(msg.contains("raincheck-no-such-notifier"));
                assert!(msg.contains("libnotify-bin"));
            },
            other => panic!("Expected NotAvailable, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_command_is_not_available() {
        assert!(!missing_command_notifier().is_available().await);
    }

    #[tokio::test]
    async fn failing_command_captures_stderr() {
        // `false` exists on any POSIX system and always exits non-zero
        let notifier = DesktopNotifier::new(DesktopConfig {
            command: "false".to_string(),
            display_ms: 1000,
        });

        let result = notifier.send("title", "body").await;
        assert!(
            matches!(result, Err(NotifyError::CommandFailed { .. })),
            "Expected CommandFailed, got: {result:?}"
        );
    }

    #[tokio::test]
    async fn succeeding_command_is_ok() {
        // `true` ignores its arguments and exits zero
        let notifier = DesktopNotifier::new(DesktopConfig {
            command: "true".to_string(),
            display_ms: 1000,
        });

        assert!(notifier.send("title", "body").await.is_ok());
    }

    #[test]
    fn with_defaults_uses_notify_send() {
        let notifier = DesktopNotifier::with_defaults();
        assert_eq!(notifier.config.command, "notify-send");
        assert_eq!(notifier.config.display_ms, 15_000);
    }
}
