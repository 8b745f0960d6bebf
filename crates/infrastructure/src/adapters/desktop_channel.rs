//! Desktop alert channel - implements AlertChannelPort using notify_desktop

use application::error::ApplicationError;
use application::ports::{AlertChannelPort, WeatherAlert};
use async_trait::async_trait;
use notify_desktop::{DesktopConfig, DesktopNotifier, NotifyError};
use tracing::instrument;

/// Adapter for the desktop popup channel
#[derive(Debug)]
pub struct DesktopChannel {
    notifier: DesktopNotifier,
}

impl DesktopChannel {
    /// Create a new channel
    #[must_use]
    pub const fn new(config: DesktopConfig) -> Self {
        Self {
            notifier: DesktopNotifier::new(config),
        }
    }

    /// Map a notifier error to an application error
    fn map_error(err: &NotifyError) -> ApplicationError {
        ApplicationError::ExternalService(err.to_string())
    }
}

#[async_trait]
impl AlertChannelPort for DesktopChannel {
    fn name(&self) -> &'static str {
        "desktop"
    }

    /// Show the popup: the verdict as title, the area lines as body
    ///
    /// The timestamp header stays out of the popup; a notification that
    /// flashes for fifteen seconds has no room for it.
    #[instrument(skip(self, alert))]
    async fn send(&self, alert: &WeatherAlert) -> Result<(), ApplicationError> {
        self.notifier
            .send(&alert.title, &alert.body)
            .await
            .map_err(|e| Self::map_error(&e))
    }
}
