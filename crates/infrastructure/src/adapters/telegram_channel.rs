//! Telegram alert channel - implements AlertChannelPort using
//! integration_telegram

use application::error::ApplicationError;
use application::ports::{AlertChannelPort, WeatherAlert};
use async_trait::async_trait;
use integration_telegram::{TelegramClient, TelegramConfig, TelegramError};
use tracing::{debug, instrument};

/// Adapter for the Telegram bot channel
#[derive(Debug)]
pub struct TelegramChannel {
    client: TelegramClient,
}

impl TelegramChannel {
    /// Create a new channel
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the credentials are
    /// missing or the HTTP client fails to initialize.
    pub fn new(config: TelegramConfig) -> Result<Self, ApplicationError> {
        let client = TelegramClient::new(config).map_err(|e| Self::map_error(&e))?;
        Ok(Self { client })
    }

    /// The message Telegram receives: verdict, blank line, full report
    fn outbound_text(alert: &WeatherAlert) -> String {
        format!("{}\n\n{}", alert.title, alert.detail)
    }

    /// Map a Telegram error to an application error
    fn map_error(err: &TelegramError) -> ApplicationError {
        match err {
            TelegramError::Configuration(msg) => ApplicationError::Configuration(msg.clone()),
            TelegramError::Request(_) | TelegramError::Api { .. } => {
                ApplicationError::ExternalService(err.to_string())
            },
            TelegramError::InvalidResponse(_) => ApplicationError::Internal(err.to_string()),
        }
    }
}

#[async_trait]
impl AlertChannelPort for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    #[instrument(skip(self, alert))]
    async fn send(&self, alert: &WeatherAlert) -> Result<(), ApplicationError> {
        let sent = self
            .client
            .send_message(&Self::outbound_text(alert))
            .await
            .map_err(|e| Self::map_error(&e))?;

        debug!(message_id = sent.message_id, "Telegram alert delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert() -> WeatherAlert {
        WeatherAlert {
            title: "🚨 Rain Alert - Bike Safely!".to_string(),
            body: "Tampines: Thundery Showers".to_string(),
            detail: "Weather Check - 2025-10-16 18:05\n\nTampines: Thundery Showers".to_string(),
        }
    }

    #[test]
    fn outbound_text_is_title_blank_line_detail() {
        assert_eq!(
            TelegramChannel::outbound_text(&alert()),
            "🚨 Rain Alert - Bike Safely!\n\n\
             Weather Check - 2025-10-16 18:05\n\nTampines: Thundery Showers"
        );
    }

    #[test]
    fn channel_reports_its_name() {
        let channel =
            TelegramChannel::new(TelegramConfig::new("123456:test-token", "987654")).unwrap();
        assert_eq!(channel.name(), "telegram");
    }

    #[test]
    fn missing_credentials_are_a_configuration_error() {
        let result = TelegramChannel::new(TelegramConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn api_rejection_maps_to_external_service() {
        let err = TelegramChannel::map_error(&TelegramError::Api {
            code: 400,
            description: "chat not found".to_string(),
        });
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn undecodable_response_maps_to_internal() {
        let err =
            TelegramChannel::map_error(&TelegramError::InvalidResponse("not json".to_string()));
        assert!(matches!(err, ApplicationError::Internal(_)));
    }
}
