//! The rain-check pipeline
//!
//! Gate, fetch, classify, dispatch, mark - in that order. The marker is
//! written only after every channel was attempted, and never when the
//! fetch failed, so a failed evening stays retryable on the next
//! scheduler tick.

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use domain::entities::WeatherReport;
use domain::value_objects::{RainKeywords, Watchlist};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{AlertChannelPort, ForecastPort, RunMarkerPort, WeatherAlert};
use crate::services::run_gate::{GateDecision, GatePolicy};

/// How one channel fared during dispatch
#[derive(Debug)]
pub struct DispatchOutcome {
    channel: &'static str,
    result: Result<(), ApplicationError>,
}

impl DispatchOutcome {
    /// Channel name as reported by the port
    #[must_use]
    pub fn channel(&self) -> &'static str {
        self.channel
    }

    /// Whether the channel accepted the alert
    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.result.is_ok()
    }

    /// The delivery error, when the channel failed
    #[must_use]
    pub fn error(&self) -> Option<&ApplicationError> {
        self.result.as_ref().err()
    }
}

/// A completed check: the report plus every channel's outcome
#[derive(Debug)]
pub struct CheckRun {
    /// The compiled report that was dispatched
    pub report: WeatherReport,
    /// One entry per attached channel, in dispatch order
    pub dispatches: Vec<DispatchOutcome>,
}

impl CheckRun {
    /// Channels that rejected the alert
    pub fn failed_channels(&self) -> impl Iterator<Item = &DispatchOutcome> {
        self.dispatches.iter().filter(|d| !d.is_sent())
    }
}

/// What an invocation did
#[derive(Debug)]
pub enum CheckOutcome {
    /// Gate: invoked before the earliest permitted time
    SkippedTooEarly {
        /// The configured earliest run time
        earliest: NaiveTime,
    },
    /// Gate: the check already completed today
    SkippedAlreadyRan {
        /// The day recorded in the marker
        date: NaiveDate,
    },
    /// The pipeline ran to completion
    Completed(CheckRun),
}

/// Orchestrates one rain check end to end
pub struct CheckService {
    forecasts: Arc<dyn ForecastPort>,
    channels: Vec<Arc<dyn AlertChannelPort>>,
    marker: Arc<dyn RunMarkerPort>,
    watchlist: Watchlist,
    keywords: RainKeywords,
    gate: GatePolicy,
}

impl std::fmt::Debug for CheckService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckService")
            .field("watchlist", &self.watchlist)
            .field("channels", &self.channels.len())
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl CheckService {
    /// Create a service with no channels attached yet
    #[must_use]
    pub fn new(
        forecasts: Arc<dyn ForecastPort>,
        marker: Arc<dyn RunMarkerPort>,
        watchlist: Watchlist,
        keywords: RainKeywords,
        gate: GatePolicy,
    ) -> Self {
        Self {
            forecasts,
            channels: Vec::new(),
            marker,
            watchlist,
            keywords,
            gate,
        }
    }

    /// Attach an alert channel; dispatch follows attachment order
    #[must_use]
    pub fn with_channel(mut self, channel: Arc<dyn AlertChannelPort>) -> Self {
        self.channels.push(channel);
        self
    }

    /// Run the check against the local wall clock
    pub async fn run(&self) -> Result<CheckOutcome, ApplicationError> {
        self.run_at(Local::now().naive_local()).await
    }

    /// Run the check, skipping the gate, against the local wall clock
    ///
    /// Still fetches, dispatches, and writes the marker.
    pub async fn force_run(&self) -> Result<CheckRun, ApplicationError> {
        self.force_run_at(Local::now().naive_local()).await
    }

    /// Run the check as if invoked at `now`
    #[instrument(skip(self), fields(now = %now))]
    pub async fn run_at(&self, now: NaiveDateTime) -> Result<CheckOutcome, ApplicationError> {
        let last_run = match self.marker.last_run().await {
            Ok(last) => last,
            Err(e) => {
                // Fail open: an unreadable marker must not silence the alert
                warn!(error = %e, "Could not read the run marker, assuming no previous run");
                None
            },
        };

        match self.gate.evaluate(now, last_run) {
            GateDecision::TooEarly { earliest } => {
                info!(%earliest, "Skipping: before the earliest run time");
                return Ok(CheckOutcome::SkippedTooEarly { earliest });
            },
            GateDecision::AlreadyRan { date } => {
                info!(%date, "Skipping: already ran today");
                return Ok(CheckOutcome::SkippedAlreadyRan { date });
            },
            GateDecision::Proceed => {},
        }

        self.check_and_notify(now).await.map(CheckOutcome::Completed)
    }

    /// Run the pipeline without consulting the gate, as if invoked at `now`
    #[instrument(skip(self), fields(now = %now))]
    pub async fn force_run_at(&self, now: NaiveDateTime) -> Result<CheckRun, ApplicationError> {
        self.check_and_notify(now).await
    }

    async fn check_and_notify(&self, now: NaiveDateTime) -> Result<CheckRun, ApplicationError> {
        let forecasts = self.forecasts.latest_forecasts().await?;
        debug!(count = forecasts.len(), "Fetched area forecasts");

        let report = WeatherReport::compile(&forecasts, &self.watchlist, &self.keywords, now);
        info!(
            areas = report.entries().len(),
            rainy = report.is_rainy(),
            "Compiled rain report"
        );

        let alert = WeatherAlert::from_report(&report);
        let mut dispatches = Vec::with_capacity(self.channels.len());
        for channel in &self.channels {
            let result = channel.send(&alert).await;
            match &result {
                Ok(()) => info!(channel = channel.name(), "Alert delivered"),
                Err(e) => {
                    warn!(channel = channel.name(), error = %e, "Alert delivery failed");
                },
            }
            dispatches.push(DispatchOutcome {
                channel: channel.name(),
                result,
            });
        }

        self.marker.mark_ran(now.date()).await?;
        debug!(date = %now.date(), "Run marker written");

        Ok(CheckRun { report, dispatches })
    }
}
