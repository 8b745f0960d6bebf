//! The once-per-evening run gate
//!
//! Pure time policy: no run before the configured earliest time, and no
//! second run on a day the marker already names. The time check is
//! evaluated first, so an early invocation is reported as early even when
//! today's marker is also present.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ApplicationError;

/// Outcome of a gate evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The check may run now
    Proceed,
    /// Before the earliest permitted time of day
    TooEarly {
        /// The configured earliest run time
        earliest: NaiveTime,
    },
    /// The marker already names today
    AlreadyRan {
        /// The day recorded in the marker
        date: NaiveDate,
    },
}

/// When a check is allowed to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePolicy {
    earliest: NaiveTime,
}

impl GatePolicy {
    /// Policy with an explicit earliest time of day
    #[must_use]
    pub const fn new(earliest: NaiveTime) -> Self {
        Self { earliest }
    }

    /// Parse an `HH:MM` clock string such as `"17:30"`
    pub fn parse(earliest: &str) -> Result<Self, ApplicationError> {
        let parsed = NaiveTime::parse_from_str(earliest, "%H:%M").map_err(|e| {
            ApplicationError::Configuration(format!(
                "invalid earliest run time {earliest:?}: {e}"
            ))
        })?;
        Ok(Self::new(parsed))
    }

    /// The earliest permitted wall-clock time
    #[must_use]
    pub const fn earliest(&self) -> NaiveTime {
        self.earliest
    }

    /// Decide whether a check may run at `now` given the recorded last run
    ///
    /// A marker from any day other than `now`'s date never blocks; only an
    /// exact match with today does.
    #[must_use]
    pub fn evaluate(&self, now: NaiveDateTime, last_run: Option<NaiveDate>) -> GateDecision {
        if now.time() < self.earliest {
            return GateDecision::TooEarly {
                earliest: self.earliest,
            };
        }
        if last_run == Some(now.date()) {
            return GateDecision::AlreadyRan { date: now.date() };
        }
        GateDecision::Proceed
    }

    /// Boolean convenience over [`Self::evaluate`]
    #[must_use]
    pub fn should_run(&self, now: NaiveDateTime, last_run: Option<NaiveDate>) -> bool {
        matches!(self.evaluate(now, last_run), GateDecision::Proceed)
    }
}

impl Default for GatePolicy {
    /// 17:30, the end of the commuter's workday
    fn default() -> Self {
        Self {
            earliest: NaiveTime::from_hms_opt(17, 30, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}
