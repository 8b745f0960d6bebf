//! Run marker port
//!
//! The marker remembers the last calendar day the check completed,
//! enforcing the once-per-day rule across invocations.

use async_trait::async_trait;
use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the last-run marker
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RunMarkerPort: Send + Sync {
    /// The day the check last completed, if known
    async fn last_run(&self) -> Result<Option<NaiveDate>, ApplicationError>;

    /// Record that the check completed on `date`, replacing any earlier marker
    async fn mark_ran(&self, date: NaiveDate) -> Result<(), ApplicationError>;
}
