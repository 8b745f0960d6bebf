//! Gate configuration: the earliest permitted run time

use application::services::GatePolicy;
use application::ApplicationError;
use serde::{Deserialize, Serialize};

/// Run-time window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Earliest wall-clock time a run may proceed, `HH:MM` (default: 17:30)
    #[serde(default = "default_earliest")]
    pub earliest: String,
}

fn default_earliest() -> String {
    "17:30".to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            earliest: default_earliest(),
        }
    }
}

impl GateConfig {
    /// Build the gate policy, validating the configured time
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if `earliest` is not a
    /// valid `HH:MM` time.
    pub fn policy(&self) -> Result<GatePolicy, ApplicationError> {
        GatePolicy::parse(&self.earliest)
    }
}
