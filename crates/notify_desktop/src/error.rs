//! Desktop notification errors

use thiserror::Error;

/// Errors that can occur while showing a desktop notification
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification command is not installed
    #[error("Notification command not available: {0}")]
    NotAvailable(String),

    /// The notification command could not be spawned
    #[error("Failed to run notification command: {0}")]
    SpawnFailed(String),

    /// The notification command ran but reported failure
    #[error("Notification command exited with {status}: {stderr}")]
    CommandFailed {
        /// Exit status as reported by the process
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },
}
