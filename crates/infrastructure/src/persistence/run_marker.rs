//! File-backed run marker
//!
//! One file, one line, one date: the last day the check completed. The
//! write is a plain overwrite, not an atomic rename; a crash between read
//! and write leaves the old marker in place, which fails open toward
//! re-running rather than toward skipping.

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::RunMarkerPort;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument, warn};

/// Date format stored in the marker file
const MARKER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Run marker persisted to a single file
#[derive(Debug, Clone)]
pub struct FileRunMarker {
    path: PathBuf,
}

impl FileRunMarker {
    /// Create a marker backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The marker's file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RunMarkerPort for FileRunMarker {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn last_run(&self) -> Result<Option<NaiveDate>, ApplicationError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No run marker yet");
                return Ok(None);
            },
            Err(e) => {
                return Err(ApplicationError::Internal(format!(
                    "Failed to read run marker: {e}"
                )));
            },
        };

        let trimmed = content.trim();
        match NaiveDate::parse_from_str(trimmed, MARKER_DATE_FORMAT) {
            Ok(date) => Ok(Some(date)),
            Err(e) => {
                // Fail open: a corrupt marker is overwritten on the next
                // completed run
                warn!(content = trimmed, error = %e, "Run marker unreadable, treating as never ran");
                Ok(None)
            },
        }
    }

    #[instrument(skip(self), fields(path = %self.path.display(), date = %date))]
    async fn mark_ran(&self, date: NaiveDate) -> Result<(), ApplicationError> {
        tokio::fs::write(&self.path, date.format(MARKER_DATE_FORMAT).to_string())
            .await
            .map_err(|e| {
                ApplicationError::Internal(format!("Failed to write run marker: {e}"))
            })?;

        debug!("Run marker written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_in(dir: &tempfile::TempDir) -> FileRunMarker {
        FileRunMarker::new(dir.path().join(".weather_last_run.txt"))
    }

    fn oct_16() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 16).unwrap()
    }

    #[tokio::test]
    async fn missing_file_means_never_ran() {
        let dir = tempfile::tempdir().unwrap();
        let marker = marker_in(&dir);

        assert_eq!(marker.last_run().await.unwrap(), None);
    }

    #[tokio::test]
    async fn mark_then_read_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let marker = marker_in(&dir);

        marker.mark_ran(oct_16()).await.unwrap();
        assert_eq!(marker.last_run().await.unwrap(), Some(oct_16()));
    }

    #[tokio::test]
    async fn file_content_is_the_bare_date() {
        let dir = tempfile::tempdir().unwrap();
        let marker = marker_in(&dir);

        marker.mark_ran(oct_16()).await.unwrap();
        let content = tokio::fs::read_to_string(marker.path()).await.unwrap();
        assert_eq!(content, "2025-10-16");
    }

    #[tokio::test]
    async fn marking_again_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let marker = marker_in(&dir);

        marker.mark_ran(oct_16()).await.unwrap();
        let next_day = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        marker.mark_ran(next_day).await.unwrap();

        assert_eq!(marker.last_run().await.unwrap(), Some(next_day));
        let content = tokio::fs::read_to_string(marker.path()).await.unwrap();
        assert_eq!(content, "2025-10-17");
    }

    #[tokio::test]
    async fn garbage_content_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let marker = marker_in(&dir);

        tokio::fs::write(marker.path(), "yesterday, probably")
            .await
            .unwrap();
        assert_eq!(marker.last_run().await.unwrap(), None);
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let marker = marker_in(&dir);

        tokio::fs::write(marker.path(), "2025-10-16\n").await.unwrap();
        assert_eq!(marker.last_run().await.unwrap(), Some(oct_16()));
    }

    #[tokio::test]
    async fn write_into_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let marker = FileRunMarker::new(dir.path().join("no-such-dir").join("marker.txt"));

        let result = marker.mark_ran(oct_16()).await;
        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }
}
