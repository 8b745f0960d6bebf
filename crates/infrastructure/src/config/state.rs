//! State configuration: where the run marker lives

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Marker file name used when no explicit path is configured
const DEFAULT_MARKER_FILE: &str = ".weather_last_run.txt";

/// Run-marker persistence configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateConfig {
    /// Explicit marker file path; defaults to `~/.weather_last_run.txt`
    #[serde(default)]
    pub marker_path: Option<PathBuf>,
}

impl StateConfig {
    /// Resolve the marker path, falling back to the home directory
    ///
    /// Without a home directory (containers, stripped-down service users)
    /// the marker lands in the current directory, which still satisfies
    /// the once-a-day rule as long as the tool runs from one place.
    #[must_use]
    pub fn resolve_marker_path(&self) -> PathBuf {
        self.marker_path.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_MARKER_FILE)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StateConfig {
            marker_path: Some(PathBuf::from("/tmp/raincheck-marker.txt")),
        };
        assert_eq!(
            config.resolve_marker_path(),
            PathBuf::from("/tmp/raincheck-marker.txt")
        );
    }

    #[test]
    fn default_path_is_the_hidden_home_file() {
        let path = StateConfig::default().resolve_marker_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(".weather_last_run.txt")
        );
    }
}
