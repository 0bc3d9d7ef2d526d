//! Completion markers written to the status partition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which stage a marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Written by the external fetcher once every raw file is on disk
    Fetch,

    /// Written by the extraction stage once every processed file is on disk
    Process,
}

impl MarkerKind {
    /// File name of the marker inside the status partition.
    pub fn file_name(&self) -> &'static str {
        match self {
            MarkerKind::Fetch => "fetch_complete.json",
            MarkerKind::Process => "process_complete.json",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Signals that everything a stage will produce in this run is durable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMarker {
    pub status: String,
    pub processed_files: usize,
    pub processed_at: DateTime<Utc>,
}

impl StatusMarker {
    /// A `complete` marker stamped with the current time.
    pub fn complete(processed_files: usize) -> Self {
        Self {
            status: "complete".to_string(),
            processed_files,
            processed_at: Utc::now(),
        }
    }
}

/// Content of the upstream fetch marker.
///
/// Only used for logging. Every field is optional so that any JSON object
/// written by the fetcher parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchManifest {
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub urls_processed: Option<usize>,

    #[serde(default)]
    pub successful: Option<usize>,

    #[serde(default)]
    pub failed: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_schema() {
        let marker = StatusMarker::complete(3);
        let value = serde_json::to_value(&marker).unwrap();

        assert_eq!(value["status"], "complete");
        assert_eq!(value["processed_files"], 3);
        assert!(value["processed_at"].is_string());
    }

    #[test]
    fn fetch_manifest_parses_fetcher_output() {
        let json = r#"{
            "timestamp": "2025-09-03T05:12:34.567890+00:00",
            "urls_processed": 2,
            "successful": 1,
            "failed": 1,
            "results": [
                {"url": "http://a.test", "file": "page_1.html", "size": 120, "status": "success"},
                {"url": "http://b.test", "file": null, "error": "timed out", "status": "failed"}
            ]
        }"#;
        let manifest: FetchManifest = serde_json::from_str(json).unwrap();

        assert_eq!(manifest.urls_processed, Some(2));
        assert_eq!(manifest.successful, Some(1));
        assert_eq!(manifest.failed, Some(1));
    }

    #[test]
    fn fetch_manifest_accepts_empty_object() {
        let manifest: FetchManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest.urls_processed, None);
        assert_eq!(manifest.timestamp, None);
    }
}
