//! Directory-tree store shared by the stage processes.
//!
//! Layout under the root:
//!
//! ```text
//! raw/*.html                    fetched inputs
//! processed/<stem>.json         one record per processed input
//! status/fetch_complete.json    upstream marker
//! status/process_complete.json  extraction marker
//! analysis/final_report.json    corpus report
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{CorpusError, Result};
use crate::traits::store::{DocumentStore, MarkerStore, RawSource, ReportStore};
use crate::types::{
    document::{ProcessedDocument, RawDocument},
    marker::{FetchManifest, MarkerKind, StatusMarker},
    report::CorpusReport,
};

const RAW_DIR: &str = "raw";
const PROCESSED_DIR: &str = "processed";
const STATUS_DIR: &str = "status";
const ANALYSIS_DIR: &str = "analysis";
const REPORT_FILE: &str = "final_report.json";

/// Store backed by a rooted directory tree.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`. Nothing is touched on disk until
    /// [`FsStore::ensure_layout`] or a write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create every partition directory that does not exist yet.
    pub async fn ensure_layout(&self) -> Result<()> {
        for dir in [RAW_DIR, PROCESSED_DIR, STATUS_DIR, ANALYSIS_DIR] {
            let path = self.root.join(dir);
            tokio::fs::create_dir_all(&path)
                .await
                .map_err(|e| CorpusError::io(&path, e))?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join(RAW_DIR)
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.root.join(PROCESSED_DIR)
    }

    pub fn status_dir(&self) -> PathBuf {
        self.root.join(STATUS_DIR)
    }

    pub fn analysis_dir(&self) -> PathBuf {
        self.root.join(ANALYSIS_DIR)
    }

    /// Path of a stage marker.
    pub fn marker_path(&self, kind: MarkerKind) -> PathBuf {
        self.status_dir().join(kind.file_name())
    }

    /// Path of the corpus report.
    pub fn report_path(&self) -> PathBuf {
        self.analysis_dir().join(REPORT_FILE)
    }

    /// Sorted names of regular files in `dir` with the given extension.
    /// Hidden files (including in-flight temporaries) are skipped.
    async fn list_with_extension(&self, dir: &Path, extension: &str) -> Result<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CorpusError::io(dir, e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CorpusError::io(dir, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| CorpusError::io(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let matches = Path::new(&name)
                .extension()
                .is_some_and(|ext| ext == extension);
            if matches {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CorpusError::io(path, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Write `value` as pretty JSON so that readers see either no file or the
/// whole file: the bytes go to a hidden sibling, are synced, then renamed.
async fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;

    let dir = path
        .parent()
        .ok_or_else(|| CorpusError::not_found(path.display().to_string()))?;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| CorpusError::io(dir, e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = dir.join(format!(".{file_name}.tmp"));

    let mut file = tokio::fs::File::create(&tmp_path)
        .await
        .map_err(|e| CorpusError::io(&tmp_path, e))?;
    file.write_all(&bytes)
        .await
        .map_err(|e| CorpusError::io(&tmp_path, e))?;
    file.sync_all()
        .await
        .map_err(|e| CorpusError::io(&tmp_path, e))?;
    drop(file);

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| CorpusError::io(path, e))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote JSON record");
    Ok(())
}

#[async_trait]
impl RawSource for FsStore {
    async fn list_raw(&self) -> Result<Vec<String>> {
        self.list_with_extension(&self.raw_dir(), "html").await
    }

    async fn read_raw(&self, name: &str) -> Result<RawDocument> {
        let path = self.raw_dir().join(name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| CorpusError::io(&path, e))?;
        Ok(RawDocument::new(name, bytes))
    }
}

#[async_trait]
impl DocumentStore for FsStore {
    async fn put_document(&self, stem: &str, document: &ProcessedDocument) -> Result<()> {
        let path = self.processed_dir().join(format!("{stem}.json"));
        write_json_atomic(&path, document).await
    }

    async fn list_documents(&self) -> Result<Vec<String>> {
        self.list_with_extension(&self.processed_dir(), "json").await
    }

    async fn get_document(&self, name: &str) -> Result<ProcessedDocument> {
        Self::read_json(&self.processed_dir().join(name)).await
    }
}

#[async_trait]
impl MarkerStore for FsStore {
    async fn put_marker(&self, kind: MarkerKind, marker: &StatusMarker) -> Result<()> {
        write_json_atomic(&self.marker_path(kind), marker).await
    }

    async fn marker_exists(&self, kind: MarkerKind) -> Result<bool> {
        let path = self.marker_path(kind);
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| CorpusError::io(&path, e))
    }

    async fn fetch_manifest(&self) -> Option<FetchManifest> {
        let path = self.marker_path(MarkerKind::Fetch);
        match Self::read_json(&path).await {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Fetch marker content unreadable");
                None
            }
        }
    }
}

#[async_trait]
impl ReportStore for FsStore {
    async fn put_report(&self, report: &CorpusReport) -> Result<()> {
        write_json_atomic(&self.report_path(), report).await
    }

    async fn get_report(&self) -> Result<Option<CorpusReport>> {
        let path = self.report_path();
        if !tokio::fs::try_exists(&path)
            .await
            .map_err(|e| CorpusError::io(&path, e))?
        {
            return Ok(None);
        }
        Self::read_json(&path).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::testing::processed_document;

    #[tokio::test]
    async fn ensure_layout_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());

        store.ensure_layout().await.unwrap();
        store.ensure_layout().await.unwrap();

        assert!(store.raw_dir().is_dir());
        assert!(store.processed_dir().is_dir());
        assert!(store.status_dir().is_dir());
        assert!(store.analysis_dir().is_dir());
    }

    #[tokio::test]
    async fn list_raw_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        store.ensure_layout().await.unwrap();

        for name in ["page_2.html", "page_1.html", "notes.txt", ".hidden.html"] {
            std::fs::write(store.raw_dir().join(name), "<p>x</p>").unwrap();
        }
        std::fs::create_dir(store.raw_dir().join("nested.html")).unwrap();

        let names = store.list_raw().await.unwrap();
        assert_eq!(names, vec!["page_1.html", "page_2.html"]);
    }

    #[tokio::test]
    async fn missing_partition_lists_empty() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path().join("absent"));

        assert!(store.list_raw().await.unwrap().is_empty());
        assert!(store.list_documents().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn document_write_leaves_no_temporaries() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        store.ensure_layout().await.unwrap();

        let doc = processed_document("page_1.html", "hello world");
        store.put_document("page_1", &doc).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(store.processed_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["page_1.json"]);

        let loaded = store.get_document("page_1.json").await.unwrap();
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn malformed_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        store.ensure_layout().await.unwrap();
        std::fs::write(store.processed_dir().join("broken.json"), "{not json").unwrap();

        let result = store.get_document("broken.json").await;
        assert!(matches!(result, Err(CorpusError::Json(_))));
    }

    #[tokio::test]
    async fn marker_existence_and_manifest() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        store.ensure_layout().await.unwrap();

        assert!(!store.marker_exists(MarkerKind::Fetch).await.unwrap());
        assert!(store.fetch_manifest().await.is_none());

        std::fs::write(
            store.marker_path(MarkerKind::Fetch),
            r#"{"urls_processed": 3, "successful": 2, "failed": 1, "results": []}"#,
        )
        .unwrap();

        assert!(store.marker_exists(MarkerKind::Fetch).await.unwrap());
        let manifest = store.fetch_manifest().await.unwrap();
        assert_eq!(manifest.successful, Some(2));
    }

    #[tokio::test]
    async fn unparseable_fetch_marker_still_exists() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        store.ensure_layout().await.unwrap();
        std::fs::write(store.marker_path(MarkerKind::Fetch), "done").unwrap();

        assert!(store.marker_exists(MarkerKind::Fetch).await.unwrap());
        assert!(store.fetch_manifest().await.is_none());
    }

    #[tokio::test]
    async fn report_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());

        assert!(store.get_report().await.unwrap().is_none());

        let report = CorpusReport::empty();
        store.put_report(&report).await.unwrap();

        assert_eq!(store.get_report().await.unwrap(), Some(report));
        assert!(store.report_path().is_file());
    }
}
