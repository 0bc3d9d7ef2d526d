//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::RwLock;

use crate::error::{CorpusError, Result};
use crate::traits::store::{DocumentStore, MarkerStore, RawSource, ReportStore};
use crate::types::{
    document::{ProcessedDocument, RawDocument},
    marker::{FetchManifest, MarkerKind, StatusMarker},
    report::CorpusReport,
};

/// In-memory store for raw inputs, documents, markers, and the report.
///
/// Documents are kept as serialized JSON so that malformed records can be
/// planted and loading behaves like the filesystem store.
pub struct MemoryStore {
    raw: RwLock<BTreeMap<String, Vec<u8>>>,
    unreadable: RwLock<HashSet<String>>,
    documents: RwLock<BTreeMap<String, String>>,
    markers: RwLock<HashMap<MarkerKind, String>>,
    report: RwLock<Option<CorpusReport>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            raw: RwLock::new(BTreeMap::new()),
            unreadable: RwLock::new(HashSet::new()),
            documents: RwLock::new(BTreeMap::new()),
            markers: RwLock::new(HashMap::new()),
            report: RwLock::new(None),
        }
    }

    /// Add a raw HTML input.
    pub fn with_raw(self, name: impl Into<String>, html: impl Into<Vec<u8>>) -> Self {
        self.raw.write().unwrap().insert(name.into(), html.into());
        self
    }

    /// Add a raw input that is listed but fails to read.
    pub fn with_unreadable_raw(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.raw.write().unwrap().insert(name.clone(), Vec::new());
        self.unreadable.write().unwrap().insert(name);
        self
    }

    /// Add a processed document record directly.
    pub fn with_document(self, stem: &str, document: &ProcessedDocument) -> Self {
        let json = serde_json::to_string(document).expect("document serializes");
        self.documents
            .write()
            .unwrap()
            .insert(format!("{stem}.json"), json);
        self
    }

    /// Add a document record with arbitrary (possibly invalid) content.
    pub fn with_document_json(self, name: impl Into<String>, json: impl Into<String>) -> Self {
        self.documents.write().unwrap().insert(name.into(), json.into());
        self
    }

    /// Place a marker with arbitrary content.
    pub fn with_marker_json(self, kind: MarkerKind, json: impl Into<String>) -> Self {
        self.markers.write().unwrap().insert(kind, json.into());
        self
    }

    /// Get the number of stored documents.
    pub fn document_count(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    /// Read back a marker written by a stage.
    pub fn marker(&self, kind: MarkerKind) -> Option<StatusMarker> {
        self.markers
            .read()
            .unwrap()
            .get(&kind)
            .and_then(|json| serde_json::from_str(json).ok())
    }

    /// Read back the report, if one was written.
    pub fn report(&self) -> Option<CorpusReport> {
        self.report.read().unwrap().clone()
    }
}

fn ends_with_extension(name: &str, extension: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == extension)
}

#[async_trait]
impl RawSource for MemoryStore {
    async fn list_raw(&self) -> Result<Vec<String>> {
        Ok(self
            .raw
            .read()
            .unwrap()
            .keys()
            .filter(|name| ends_with_extension(name, "html"))
            .cloned()
            .collect())
    }

    async fn read_raw(&self, name: &str) -> Result<RawDocument> {
        if self.unreadable.read().unwrap().contains(name) {
            return Err(CorpusError::io(
                name,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        self.raw
            .read()
            .unwrap()
            .get(name)
            .map(|bytes| RawDocument::new(name, bytes.clone()))
            .ok_or_else(|| CorpusError::not_found(name))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn put_document(&self, stem: &str, document: &ProcessedDocument) -> Result<()> {
        let json = serde_json::to_string(document)?;
        self.documents
            .write()
            .unwrap()
            .insert(format!("{stem}.json"), json);
        Ok(())
    }

    async fn list_documents(&self) -> Result<Vec<String>> {
        Ok(self
            .documents
            .read()
            .unwrap()
            .keys()
            .filter(|name| ends_with_extension(name, "json"))
            .cloned()
            .collect())
    }

    async fn get_document(&self, name: &str) -> Result<ProcessedDocument> {
        let json = self
            .documents
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| CorpusError::not_found(name))?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[async_trait]
impl MarkerStore for MemoryStore {
    async fn put_marker(&self, kind: MarkerKind, marker: &StatusMarker) -> Result<()> {
        let json = serde_json::to_string(marker)?;
        self.markers.write().unwrap().insert(kind, json);
        Ok(())
    }

    async fn marker_exists(&self, kind: MarkerKind) -> Result<bool> {
        Ok(self.markers.read().unwrap().contains_key(&kind))
    }

    async fn fetch_manifest(&self) -> Option<FetchManifest> {
        self.markers
            .read()
            .unwrap()
            .get(&MarkerKind::Fetch)
            .and_then(|json| serde_json::from_str(json).ok())
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn put_report(&self, report: &CorpusReport) -> Result<()> {
        *self.report.write().unwrap() = Some(report.clone());
        Ok(())
    }

    async fn get_report(&self) -> Result<Option<CorpusReport>> {
        Ok(self.report())
    }
}
