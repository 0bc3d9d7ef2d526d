//! Storage traits for the shared store.
//!
//! The store is split into focused traits, one per partition:
//! - `RawSource`: fetched HTML files (read-only for the pipeline)
//! - `DocumentStore`: processed document records
//! - `MarkerStore`: stage completion markers
//! - `ReportStore`: the final corpus report
//! - `PipelineStore`: composite trait combining all four
//!
//! Implementations must never expose a partially written entry: a record is
//! either absent or complete.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    document::{ProcessedDocument, RawDocument},
    marker::{FetchManifest, MarkerKind, StatusMarker},
    report::CorpusReport,
};

/// Fetched HTML inputs.
#[async_trait]
pub trait RawSource: Send + Sync {
    /// Names of all `.html` inputs, sorted.
    async fn list_raw(&self) -> Result<Vec<String>>;

    /// Read one input by name.
    async fn read_raw(&self, name: &str) -> Result<RawDocument>;
}

/// Processed document records.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a document under `<stem>.json`.
    async fn put_document(&self, stem: &str, document: &ProcessedDocument) -> Result<()>;

    /// Names of all stored documents (`<stem>.json`), sorted.
    async fn list_documents(&self) -> Result<Vec<String>>;

    /// Load a document by name. Fails if the record does not parse.
    async fn get_document(&self, name: &str) -> Result<ProcessedDocument>;
}

/// Stage completion markers.
#[async_trait]
pub trait MarkerStore: Send + Sync {
    /// Write a marker. Rewriting is last-writer-wins.
    async fn put_marker(&self, kind: MarkerKind, marker: &StatusMarker) -> Result<()>;

    /// Whether the marker exists. Content is not inspected.
    async fn marker_exists(&self, kind: MarkerKind) -> Result<bool>;

    /// Content of the upstream fetch marker, if present and parseable.
    async fn fetch_manifest(&self) -> Option<FetchManifest>;
}

/// The terminal corpus report.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn put_report(&self, report: &CorpusReport) -> Result<()>;

    async fn get_report(&self) -> Result<Option<CorpusReport>>;
}

/// Composite storage trait used by the pipeline stages.
pub trait PipelineStore: RawSource + DocumentStore + MarkerStore + ReportStore {}

// Blanket implementation: anything implementing all four traits is a PipelineStore
impl<T> PipelineStore for T where T: RawSource + DocumentStore + MarkerStore + ReportStore {}
