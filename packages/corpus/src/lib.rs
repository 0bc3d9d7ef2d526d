//! Marker-Coordinated Corpus Pipeline
//!
//! Two independently invoked stages share a directory tree (the store):
//!
//! 1. **Extraction** reads fetched HTML from `raw/`, strips markup, and writes
//!    one processed document per file to `processed/`, then the
//!    `status/process_complete.json` marker.
//! 2. **Analytics** waits for that marker, loads every processed document,
//!    and writes `analysis/final_report.json` with word frequencies, n-grams,
//!    pairwise Jaccard similarity, and readability.
//!
//! A marker is only ever written after everything it counts is durable, so a
//! stage that has seen the marker can read all upstream output.
//!
//! # Usage
//!
//! ```rust,ignore
//! use corpus::{FsStore, ProcessConfig, AnalysisConfig, run_process, run_analysis};
//!
//! let store = FsStore::new("/shared");
//! store.ensure_layout().await?;
//!
//! let summary = run_process(&store, &ProcessConfig::default()).await?;
//! let report = run_analysis(&store, &AnalysisConfig::default()).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Store trait abstractions
//! - [`stores`] - Filesystem and in-memory stores
//! - [`pipeline`] - Marker wait, extraction stage, analytics stage
//! - [`analysis`] - Corpus statistics
//! - [`types`] - Documents, markers, report, configuration
//! - [`testing`] - Fixture builders

pub mod analysis;
pub mod error;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CorpusError, Result};
pub use traits::store::{DocumentStore, MarkerStore, PipelineStore, RawSource, ReportStore};
pub use types::{
    config::{AnalysisConfig, ProcessConfig, DEFAULT_POLL_INTERVAL},
    document::{DocumentStatistics, ProcessedDocument, RawDocument},
    marker::{FetchManifest, MarkerKind, StatusMarker},
    report::{
        BigramCount, CorpusReport, DocumentSimilarity, Readability, TrigramCount, WordFrequency,
    },
};

// Re-export pipeline entry points
pub use pipeline::{
    analyze_documents, await_marker, load_documents, process_document, run_analysis,
    run_process, FailedFile, FileOutcome, ProcessSummary,
};

pub use analysis::CorpusAnalyzer;
pub use stores::{FsStore, MemoryStore};
