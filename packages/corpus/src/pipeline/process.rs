//! Extraction stage - turn raw HTML files into processed documents.
//!
//! Flow: wait for fetch marker → process each raw file → write process marker.
//! A file that fails is logged and skipped; the marker counts only the files
//! that were written successfully, and is written strictly after them.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::Result;
use crate::pipeline::coordinator::await_marker;
use crate::pipeline::html::{compute_statistics, strip_html};
use crate::traits::store::{DocumentStore, MarkerStore, RawSource};
use crate::types::{
    config::ProcessConfig,
    document::{ProcessedDocument, RawDocument},
    marker::{MarkerKind, StatusMarker},
};

/// A raw file that could not be processed.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedFile {
    pub file_name: String,
    pub reason: String,
}

/// Outcome of processing a single raw file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// Written to the store under `output`
    Processed { file_name: String, output: String },
    Failed(FailedFile),
}

/// Result of an extraction run.
#[derive(Debug, Clone, Default)]
pub struct ProcessSummary {
    /// Number of raw files found
    pub attempted: usize,

    /// Number of documents written (the count recorded in the marker)
    pub processed: usize,

    /// Files that were skipped
    pub failed: Vec<FailedFile>,
}

impl ProcessSummary {
    fn from_outcomes(outcomes: Vec<FileOutcome>) -> Self {
        let mut summary = Self {
            attempted: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome {
                FileOutcome::Processed { .. } => summary.processed += 1,
                FileOutcome::Failed(failed) => summary.failed.push(failed),
            }
        }
        summary
    }

    /// Check if every raw file was processed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert one raw document into its processed form.
pub fn process_document(raw: &RawDocument) -> ProcessedDocument {
    let html = raw.html();
    let stripped = strip_html(&html);
    let statistics = compute_statistics(&stripped.text, &html);

    ProcessedDocument {
        source_file: raw.file_name.clone(),
        text: stripped.text,
        statistics,
        links: stripped.links,
        images: stripped.images,
        processed_at: Some(Utc::now()),
    }
}

async fn process_file<S>(store: &S, name: &str) -> FileOutcome
where
    S: RawSource + DocumentStore + ?Sized,
{
    let result: Result<String> = async {
        let raw = store.read_raw(name).await?;
        let document = process_document(&raw);
        let stem = raw.stem();
        store.put_document(stem, &document).await?;
        Ok(format!("{stem}.json"))
    }
    .await;

    match result {
        Ok(output) => {
            info!(file = %name, output = %output, "Processed file");
            FileOutcome::Processed {
                file_name: name.to_string(),
                output,
            }
        }
        Err(e) => {
            warn!(file = %name, error = %e, "Failed to process file");
            FileOutcome::Failed(FailedFile {
                file_name: name.to_string(),
                reason: e.to_string(),
            })
        }
    }
}

/// Process every raw file in the store and write the process marker.
///
/// Per-file failures never abort the batch. Errors are only returned when
/// the raw partition cannot be listed or the marker cannot be written.
pub async fn run_process<S>(store: &S, config: &ProcessConfig) -> Result<ProcessSummary>
where
    S: RawSource + DocumentStore + MarkerStore + ?Sized,
{
    config.validate()?;

    if config.wait_for_fetch {
        await_marker(store, MarkerKind::Fetch, config.poll_interval).await;
        if let Some(manifest) = store.fetch_manifest().await {
            info!(
                urls = ?manifest.urls_processed,
                successful = ?manifest.successful,
                failed = ?manifest.failed,
                "Fetch manifest"
            );
        }
    }

    let names = store.list_raw().await?;
    if names.is_empty() {
        info!("No HTML files found, writing empty process marker");
    }

    let mut outcomes = Vec::with_capacity(names.len());
    for name in &names {
        outcomes.push(process_file(store, name).await);
    }

    let summary = ProcessSummary::from_outcomes(outcomes);

    store
        .put_marker(MarkerKind::Process, &StatusMarker::complete(summary.processed))
        .await?;

    info!(
        attempted = summary.attempted,
        processed = summary.processed,
        failed = summary.failed.len(),
        "Processing complete, marker written"
    );

    Ok(summary)
}
