//! Analytics stage - aggregate processed documents into the corpus report.
//!
//! Flow: wait for process marker → load documents → analyze → write report.

use tracing::{info, warn};

use crate::analysis::CorpusAnalyzer;
use crate::error::Result;
use crate::pipeline::coordinator::await_marker;
use crate::traits::store::{DocumentStore, MarkerStore, ReportStore};
use crate::types::{
    config::AnalysisConfig, document::ProcessedDocument, marker::MarkerKind,
    report::CorpusReport,
};

/// Load every processed document, sorted by record name.
///
/// Records that cannot be read or parsed are logged and left out.
pub async fn load_documents<S>(store: &S) -> Result<Vec<(String, ProcessedDocument)>>
where
    S: DocumentStore + ?Sized,
{
    let names = store.list_documents().await?;
    let mut documents = Vec::with_capacity(names.len());

    for name in names {
        match store.get_document(&name).await {
            Ok(document) => documents.push((name, document)),
            Err(e) => warn!(file = %name, error = %e, "Failed to load processed document"),
        }
    }

    Ok(documents)
}

/// Compute the report for an already-loaded set of documents.
pub fn analyze_documents(
    documents: &[(String, ProcessedDocument)],
    config: &AnalysisConfig,
) -> CorpusReport {
    let mut analyzer = CorpusAnalyzer::new(config.clone());
    for (name, document) in documents {
        analyzer.add_document(name.clone(), &document.text);
    }
    analyzer.finish()
}

/// Wait for the extraction stage, then analyze the corpus and write the report.
pub async fn run_analysis<S>(store: &S, config: &AnalysisConfig) -> Result<CorpusReport>
where
    S: DocumentStore + MarkerStore + ReportStore + ?Sized,
{
    config.validate()?;

    await_marker(store, MarkerKind::Process, config.poll_interval).await;

    let documents = load_documents(store).await?;
    let report = if documents.is_empty() {
        info!("No processed documents found, writing empty report");
        CorpusReport::empty()
    } else {
        info!(documents = documents.len(), "Analyzing corpus");
        analyze_documents(&documents, config)
    };

    store.put_report(&report).await?;

    info!(
        documents = report.documents_processed,
        total_words = report.total_words,
        unique_words = report.unique_words,
        pairs = report.document_similarity.len(),
        "Analysis complete, report written"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::stores::MemoryStore;
    use crate::testing::processed_document;
    use crate::types::marker::StatusMarker;

    fn config() -> AnalysisConfig {
        AnalysisConfig::new().with_poll_interval(Duration::from_millis(10))
    }

    fn marked(store: MemoryStore) -> MemoryStore {
        store.with_marker_json(
            MarkerKind::Process,
            serde_json::to_string(&StatusMarker::complete(0)).unwrap(),
        )
    }

    #[tokio::test]
    async fn report_names_documents_by_record() {
        let store = marked(
            MemoryStore::new()
                .with_document("page_2", &processed_document("page_2.html", "the cat ran"))
                .with_document("page_1", &processed_document("page_1.html", "the cat sat")),
        );

        let report = run_analysis(&store, &config()).await.unwrap();

        assert_eq!(report.documents_processed, 2);
        assert_eq!(report.document_similarity[0].doc1, "page_1.json");
        assert_eq!(report.document_similarity[0].doc2, "page_2.json");
        assert_eq!(report.document_similarity[0].similarity, 0.5);
        assert_eq!(store.report(), Some(report));
    }

    #[tokio::test]
    async fn malformed_documents_are_excluded() {
        let store = marked(
            MemoryStore::new()
                .with_document("good", &processed_document("good.html", "alpha beta"))
                .with_document_json("bad.json", "{\"source_file\": 12"),
        );

        let report = run_analysis(&store, &config()).await.unwrap();

        assert_eq!(report.documents_processed, 1);
        assert_eq!(report.total_words, 2);
    }

    #[tokio::test]
    async fn records_without_provenance_are_analyzed() {
        let store = marked(
            MemoryStore::new()
                .with_document("good", &processed_document("good.html", "alpha beta"))
                .with_document_json("bare.json", r#"{"text": "gamma delta epsilon"}"#),
        );

        let report = run_analysis(&store, &config()).await.unwrap();

        assert_eq!(report.documents_processed, 2);
        assert_eq!(report.total_words, 5);
    }

    #[tokio::test]
    async fn no_documents_writes_empty_report() {
        let store = marked(MemoryStore::new());

        let report = run_analysis(&store, &config()).await.unwrap();

        assert_eq!(report.documents_processed, 0);
        assert!(report.top_100_words.is_empty());
        assert!(store.report().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_process_marker() {
        let store = MemoryStore::new().with_document("a", &processed_document("a.html", "text"));

        let result = tokio::time::timeout(Duration::from_secs(60), run_analysis(&store, &config())).await;

        assert!(result.is_err());
        assert!(store.report().is_none());
    }
}
