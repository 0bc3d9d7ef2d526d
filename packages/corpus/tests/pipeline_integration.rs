//! End-to-end runs of both stages over an on-disk store.

use std::time::Duration;

use corpus::testing::html_page;
use corpus::{
    run_analysis, run_process, AnalysisConfig, DocumentStore, FsStore, MarkerKind, ProcessConfig,
    ReportStore,
};
use tempfile::TempDir;

const POLL: Duration = Duration::from_millis(20);

async fn store_with_pages(pages: &[(&str, String)]) -> (TempDir, FsStore) {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path());
    store.ensure_layout().await.unwrap();

    for (name, html) in pages {
        std::fs::write(store.raw_dir().join(name), html).unwrap();
    }

    (dir, store)
}

fn write_fetch_marker(store: &FsStore) {
    std::fs::write(
        store.marker_path(MarkerKind::Fetch),
        r#"{"urls_processed": 2, "successful": 2, "failed": 0, "results": []}"#,
    )
    .unwrap();
}

fn read_json(path: std::path::PathBuf) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn stages_run_in_order_through_markers() {
    let (_dir, store) = store_with_pages(&[
        ("page_1.html", html_page("Cats", &["The cat sat."])),
        ("page_2.html", html_page("Cats", &["The cat ran."])),
    ])
    .await;

    // Analytics starts first and must wait for extraction to finish.
    let analyzer = {
        let store = store.clone();
        tokio::spawn(async move {
            run_analysis(&store, &AnalysisConfig::new().with_poll_interval(POLL)).await
        })
    };
    let processor = {
        let store = store.clone();
        tokio::spawn(async move {
            run_process(&store, &ProcessConfig::new().with_poll_interval(POLL)).await
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!store.marker_path(MarkerKind::Process).exists());
    assert!(!store.report_path().exists());

    write_fetch_marker(&store);

    let summary = tokio::time::timeout(Duration::from_secs(10), processor)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    let report = tokio::time::timeout(Duration::from_secs(10), analyzer)
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    assert_eq!(summary.processed, 2);

    let marker = read_json(store.marker_path(MarkerKind::Process));
    assert_eq!(marker["status"], "complete");
    assert_eq!(marker["processed_files"], 2);

    let doc = read_json(store.processed_dir().join("page_1.json"));
    assert_eq!(doc["source_file"], "page_1.html");
    assert_eq!(doc["text"], "Cats The cat sat.");
    assert_eq!(doc["statistics"]["word_count"], 4);

    assert_eq!(report.documents_processed, 2);
    assert_eq!(report.total_words, 8);
    assert_eq!(report.unique_words, 5);
    assert_eq!(report.document_similarity.len(), 1);
    // {cats, the, cat, sat} vs {cats, the, cat, ran}
    assert_eq!(report.document_similarity[0].similarity, 0.6);

    let on_disk = store.get_report().await.unwrap().unwrap();
    assert_eq!(on_disk, report);
}

#[tokio::test]
async fn empty_raw_partition_flows_through_to_empty_report() {
    let (_dir, store) = store_with_pages(&[]).await;
    write_fetch_marker(&store);

    let summary = run_process(&store, &ProcessConfig::new().with_poll_interval(POLL))
        .await
        .unwrap();
    assert_eq!(summary.processed, 0);
    assert_eq!(read_json(store.marker_path(MarkerKind::Process))["processed_files"], 0);

    let report = tokio::time::timeout(
        Duration::from_secs(5),
        run_analysis(&store, &AnalysisConfig::new().with_poll_interval(POLL)),
    )
    .await
    .expect("analysis does not block once the marker exists")
    .unwrap();

    assert_eq!(report.documents_processed, 0);
    assert_eq!(report.total_words, 0);
    assert_eq!(report.unique_words, 0);
    assert!(report.top_100_words.is_empty());
    assert!(report.document_similarity.is_empty());
    assert!(report.top_bigrams.is_empty());
    assert!(report.top_trigrams.is_empty());
    assert!(store.report_path().is_file());
}

#[tokio::test]
async fn repeated_analysis_is_byte_identical_apart_from_timestamp() {
    let (_dir, store) = store_with_pages(&[
        ("a.html", html_page("A", &["Alpha beta gamma. Delta epsilon!", "Zeta eta theta?"])),
        ("b.html", html_page("B", &["Alpha gamma. Iota kappa lambda mu."])),
        ("c.html", html_page("C", &["Nu xi omicron pi rho sigma tau."])),
    ])
    .await;

    run_process(&store, &ProcessConfig::new().without_fetch_wait())
        .await
        .unwrap();

    let config = AnalysisConfig::new().with_poll_interval(POLL);
    let mut outputs = Vec::new();
    for _ in 0..2 {
        run_analysis(&store, &config).await.unwrap();
        let raw = std::fs::read_to_string(store.report_path()).unwrap();
        assert_eq!(raw.matches("\"processing_timestamp\"").count(), 1);
        let without_timestamp: Vec<&str> = raw
            .lines()
            .filter(|line| !line.trim_start().starts_with("\"processing_timestamp\""))
            .collect();
        outputs.push(without_timestamp.join("\n"));
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[tokio::test]
async fn links_and_images_preserve_order() {
    let html = r#"<html><body>
        <a href="https://a.test/1">one</a>
        <img src="/img/x.png"><a href='https://a.test/2'>two</a>
        <a href=https://a.test/1>one again</a>
        <img src="/img/x.png">
    </body></html>"#;
    let (_dir, store) = store_with_pages(&[("links.html", html.to_string())]).await;

    run_process(&store, &ProcessConfig::new().without_fetch_wait())
        .await
        .unwrap();

    let doc = store.get_document("links.json").await.unwrap();
    assert_eq!(
        doc.links,
        vec!["https://a.test/1", "https://a.test/2", "https://a.test/1"]
    );
    assert_eq!(doc.images, vec!["/img/x.png", "/img/x.png"]);
    assert_eq!(doc.statistics.paragraph_count, 1);
}
