// Analytics stage: processed documents → corpus report

use anyhow::{Context, Result};
use corpus::run_analysis;
use corpus_worker::{init_tracing, WorkerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = WorkerConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(shared_dir = %config.shared_dir.display(), "Analyzer starting");

    let store = config.store();
    store
        .ensure_layout()
        .await
        .context("Failed to create store directories")?;

    let report = run_analysis(&store, &config.analysis_config())
        .await
        .context("Analysis failed")?;

    tracing::info!(
        documents = report.documents_processed,
        report = %store.report_path().display(),
        "Analyzer finished"
    );

    Ok(())
}
