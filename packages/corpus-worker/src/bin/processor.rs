// Extraction stage: raw HTML → processed documents + process marker

use anyhow::{Context, Result};
use corpus::run_process;
use corpus_worker::{init_tracing, WorkerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = WorkerConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(shared_dir = %config.shared_dir.display(), "Processor starting");

    let store = config.store();
    store
        .ensure_layout()
        .await
        .context("Failed to create store directories")?;

    let summary = run_process(&store, &config.process_config())
        .await
        .context("Processing failed")?;

    for failed in &summary.failed {
        tracing::warn!(file = %failed.file_name, reason = %failed.reason, "Skipped file");
    }
    tracing::info!(
        processed = summary.processed,
        attempted = summary.attempted,
        "Processor finished"
    );

    Ok(())
}
