use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use corpus::{AnalysisConfig, FsStore, ProcessConfig};

/// Stage configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Root of the shared store
    pub shared_dir: PathBuf,
    pub poll_interval: Duration,
    /// Whether the processor waits for the fetcher's marker
    pub wait_for_fetch: bool,
}

impl WorkerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let poll_ms: u64 = lookup("POLL_INTERVAL_MS")
            .unwrap_or_else(|| "1000".to_string())
            .parse()
            .context("POLL_INTERVAL_MS must be a valid number")?;
        if poll_ms == 0 {
            anyhow::bail!("POLL_INTERVAL_MS must be greater than zero");
        }

        Ok(Self {
            shared_dir: lookup("SHARED_DIR")
                .unwrap_or_else(|| "/shared".to_string())
                .into(),
            poll_interval: Duration::from_millis(poll_ms),
            wait_for_fetch: lookup("WAIT_FOR_FETCH")
                .map(|v| parse_bool(&v))
                .transpose()
                .context("WAIT_FOR_FETCH must be true or false")?
                .unwrap_or(true),
        })
    }

    pub fn store(&self) -> FsStore {
        FsStore::new(&self.shared_dir)
    }

    pub fn process_config(&self) -> ProcessConfig {
        let config = ProcessConfig::new().with_poll_interval(self.poll_interval);
        if self.wait_for_fetch {
            config
        } else {
            config.without_fetch_wait()
        }
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new().with_poll_interval(self.poll_interval)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => anyhow::bail!("unrecognized boolean: {other}"),
    }
}
