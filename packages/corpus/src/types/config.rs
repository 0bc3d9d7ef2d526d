//! Configuration types for the extraction and analytics stages.

use std::time::Duration;

use crate::error::{CorpusError, Result};

/// Default interval between marker existence checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Configuration for the extraction stage.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// How often to re-check for the upstream marker.
    pub poll_interval: Duration,

    /// Wait for the fetch marker before reading raw files.
    ///
    /// Default: true. Disable when the raw partition is populated by hand.
    pub wait_for_fetch: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            wait_for_fetch: true,
        }
    }
}

impl ProcessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Skip waiting for the fetch marker.
    pub fn without_fetch_wait(mut self) -> Self {
        self.wait_for_fetch = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_poll_interval(self.poll_interval)
    }
}

/// Configuration for the analytics stage.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// How often to re-check for the extraction marker.
    pub poll_interval: Duration,

    /// Number of entries in the word frequency table. Default: 100.
    pub top_words: usize,

    /// Number of entries in each n-gram table. Default: 50.
    pub top_ngrams: usize,

    /// Minimum character length of a "complex" token. Default: 7.
    pub complex_word_min_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            top_words: 100,
            top_ngrams: 50,
            complex_word_min_len: 7,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the size of the word frequency table.
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    /// Set the size of the bigram and trigram tables.
    pub fn with_top_ngrams(mut self, top_ngrams: usize) -> Self {
        self.top_ngrams = top_ngrams;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_poll_interval(self.poll_interval)?;
        if self.complex_word_min_len == 0 {
            return Err(CorpusError::InvalidConfig {
                reason: "complex_word_min_len must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_poll_interval(interval: Duration) -> Result<()> {
    if interval.is_zero() {
        return Err(CorpusError::InvalidConfig {
            reason: "poll interval must be greater than zero".to_string(),
        });
    }
    Ok(())
}
