//! Document types - raw HTML inputs and their processed form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fetched HTML file as written by the upstream producer.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// File name inside the raw partition (e.g. `page_1.html`)
    pub file_name: String,

    /// Unparsed file contents
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// File name without its final extension.
    ///
    /// The processed record for this document is stored under this stem.
    pub fn stem(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.file_name,
        }
    }

    /// Decode the contents as UTF-8, dropping undecodable sequences.
    pub fn html(&self) -> String {
        String::from_utf8_lossy(&self.bytes)
            .chars()
            .filter(|c| *c != char::REPLACEMENT_CHARACTER)
            .collect()
    }
}

/// Per-document counts computed during extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_word_length: f64,
}

/// Plain-text form of one raw document.
///
/// Written once by the extraction stage and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Name of the raw file this was produced from
    #[serde(default)]
    pub source_file: String,

    /// Recovered text with markup removed and whitespace collapsed
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub statistics: DocumentStatistics,

    /// `href` values in document order, duplicates kept
    #[serde(default)]
    pub links: Vec<String>,

    /// `src` values in document order, duplicates kept
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}
