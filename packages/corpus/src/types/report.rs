//! The corpus report - terminal output of the analytics stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Corpus-wide statistics over every processed document in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub processing_timestamp: DateTime<Utc>,
    pub documents_processed: usize,
    pub total_words: usize,
    pub unique_words: usize,
    pub top_100_words: Vec<WordFrequency>,
    pub document_similarity: Vec<DocumentSimilarity>,
    pub top_bigrams: Vec<BigramCount>,
    pub top_trigrams: Vec<TrigramCount>,
    pub readability: Readability,
}

impl CorpusReport {
    /// A report for a run that found no documents.
    pub fn empty() -> Self {
        Self {
            processing_timestamp: Utc::now(),
            documents_processed: 0,
            total_words: 0,
            unique_words: 0,
            top_100_words: Vec::new(),
            document_similarity: Vec::new(),
            top_bigrams: Vec::new(),
            top_trigrams: Vec::new(),
            readability: Readability::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    /// `count / total_words`
    pub frequency: f64,
}

/// Jaccard similarity of one unordered document pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSimilarity {
    pub doc1: String,
    pub doc2: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigramCount {
    pub bigram: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrigramCount {
    pub trigram: String,
    pub count: usize,
}

/// Readability summary, every value rounded to 3 decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub complexity_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_zero_valued() {
        let value = serde_json::to_value(CorpusReport::empty()).unwrap();

        assert_eq!(value["documents_processed"], 0);
        assert_eq!(value["total_words"], 0);
        assert_eq!(value["unique_words"], 0);
        assert_eq!(value["top_100_words"].as_array().unwrap().len(), 0);
        assert_eq!(value["document_similarity"].as_array().unwrap().len(), 0);
        assert_eq!(value["top_bigrams"].as_array().unwrap().len(), 0);
        assert_eq!(value["top_trigrams"].as_array().unwrap().len(), 0);
        assert_eq!(value["readability"]["avg_sentence_length"], 0.0);
        assert_eq!(value["readability"]["avg_word_length"], 0.0);
        assert_eq!(value["readability"]["complexity_score"], 0.0);
    }
}
