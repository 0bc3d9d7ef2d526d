//! Accumulates processed documents into a corpus report.

use chrono::Utc;
use std::collections::HashSet;

use crate::analysis::frequency::{relative_frequency, Counter};
use crate::analysis::ngram::ngrams;
use crate::analysis::readability::ReadabilityTotals;
use crate::analysis::similarity::pairwise_similarity;
use crate::analysis::text::{char_len, split_sentences, tokenize};
use crate::types::{
    config::AnalysisConfig,
    report::{BigramCount, CorpusReport, TrigramCount, WordFrequency},
};

/// Single-run accumulator for corpus statistics.
///
/// Documents are added in load order; that order fixes the order of the
/// similarity pairs in the report.
#[derive(Debug, Clone)]
pub struct CorpusAnalyzer {
    config: AnalysisConfig,
    words: Counter,
    bigrams: Counter,
    trigrams: Counter,
    readability: ReadabilityTotals,
    token_sets: Vec<(String, HashSet<String>)>,
}

impl CorpusAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            words: Counter::new(),
            bigrams: Counter::new(),
            trigrams: Counter::new(),
            readability: ReadabilityTotals::default(),
            token_sets: Vec::new(),
        }
    }

    /// Add one document's text under the name used in similarity rows.
    pub fn add_document(&mut self, name: impl Into<String>, text: &str) {
        let tokens = tokenize(text);

        self.readability.tokens += tokens.len();
        self.readability.sentences += split_sentences(text).len();
        for token in &tokens {
            let len = char_len(token);
            self.readability.token_chars += len;
            if len >= self.config.complex_word_min_len {
                self.readability.complex_tokens += 1;
            }
        }

        // N-gram windows never cross document boundaries.
        self.bigrams.extend(ngrams(&tokens, 2));
        self.trigrams.extend(ngrams(&tokens, 3));

        let distinct: HashSet<String> = tokens.iter().cloned().collect();
        self.words.extend(tokens);
        self.token_sets.push((name.into(), distinct));
    }

    pub fn document_count(&self) -> usize {
        self.token_sets.len()
    }

    /// Total token count so far.
    pub fn total_words(&self) -> usize {
        self.words.total()
    }

    /// Occurrences of `token` (already lowercased) across the corpus.
    pub fn word_count(&self, token: &str) -> usize {
        self.words.get(token)
    }

    /// Build the report for every document added so far.
    pub fn finish(self) -> CorpusReport {
        let total_words = self.words.total();

        let top_100_words = self
            .words
            .top(self.config.top_words)
            .into_iter()
            .map(|(word, count)| WordFrequency {
                frequency: relative_frequency(count, total_words),
                word,
                count,
            })
            .collect();

        let top_bigrams = self
            .bigrams
            .top(self.config.top_ngrams)
            .into_iter()
            .map(|(bigram, count)| BigramCount { bigram, count })
            .collect();

        let top_trigrams = self
            .trigrams
            .top(self.config.top_ngrams)
            .into_iter()
            .map(|(trigram, count)| TrigramCount { trigram, count })
            .collect();

        CorpusReport {
            processing_timestamp: Utc::now(),
            documents_processed: self.token_sets.len(),
            total_words,
            unique_words: self.words.distinct(),
            top_100_words,
            document_similarity: pairwise_similarity(&self.token_sets),
            top_bigrams,
            top_trigrams,
            readability: self.readability.summarize(),
        }
    }
}

impl Default for CorpusAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
