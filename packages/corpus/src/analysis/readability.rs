//! Corpus readability metrics.

use crate::analysis::text::round3;
use crate::types::report::Readability;

/// Running totals needed for the readability summary.
#[derive(Debug, Clone, Default)]
pub struct ReadabilityTotals {
    pub tokens: usize,
    pub token_chars: usize,
    pub sentences: usize,
    pub complex_tokens: usize,
}

impl ReadabilityTotals {
    /// Final metrics, each rounded to 3 decimals.
    ///
    /// `complexity = 0.4 * (avg_sentence_length + 100 * complex / tokens)`;
    /// any ratio with a zero denominator contributes 0.0.
    pub fn summarize(&self) -> Readability {
        let avg_sentence_length = ratio(self.tokens, self.sentences);
        let avg_word_length = ratio(self.token_chars, self.tokens);
        let complex_share = 100.0 * ratio(self.complex_tokens, self.tokens);
        let complexity_score = 0.4 * (avg_sentence_length + complex_share);

        Readability {
            avg_sentence_length: round3(avg_sentence_length),
            avg_word_length: round3(avg_word_length),
            complexity_score: round3(complexity_score),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
