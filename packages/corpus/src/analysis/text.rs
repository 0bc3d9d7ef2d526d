//! Tokenization and sentence segmentation shared by both stages.

use regex::Regex;
use std::sync::LazyLock;

/// Letters, digits and underscore. Combining marks are not word characters.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

/// Sentence-ending punctuation immediately followed by whitespace.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Maximal runs of word characters (letters, digits, underscore), as written.
pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercased word tokens. Used for frequency, n-grams, and similarity.
pub fn tokenize(text: &str) -> Vec<String> {
    words(&text.to_lowercase())
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Split text into sentences at whitespace that follows `.`, `!` or `?`.
///
/// The punctuation stays with the preceding sentence. Segments that are
/// empty after trimming are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Punctuation is one ASCII byte; the break starts right after it.
        let end = m.start() + 1;
        sentences.push(&text[start..end]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    sentences.retain(|s| !s.trim().is_empty());
    sentences
}

/// Length of a token in characters (not bytes).
pub fn char_len(token: &str) -> usize {
    token.chars().count()
}

/// Round to 3 decimal places.
///
/// Rounds the stored double directly, with exact ties going to the even
/// digit, so `81/16` gives `5.062`.
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}
