//! HTML to plain text conversion and per-document statistics.

use regex::Regex;
use std::sync::LazyLock;

use crate::analysis::text::{char_len, round3, split_sentences, words};
use crate::types::document::DocumentStatistics;

static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href=['"]?([^'" >]+)"#).unwrap());
static SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)src=['"]?([^'" >]+)"#).unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<\s*p\b[^>]*>").unwrap());

/// Text and references recovered from one HTML document.
#[derive(Debug, Clone, PartialEq)]
pub struct StrippedHtml {
    pub text: String,
    pub links: Vec<String>,
    pub images: Vec<String>,
}

/// Strip markup from `html`.
///
/// Script and style blocks are removed first. Links and images are then
/// harvested from the remaining markup in document order, duplicates kept.
/// Finally every tag becomes a single space and whitespace is collapsed.
pub fn strip_html(html: &str) -> StrippedHtml {
    let without_scripts = SCRIPT.replace_all(html, "");
    let markup = STYLE.replace_all(&without_scripts, "");

    let links = capture_all(&HREF, &markup);
    let images = capture_all(&SRC, &markup);

    let spaced = TAG.replace_all(&markup, " ");
    let text = WHITESPACE.replace_all(&spaced, " ").trim().to_string();

    StrippedHtml {
        text,
        links,
        images,
    }
}

fn capture_all(pattern: &Regex, haystack: &str) -> Vec<String> {
    pattern
        .captures_iter(haystack)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count opening `<p>` tags in the original markup.
pub fn count_paragraph_tags(html: &str) -> usize {
    PARAGRAPH.find_iter(html).count()
}

/// Compute statistics for recovered `text`.
///
/// `original_html` is only consulted for paragraph tags. Without any, a
/// non-empty text counts as one paragraph.
pub fn compute_statistics(text: &str, original_html: &str) -> DocumentStatistics {
    let words = words(text);
    let word_count = words.len();

    let sentence_count = split_sentences(text).len();

    let paragraph_count = match count_paragraph_tags(original_html) {
        0 if !text.is_empty() => 1,
        n => n,
    };

    let avg_word_length = if word_count > 0 {
        let total: usize = words.iter().map(|w| char_len(w)).sum();
        round3(total as f64 / word_count as f64)
    } else {
        0.0
    };

    DocumentStatistics {
        word_count,
        sentence_count,
        paragraph_count,
        avg_word_length,
    }
}
