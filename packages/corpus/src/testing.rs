//! Testing utilities: fixture builders for documents and pages.
//!
//! Useful for exercising the stages against a [`MemoryStore`](crate::stores::MemoryStore)
//! or a temporary [`FsStore`](crate::stores::FsStore).

use chrono::Utc;

use crate::pipeline::html::compute_statistics;
use crate::types::document::ProcessedDocument;

/// A processed document with the given text and statistics derived from it.
pub fn processed_document(source_file: &str, text: &str) -> ProcessedDocument {
    ProcessedDocument {
        source_file: source_file.to_string(),
        text: text.to_string(),
        statistics: compute_statistics(text, ""),
        links: Vec::new(),
        images: Vec::new(),
        processed_at: Some(Utc::now()),
    }
}

/// A minimal HTML page with one `<p>` per paragraph.
pub fn html_page(title: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<p>{p}</p>\n"))
        .collect();
    format!("<html><head><title>{title}</title></head><body>\n{body}</body></html>")
}
