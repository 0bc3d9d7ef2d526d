//! Pairwise document similarity.

use std::collections::HashSet;

use crate::types::report::DocumentSimilarity;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` of two token sets.
///
/// Two empty sets have similarity 0.0.
pub fn jaccard_similarity<S: Eq + std::hash::Hash>(
    a: &HashSet<S>,
    b: &HashSet<S>,
) -> f64 {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = smaller.iter().filter(|t| larger.contains(*t)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Similarity of every unordered pair of distinct documents.
///
/// Pairs are enumerated as `(i, j)` with `i < j` in input order, so the
/// output is deterministic for a deterministic input order.
pub fn pairwise_similarity(documents: &[(String, HashSet<String>)]) -> Vec<DocumentSimilarity> {
    let mut rows = Vec::with_capacity(documents.len() * documents.len().saturating_sub(1) / 2);

    for (i, (name_a, set_a)) in documents.iter().enumerate() {
        for (name_b, set_b) in &documents[i + 1..] {
            rows.push(DocumentSimilarity {
                doc1: name_a.clone(),
                doc2: name_b.clone(),
                similarity: jaccard_similarity(set_a, set_b),
            });
        }
    }

    rows
}
