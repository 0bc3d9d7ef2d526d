//! Occurrence counting and deterministic top-k selection.

use std::collections::HashMap;

/// Occurrence counts keyed by token (or joined n-gram).
#[derive(Debug, Clone, Default)]
pub struct Counter {
    counts: HashMap<String, usize>,
    total: usize,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count every item of `keys`.
    pub fn extend<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        for key in keys {
            self.add(key);
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `k` most frequent keys, by descending count then ascending key.
    pub fn top(&self, k: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(&String, &usize)> = self.counts.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(k)
            .map(|(key, count)| (key.clone(), *count))
            .collect()
    }
}

/// `count / total`, or 0.0 for an empty corpus.
pub fn relative_frequency(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
