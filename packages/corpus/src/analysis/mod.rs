//! Corpus analytics - the computations behind the corpus report.
//!
//! - [`text`] - tokenization and sentence segmentation
//! - [`frequency`] - token counts and top-k selection
//! - [`ngram`] - per-document contiguous n-gram counts
//! - [`similarity`] - Jaccard similarity over token sets
//! - [`readability`] - sentence/word length and complexity
//! - [`corpus`] - accumulates documents into a [`CorpusReport`](crate::types::report::CorpusReport)

pub mod corpus;
pub mod frequency;
pub mod ngram;
pub mod readability;
pub mod similarity;
pub mod text;

pub use corpus::CorpusAnalyzer;
pub use similarity::jaccard_similarity;
