//! Core trait abstractions for the corpus library.
//!
//! Stages are written against these traits so they run the same way over
//! the shared directory tree and over the in-memory test store.

pub mod store;
