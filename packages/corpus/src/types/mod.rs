//! Records that flow through the pipeline and the shared store.

pub mod config;
pub mod document;
pub mod marker;
pub mod report;
