//! Pipeline stages and the marker protocol that orders them.
//!
//! - [`coordinator`] - wait for an upstream marker
//! - [`html`] - markup stripping and per-document statistics
//! - [`process`] - extraction stage (raw HTML → processed documents)
//! - [`analyze`] - analytics stage (processed documents → corpus report)

pub mod analyze;
pub mod coordinator;
pub mod html;
pub mod process;

pub use analyze::{analyze_documents, load_documents, run_analysis};
pub use coordinator::await_marker;
pub use html::{compute_statistics, strip_html, StrippedHtml};
pub use process::{process_document, run_process, FailedFile, FileOutcome, ProcessSummary};
