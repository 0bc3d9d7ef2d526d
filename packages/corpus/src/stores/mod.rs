//! Storage implementations for the shared store.
//!
//! Available backends:
//! - `FsStore` - the shared directory tree used by the stage processes
//! - `MemoryStore` - In-memory storage for tests

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;
