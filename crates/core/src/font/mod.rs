//! Font identity and usage statistics.
//!
//! This module contains:
//! - `descriptor`: font descriptors as reported by the PDF engine
//! - `collection`: per-font size histograms and the collection that
//!   accumulates them over pages and documents

pub mod collection;
pub mod descriptor;

// Re-export main types for convenience
pub use collection::{Font, FontCollection, SizeHistogram};
pub use descriptor::{FontDescriptor, FontFlags};
