//! Sliding-window n-gram extraction library.
//!
//! This crate provides small, stateless text-segmentation primitives:
//! - Fixed-length n-gram extraction (`extract`)
//! - Alternating dual-length extraction (`extract_paired`)
//! - Streaming helpers applying either one over a sequence of strings
//!
//! Every call is independent: inputs are borrowed, outputs are freshly
//! allocated `String`s owned by the caller. Nothing here reads or writes
//! files; callers bring their own source of strings.

/// N-gram extraction algorithms, window configuration and streaming helpers.
pub mod extractor;

/// Error type shared by every fallible operation.
pub mod error;

pub use error::{NGramError, Result};
pub use extractor::ngram::{extract, extract_paired};
pub use extractor::stream::{for_each, for_each_paired, for_each_window, ngrams, NGrams};
pub use extractor::window::Window;
