//! Top-level module for the extraction system.
//!
//! This module groups:
//! - The two slicing algorithms (`ngram`)
//! - The validated window configuration (`Window`)
//! - Streaming application over sequences of strings (`stream`)

/// Single-length and paired-length n-gram extraction.
///
/// Both functions validate their lengths first, then slice the input
/// at precomputed character boundaries.
pub mod ngram;

/// Extraction window configuration.
///
/// A `Window` names which algorithm to run and with which lengths, so
/// a single value can be validated once and reused for a whole source.
pub mod window;

/// Per-element application of a window over a sequence of strings.
///
/// Callback-based (`for_each`, `for_each_paired`) and iterator-based
/// (`ngrams`) variants. Neither buffers results across elements.
pub mod stream;
