//! Subtok-core - Core BPE algorithm implementation
//!
//! This crate provides the fundamental data structures and algorithms for
//! byte-pair encoding (BPE), independent of any training or I/O concerns.
//!
//! # Features
//!
//! - Adjacent pair statistics over token sequences (`AHashMap` keyed by pair)
//! - Greedy non-overlapping merge application
//! - Ordered merge tables where insertion order defines rank
//! - Byte-arena vocabularies reconstructable from a merge table alone
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use subtok_core::{merge_pair, pair_counts};
//!
//! let ids = vec![97, 98, 97, 98];
//! let counts = pair_counts(&ids);
//! assert_eq!(counts.get(&(97, 98)), Some(&2));
//!
//! let merged = merge_pair(&ids, (97, 98), 256);
//! assert_eq!(merged, vec![256, 256]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE algorithm modules
pub mod core;
pub use core::{
    merge_pair, most_frequent_pair, pair_counts, MergeRule, MergeTable, Pair, PairCounts,
    Vocabulary, BASE_VOCAB_SIZE,
};
