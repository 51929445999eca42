//! Core BPE algorithm implementation.
//!
//! This module contains the fundamental data structures and algorithms
//! for byte-pair encoding: pair statistics, merge application, the ordered
//! merge table, and the derived vocabulary.

pub mod merges;
pub mod pairs;
pub mod vocab;

pub use merges::{merge_pair, MergeRule, MergeTable};
pub use pairs::{most_frequent_pair, pair_counts, Pair, PairCounts};
pub use vocab::{Vocabulary, BASE_VOCAB_SIZE};
