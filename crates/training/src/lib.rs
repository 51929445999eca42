//! Subtok-training - BPE training infrastructure
//!
//! This crate provides the training loop for learning BPE merge rules from
//! a text corpus.
//!
//! # Example
//!
//! ```rust
//! use subtok_training::BpeTrainer;
//!
//! let trainer = BpeTrainer::with_vocab_size(257);
//! let (merges, vocab) = trainer.train("aaabdaaabac").unwrap();
//!
//! assert_eq!(merges.len(), 1);
//! assert_eq!(vocab.len(), 257);
//! ```

pub use subtok_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, TrainingConfig};
