//! Subtok-tokenizer - High-level tokenizer API
//!
//! This crate provides a user-friendly interface for BPE tokenization,
//! integrating the merge table, vocabulary, trainer, and persistence into a
//! single type.
//!
//! # Example
//!
//! ```rust
//! use subtok_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().vocab_size(300).build();
//! tokenizer.train("low lower lowest").unwrap();
//!
//! let ids = tokenizer.encode("lower");
//! let text = tokenizer.decode(&ids).unwrap();
//! assert_eq!(text, "lower");
//! ```

// Re-export core types
pub use subtok_core::{MergeRule, MergeTable, Result, TokenizerError, Vocabulary};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerConfig};

// IO/Serialization
pub mod io;
pub use io::{SerializedTokenizer, TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
