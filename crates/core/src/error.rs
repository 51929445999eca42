//! Error types for the BPE tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Token ID outside the vocabulary's domain
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Merge rule that cannot be resolved against the vocabulary
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),

    /// Error loading a saved tokenizer
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a trained tokenizer
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
