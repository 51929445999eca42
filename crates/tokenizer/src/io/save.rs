//! Save functionality for trained tokenizers.

use super::format::SerializedTokenizer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use subtok_core::{MergeTable, Result, TokenizerError};

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    /// Merge rules reference
    merges: &'a MergeTable,
    /// Configured target vocabulary size
    vocab_size: usize,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(merges: &'a MergeTable, vocab_size: usize) -> Self {
        Self { merges, vocab_size }
    }

    /// Save the tokenizer to a directory.
    ///
    /// This writes a single `tokenizer.json` file containing the version,
    /// the configured vocabulary size, and the ordered merge list.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let file_path = path.join("tokenizer.json");
        let file = File::create(&file_path).map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.serialize())
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize tokenizer: {}", e)))?;

        Ok(())
    }

    /// Serialize the tokenizer to a structure.
    fn serialize(&self) -> SerializedTokenizer {
        SerializedTokenizer {
            version: env!("CARGO_PKG_VERSION").to_string(),
            vocab_size: self.vocab_size,
            merges: self.merges.rules().to_vec(),
        }
    }
}
