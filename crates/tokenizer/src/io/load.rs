//! Load functionality for pre-trained tokenizers.

use super::format::SerializedTokenizer;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use subtok_core::{MergeTable, Result, TokenizerError, BASE_VOCAB_SIZE};

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a tokenizer from a directory.
    ///
    /// Expects a `tokenizer.json` file in the given directory. Returns the
    /// configured vocabulary size and the merge table; the merge list's
    /// file order defines the rank of each rule.
    pub fn load(path: &Path) -> Result<(usize, MergeTable)> {
        let file_path = path.join("tokenizer.json");
        let file = File::open(&file_path).map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedTokenizer = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize tokenizer: {}", e)))?;

        Self::validate(&serialized)?;

        Ok((serialized.vocab_size, MergeTable::from(serialized.merges)))
    }

    /// Check that the merge list is consistent with its file order.
    ///
    /// Rule `i` must assign ID `256 + i`; anything else means the file was
    /// produced against a different base alphabet or was reordered.
    fn validate(serialized: &SerializedTokenizer) -> Result<()> {
        for (rank, rule) in serialized.merges.iter().enumerate() {
            let expected = (BASE_VOCAB_SIZE + rank) as u32;
            if rule.new_id != expected {
                return Err(TokenizerError::Load(format!(
                    "merge entry {} assigns ID {}, expected {}",
                    rank, rule.new_id, expected
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::TokenizerSaver;
    use subtok_core::MergeRule;

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = std::env::temp_dir().join("subtok_test_load");
        std::fs::create_dir_all(&temp_dir).unwrap();

        let mut merges = MergeTable::new();
        merges.push((97, 97));
        merges.push((256, 98));

        let saver = TokenizerSaver::new(&merges, 258);
        saver.save(&temp_dir).unwrap();

        let (vocab_size, loaded) = TokenizerLoader::load(&temp_dir).unwrap();

        assert_eq!(vocab_size, 258);
        assert_eq!(loaded.rules(), merges.rules());
        assert_eq!(loaded.rank((97, 97)), Some(0));
        assert_eq!(loaded.rank((256, 98)), Some(1));

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_load_missing_file_errors() {
        let temp_dir = std::env::temp_dir().join("subtok_test_missing");
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::remove_file(temp_dir.join("tokenizer.json")).ok();

        let err = TokenizerLoader::load(&temp_dir).unwrap_err();
        assert!(matches!(err, TokenizerError::Io { .. }));

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_validate_rejects_reordered_merges() {
        let serialized = SerializedTokenizer {
            version: "0.1.0".to_string(),
            vocab_size: 258,
            merges: vec![
                MergeRule {
                    pair: (256, 98),
                    new_id: 257,
                },
                MergeRule {
                    pair: (97, 97),
                    new_id: 256,
                },
            ],
        };

        let err = TokenizerLoader::validate(&serialized).unwrap_err();
        assert!(matches!(err, TokenizerError::Load(_)));
    }
}
