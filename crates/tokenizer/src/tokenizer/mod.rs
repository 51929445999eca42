//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the
//! merge table, vocabulary, trainer, and persistence together. Once trained
//! (or loaded), the merge table and vocabulary are read-only; encode and
//! decode never mutate them, so a trained tokenizer can be shared freely
//! across threads.

use crate::io::{load::TokenizerLoader, save::TokenizerSaver};
use rayon::prelude::*;
use std::path::Path;
use subtok_core::{
    merge_pair, pair_counts, MergeTable, Result, TokenizerError, Vocabulary,
};
use subtok_training::BpeTrainer;

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Target vocabulary size for training
    pub vocab_size: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { vocab_size: 276 }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Tokenizer {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
///
/// Holds the learned merge table and the vocabulary derived from it. A
/// fresh tokenizer starts with an empty merge table and the base byte
/// vocabulary, so decoding raw byte IDs works even before training.
pub struct Tokenizer {
    /// Configuration
    config: TokenizerConfig,
    /// Learned merge rules, ordered by rank
    merges: MergeTable,
    /// Byte expansion for every token ID
    vocab: Vocabulary,
}

impl Tokenizer {
    /// Create a new untrained tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            merges: MergeTable::new(),
            vocab: Vocabulary::base(),
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Train the tokenizer on a text corpus.
    ///
    /// Learns up to `vocab_size - 256` merges and replaces the tokenizer's
    /// merge table and vocabulary in one step; on error the previous state
    /// is left untouched.
    pub fn train(&mut self, text: &str) -> Result<()> {
        let trainer = BpeTrainer::with_vocab_size(self.config.vocab_size);
        let (merges, vocab) = trainer.train(text)?;

        self.merges = merges;
        self.vocab = vocab;

        Ok(())
    }

    /// Encode text to token IDs.
    ///
    /// Starts from the raw UTF-8 bytes and repeatedly applies the learned
    /// merge with the lowest rank among the pairs present in the sequence.
    /// The fixed rank order matters: re-deriving pair frequencies from the
    /// text being encoded would not reproduce the precedence learned at
    /// training time. Stops when no pair in the sequence has a rule.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let mut ids: Vec<u32> = text.bytes().map(u32::from).collect();

        while ids.len() > 1 {
            let counts = pair_counts(&ids);

            let best = counts
                .keys()
                .filter_map(|&pair| {
                    self.merges
                        .get(pair)
                        .map(|(rank, new_id)| (rank, new_id, pair))
                })
                .min_by_key(|&(rank, _, _)| rank);

            let Some((_, new_id, pair)) = best else {
                break;
            };

            ids = merge_pair(&ids, pair, new_id);
        }

        ids
    }

    /// Encode a batch of texts in parallel.
    ///
    /// Results preserve input order.
    pub fn encode_batch(&self, texts: &[String]) -> Vec<Vec<u32>> {
        texts.par_iter().map(|text| self.encode(text)).collect()
    }

    /// Decode token IDs back to text.
    ///
    /// Byte sequences that are not valid UTF-8 are decoded permissively,
    /// substituting U+FFFD for the offending bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnknownTokenId`] if an ID is outside the
    /// vocabulary's domain; this indicates an incompatible merge table and
    /// is never silently substituted.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        let mut bytes = Vec::with_capacity(ids.len());

        for &id in ids {
            let expansion = self
                .vocab
                .get(id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            bytes.extend_from_slice(expansion);
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Decode a batch of token sequences in parallel.
    pub fn decode_batch(&self, sequences: &[Vec<u32>]) -> Result<Vec<String>> {
        sequences.par_iter().map(|ids| self.decode(ids)).collect()
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get the number of learned merges.
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }

    /// Get a reference to the merge table.
    pub fn merges(&self) -> &MergeTable {
        &self.merges
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Save the tokenizer to a directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        let saver = TokenizerSaver::new(&self.merges, self.config.vocab_size);
        saver.save(path)
    }

    /// Load a tokenizer from a directory.
    ///
    /// The vocabulary is rebuilt from the persisted merge list; entry order
    /// in the file defines the rank on reload.
    pub fn load(path: &Path) -> Result<Self> {
        let (vocab_size, merges) = TokenizerLoader::load(path)?;
        let vocab = Vocabulary::from_merges(&merges)?;

        Ok(Self {
            config: TokenizerConfig { vocab_size },
            merges,
            vocab,
        })
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let tokenizer = Tokenizer::builder().vocab_size(1000).build();
        assert_eq!(tokenizer.vocab_size(), 256); // untrained: base bytes only
        assert_eq!(tokenizer.merge_count(), 0);
    }

    #[test]
    fn test_untrained_encode_is_raw_bytes() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.encode("abc"), vec![97, 98, 99]);
    }

    #[test]
    fn test_train_encode_decode_roundtrip() {
        let mut tokenizer = Tokenizer::builder().vocab_size(257).build();
        tokenizer.train("aaabdaaabac").unwrap();

        assert_eq!(tokenizer.merge_count(), 1);

        let ids = tokenizer.encode("aaabdaaabac");
        assert!(ids.len() < "aaabdaaabac".len());
        assert_eq!(tokenizer.decode(&ids).unwrap(), "aaabdaaabac");
    }

    #[test]
    fn test_roundtrip_with_unicode() {
        let mut tokenizer = Tokenizer::builder().vocab_size(300).build();
        let corpus = "héllo wörld héllo wörld héllo";
        tokenizer.train(corpus).unwrap();

        let ids = tokenizer.encode(corpus);
        assert_eq!(tokenizer.decode(&ids).unwrap(), corpus);
    }

    #[test]
    fn test_encode_output_never_longer_than_input() {
        let mut tokenizer = Tokenizer::builder().vocab_size(280).build();
        tokenizer.train("banana bandana banana bandana").unwrap();

        for text in ["banana", "band", "x", ""] {
            assert!(tokenizer.encode(text).len() <= text.len());
        }
    }

    #[test]
    fn test_empty_text() {
        let mut tokenizer = Tokenizer::default();
        tokenizer.train("").unwrap();

        assert_eq!(tokenizer.merge_count(), 0);
        assert_eq!(tokenizer.encode(""), Vec::<u32>::new());
        assert_eq!(tokenizer.decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_single_byte_text() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.encode("a"), vec![97]);
    }

    #[test]
    fn test_decode_base_ids() {
        let tokenizer = Tokenizer::default();
        for id in 0u32..128 {
            let text = tokenizer.decode(&[id]).unwrap();
            assert_eq!(text.as_bytes(), &[id as u8]);
        }
    }

    #[test]
    fn test_decode_invalid_utf8_is_replaced() {
        let tokenizer = Tokenizer::default();
        // 0xFF alone is never valid UTF-8.
        let text = tokenizer.decode(&[255]).unwrap();
        assert_eq!(text, "\u{FFFD}");
    }

    #[test]
    fn test_decode_unknown_id_errors() {
        let tokenizer = Tokenizer::default();
        let err = tokenizer.decode(&[97, 9999]).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownTokenId(9999)));
    }

    #[test]
    fn test_encode_respects_merge_rank_not_frequency() {
        // Train so that an early merge exists; encoding a short text must
        // follow the learned rank even though its own pair frequencies
        // differ from the corpus.
        let mut tokenizer = Tokenizer::builder().vocab_size(258).build();
        tokenizer.train("ababababab xy").unwrap();

        // First learned merge is (a, b) -> 256.
        assert_eq!(tokenizer.merges().rules()[0].pair, (97, 98));
        let ids = tokenizer.encode("ab");
        assert_eq!(ids, vec![256]);
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut tokenizer = Tokenizer::builder().vocab_size(260).build();
        tokenizer.train("hello world hello world").unwrap();

        let texts = vec![
            "hello".to_string(),
            "world".to_string(),
            "hello world".to_string(),
        ];
        let encoded = tokenizer.encode_batch(&texts);
        assert_eq!(encoded.len(), 3);

        let decoded = tokenizer.decode_batch(&encoded).unwrap();
        assert_eq!(decoded, texts);
    }

    #[test]
    fn test_retrain_replaces_state() {
        let mut tokenizer = Tokenizer::builder().vocab_size(260).build();
        tokenizer.train("aaaa aaaa").unwrap();
        let first_merges = tokenizer.merge_count();
        assert!(first_merges > 0);

        tokenizer.train("").unwrap();
        assert_eq!(tokenizer.merge_count(), 0);
        assert_eq!(tokenizer.vocab_size(), 256);
    }
}
