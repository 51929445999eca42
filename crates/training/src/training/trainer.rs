//! BPE trainer implementation.
//!
//! The trainer drives the merge-learning loop: count adjacent pairs in the
//! working sequence, collapse the most frequent pair into a fresh token ID,
//! and repeat until the target vocabulary size is reached or the corpus
//! runs out of pairs.

use subtok_core::{
    merge_pair, most_frequent_pair, pair_counts, MergeTable, Result, Vocabulary, BASE_VOCAB_SIZE,
};

/// Configuration for BPE training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Target vocabulary size. The number of merges learned is
    /// `vocab_size - 256`; values at or below 256 clamp to zero merges,
    /// since the base byte alphabet is always present.
    pub vocab_size: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { vocab_size: 276 }
    }
}

/// BPE trainer.
///
/// Learns merge rules from a text corpus by iteratively replacing the most
/// frequent adjacent pair with a new token ID, starting at 256. The working
/// sequence starts as the raw UTF-8 bytes of the corpus and shrinks as
/// merges are applied.
pub struct BpeTrainer {
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer targeting the given vocabulary size.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig { vocab_size })
    }

    /// Train on the given corpus.
    ///
    /// Returns the learned merge table and the vocabulary derived from it.
    /// The corpus may be exhausted (no adjacent pairs left) before the
    /// requested merge count is reached; that is not an error, the table
    /// simply holds fewer rules and the vocabulary is smaller than the
    /// target.
    pub fn train(&self, text: &str) -> Result<(MergeTable, Vocabulary)> {
        let num_merges = self.config.vocab_size.saturating_sub(BASE_VOCAB_SIZE);

        let mut ids: Vec<u32> = text.bytes().map(u32::from).collect();
        let mut merges = MergeTable::with_capacity(num_merges);

        for i in 0..num_merges {
            let counts = pair_counts(&ids);
            let Some(pair) = most_frequent_pair(&counts) else {
                log::debug!(
                    "corpus exhausted after {} of {} merges",
                    merges.len(),
                    num_merges
                );
                break;
            };

            let new_id = merges.push(pair);
            ids = merge_pair(&ids, pair, new_id);

            log::debug!(
                "[{}/{}] merging {:?} -> {}",
                i + 1,
                num_merges,
                pair,
                new_id
            );
        }

        let vocab = Vocabulary::from_merges(&merges)?;
        Ok((merges, vocab))
    }
}
