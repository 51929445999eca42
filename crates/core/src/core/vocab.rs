//! Vocabulary storage: token ID -> byte expansion.
//!
//! The vocabulary is a flat arena indexed by ID. IDs 0-255 expand to their
//! single raw byte; a merged ID expands to the concatenation of its
//! operands' expansions. Operand IDs are always smaller than the ID being
//! defined, so building in learning order resolves every expansion without
//! recursion.

use crate::core::merges::MergeTable;
use crate::error::{Result, TokenizerError};

/// Number of base tokens; IDs below this map to their single raw byte.
pub const BASE_VOCAB_SIZE: usize = 256;

/// Vocabulary mapping every token ID to its full byte expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Expansion arena indexed by token ID.
    bytes: Vec<Vec<u8>>,
}

impl Vocabulary {
    /// Create the base vocabulary covering only the raw byte alphabet.
    pub fn base() -> Self {
        let bytes = (0u8..=255).map(|b| vec![b]).collect();
        Self { bytes }
    }

    /// Build the full vocabulary for a merge table.
    ///
    /// Walks the rules in learning order, appending the concatenation of
    /// the two operand expansions for each rule. The resulting length is
    /// always `256 + table.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::InvalidMerge`] if a rule references an
    /// operand that is not yet defined, or assigns an ID out of sequence.
    /// Either means the table was not produced by a training run over the
    /// base alphabet.
    pub fn from_merges(table: &MergeTable) -> Result<Self> {
        let mut vocab = Self::base();

        for rule in table.iter() {
            if rule.new_id as usize != vocab.bytes.len() {
                return Err(TokenizerError::InvalidMerge(format!(
                    "rule for pair {:?} assigns ID {}, expected {}",
                    rule.pair,
                    rule.new_id,
                    vocab.bytes.len()
                )));
            }

            let (first, second) = rule.pair;
            let expansion = match (vocab.get(first), vocab.get(second)) {
                (Some(a), Some(b)) => {
                    let mut bytes = Vec::with_capacity(a.len() + b.len());
                    bytes.extend_from_slice(a);
                    bytes.extend_from_slice(b);
                    bytes
                }
                _ => {
                    return Err(TokenizerError::InvalidMerge(format!(
                        "pair {:?} references an undefined operand (ID {} is next)",
                        rule.pair, rule.new_id
                    )))
                }
            };

            vocab.bytes.push(expansion);
        }

        Ok(vocab)
    }

    /// Get the byte expansion for a token ID.
    #[inline]
    pub fn get(&self, id: u32) -> Option<&[u8]> {
        self.bytes.get(id as usize).map(|b| b.as_slice())
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::base()
    }
}
