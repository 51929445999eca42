//! Format definitions for tokenizer serialization.
//!
//! Only the ordered merge list is persisted: entry order defines the merge
//! rank on reload, and the vocabulary is fully reconstructable from the
//! merge list plus the fixed byte alphabet, so it is never written out.

use serde::{Deserialize, Serialize};
use subtok_core::MergeRule;

/// Complete tokenizer serialization format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedTokenizer {
    /// Format version
    pub version: String,
    /// Configured target vocabulary size
    pub vocab_size: usize,
    /// Merge rules in learning order; position defines rank
    pub merges: Vec<MergeRule>,
}
