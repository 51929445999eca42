//! Merge rules and merge application for BPE.
//!
//! Merge rules are stored using token IDs rather than byte strings for fast
//! comparison. Insertion order defines the merge rank: rank 0 was learned
//! first and takes precedence over every later rule at encode time.

use crate::core::pairs::Pair;
use crate::core::vocab::BASE_VOCAB_SIZE;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single learned merge rule: `pair` collapses into `new_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRule {
    /// The pair of token IDs to merge
    pub pair: Pair,
    /// The ID of the token created by merging this pair
    pub new_id: u32,
}

/// Replace every non-overlapping occurrence of `pair` in `ids` with `new_id`.
///
/// The scan is greedy left-to-right: after a match both elements are
/// consumed and the scan resumes past them, so `[5, 5, 5]` with pair
/// `(5, 5)` becomes `[99, 5]`. An odd tail that matches only the first
/// element of the pair is left as-is.
pub fn merge_pair(ids: &[u32], pair: Pair, new_id: u32) -> Vec<u32> {
    let mut merged = Vec::with_capacity(ids.len());
    let mut i = 0;

    while i < ids.len() {
        if i + 1 < ids.len() && ids[i] == pair.0 && ids[i + 1] == pair.1 {
            merged.push(new_id);
            i += 2;
        } else {
            merged.push(ids[i]);
            i += 1;
        }
    }

    merged
}

/// Ordered collection of BPE merge rules with efficient lookup.
///
/// The rule list is authoritative: position in the list is the rank, and
/// rule `i` always assigns id `256 + i`. Serialization keeps only the
/// ordered list; the pair index is rebuilt on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<MergeRule>", into = "Vec<MergeRule>")]
pub struct MergeTable {
    /// Rules in learning order; position = rank.
    rules: Vec<MergeRule>,
    /// Pair -> (rank, new_id) for O(1) lookup.
    index: AHashMap<Pair, (u32, u32)>,
}

impl MergeTable {
    /// Create a new empty merge table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new merge table with capacity for `capacity` rules.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Record a new merge rule for `pair`, assigning the next free ID.
    ///
    /// IDs start at 256 and increase by one per rule, so the ID also
    /// encodes the rank. Returns the assigned ID. A pair never reappears
    /// adjacent once merged, so each pair is recorded at most once during
    /// training.
    pub fn push(&mut self, pair: Pair) -> u32 {
        let rank = self.rules.len() as u32;
        let new_id = BASE_VOCAB_SIZE as u32 + rank;

        self.rules.push(MergeRule { pair, new_id });
        self.index.insert(pair, (rank, new_id));

        new_id
    }

    /// Get the merge rule for a pair.
    ///
    /// Returns `Some((rank, new_id))` if this pair should be merged,
    /// `None` otherwise.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<(u32, u32)> {
        self.index.get(&pair).copied()
    }

    /// Get the rank of a pair, if it has a rule.
    #[inline]
    pub fn rank(&self, pair: Pair) -> Option<u32> {
        self.get(pair).map(|(rank, _)| rank)
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules in learning order.
    #[inline]
    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Iterate over the rules in learning order.
    pub fn iter(&self) -> impl Iterator<Item = &MergeRule> {
        self.rules.iter()
    }
}

impl From<Vec<MergeRule>> for MergeTable {
    fn from(rules: Vec<MergeRule>) -> Self {
        let mut index = AHashMap::with_capacity(rules.len());
        for (rank, rule) in rules.iter().enumerate() {
            index.insert(rule.pair, (rank as u32, rule.new_id));
        }
        Self { rules, index }
    }
}

impl From<MergeTable> for Vec<MergeRule> {
    fn from(table: MergeTable) -> Self {
        table.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_pair_non_overlapping() {
        assert_eq!(merge_pair(&[5, 5, 5, 5], (5, 5), 99), vec![99, 99]);
        assert_eq!(merge_pair(&[5, 5, 5], (5, 5), 99), vec![99, 5]);
    }

    #[test]
    fn test_merge_pair_no_match() {
        assert_eq!(merge_pair(&[1, 2, 3], (7, 8), 99), vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_pair_odd_tail_unmerged() {
        // Trailing 1 matches only the first element of the pair.
        assert_eq!(merge_pair(&[1, 2, 1], (1, 2), 99), vec![99, 1]);
    }

    #[test]
    fn test_merge_pair_empty() {
        assert_eq!(merge_pair(&[], (1, 2), 99), Vec::<u32>::new());
    }

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut table = MergeTable::new();
        assert_eq!(table.push((97, 97)), 256);
        assert_eq!(table.push((256, 98)), 257);

        assert_eq!(table.get((97, 97)), Some((0, 256)));
        assert_eq!(table.get((256, 98)), Some((1, 257)));
        assert_eq!(table.rank((97, 97)), Some(0));
        assert_eq!(table.get((1, 2)), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_serde_preserves_learning_order() {
        let mut table = MergeTable::new();
        table.push((10, 20));
        table.push((256, 30));
        table.push((5, 5));

        let json = serde_json::to_string(&table).unwrap();
        let restored: MergeTable = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.rules(), table.rules());
        assert_eq!(restored.rank((10, 20)), Some(0));
        assert_eq!(restored.rank((256, 30)), Some(1));
        assert_eq!(restored.rank((5, 5)), Some(2));
    }
}
