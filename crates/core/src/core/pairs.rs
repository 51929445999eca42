//! Adjacent pair statistics for BPE.
//!
//! Training and encoding both work over the same primitive: a count of
//! every adjacent token pair in a sequence. The functions here are total
//! over their input domain and never fail.

use ahash::AHashMap;

/// A pair of adjacent token IDs.
pub type Pair = (u32, u32);

/// Pair -> occurrence count over a token sequence.
pub type PairCounts = AHashMap<Pair, u64>;

/// Count every adjacent pair in `ids`.
///
/// Sequences of length 0 or 1 have no adjacent pairs and yield an empty
/// map. Overlapping occurrences are all counted: `[5, 5, 5]` contains the
/// pair `(5, 5)` at positions 0 and 1, giving a count of 2.
pub fn pair_counts(ids: &[u32]) -> PairCounts {
    let mut counts = PairCounts::with_capacity(ids.len());

    for window in ids.windows(2) {
        *counts.entry((window[0], window[1])).or_insert(0) += 1;
    }

    counts
}

/// Select the most frequent pair from a count map.
///
/// Ties on the count are broken by the numerically smallest pair, so the
/// result does not depend on hash iteration order and is reproducible
/// across runs and platforms. Returns `None` for an empty map.
pub fn most_frequent_pair(counts: &PairCounts) -> Option<Pair> {
    counts
        .iter()
        .max_by(|(pair_a, count_a), (pair_b, count_b)| {
            count_a.cmp(count_b).then_with(|| pair_b.cmp(pair_a))
        })
        .map(|(&pair, _)| pair)
}
