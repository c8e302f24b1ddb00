//! Scoring functions.

use crate::index::types::FastFuzz;
use fastfuzz_types::WordId;

/// Overlap score of a word against a query.
///
/// The denominator is the larger of the two part counts, so a short query
/// cannot reach 1.0 by partially matching a long word, nor the reverse.
#[inline(always)]
pub fn overlap_score(hits: usize, word_parts: usize, query_parts: usize) -> f64 {
    let denominator = word_parts.max(query_parts);
    if denominator > 0 {
        hits as f64 / denominator as f64
    } else {
        0.0
    }
}

impl FastFuzz {
    #[inline(always)]
    pub(crate) fn compute_score(&self, word_id: WordId, hits: u32, query_parts: usize) -> f64 {
        let word_parts = self
            .words
            .get(word_id as usize)
            .map_or(0, |w| w.num_parts);
        overlap_score(hits as usize, word_parts, query_parts)
    }
}
