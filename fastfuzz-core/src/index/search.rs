//! Search algorithm logic.

use crate::analyzer::parts::extract_parts;
use crate::index::types::{Candidate, FastFuzz, ScoredCandidate, CANDIDATE_INLINE};
use fastfuzz_types::{FuzzyMatch, WordId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Descending score, then encounter order.
#[inline(always)]
fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> core::cmp::Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.order.cmp(&b.order))
}

impl FastFuzz {
    /// Returns up to `top_k` vocabulary words most similar to `query`.
    ///
    /// Every query part found in the index adds one hit to each word that
    /// contains it, once per occurrence in the query. Scores are hits over
    /// the larger of the word's and the query's part counts. Ties keep the
    /// order in which words first received a hit.
    ///
    /// Never pads: words without any hit are not returned.
    pub fn find(&self, query: &str, top_k: usize) -> Vec<FuzzyMatch> {
        if top_k == 0 || self.is_empty() {
            return Vec::new();
        }

        let mut query_buf = String::with_capacity(query.len());
        self.normalizer.normalize_into(query, &mut query_buf);
        if query_buf.is_empty() {
            return Vec::new();
        }

        let mut slots: FxHashMap<WordId, u32> = FxHashMap::default();
        let mut candidates: SmallVec<[Candidate; CANDIDATE_INLINE]> = SmallVec::new();
        let mut query_parts = 0usize;

        extract_parts(
            &query_buf,
            self.config.min_part_length,
            self.config.max_part_length,
            |part, len| {
                query_parts += 1;
                let Some(members) = self.word_parts.get(&len).and_then(|b| b.get(part)) else {
                    return;
                };
                for &word_id in members {
                    let slot = *slots.entry(word_id).or_insert_with(|| {
                        candidates.push(Candidate { word_id, hits: 0 });
                        (candidates.len() - 1) as u32
                    });
                    candidates[slot as usize].hits += 1;
                }
            },
        );

        if candidates.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .enumerate()
            .map(|(order, c)| ScoredCandidate {
                word_id: c.word_id,
                score: self.compute_score(c.word_id, c.hits, query_parts),
                order: order as u32,
            })
            .collect();

        if scored.len() > top_k {
            scored.select_nth_unstable_by(top_k, rank_order);
            scored.truncate(top_k);
        }
        scored.sort_unstable_by(rank_order);

        scored
            .into_iter()
            .filter_map(|s| {
                self.words
                    .get(s.word_id as usize)
                    .map(|w| FuzzyMatch::new(w.original.as_str(), s.score))
            })
            .collect()
    }

    /// Returns the single best match, if any word shares a part with `query`.
    #[inline]
    pub fn find_best(&self, query: &str) -> Option<FuzzyMatch> {
        self.find(query, 1).into_iter().next()
    }

    /// Runs [`FastFuzz::find`] for each query.
    pub fn find_many<I, S>(&self, queries: I, top_k: usize) -> Vec<Vec<FuzzyMatch>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        queries
            .into_iter()
            .map(|q| self.find(q.as_ref(), top_k))
            .collect()
    }
}
