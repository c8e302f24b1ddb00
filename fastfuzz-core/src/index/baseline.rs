//! Brute-force reference lookups.
//!
//! These scan every indexed word and exist to measure the part index
//! against. They are far slower than [`FastFuzz::find`] and return
//! normalized words rather than originals.

use crate::index::types::FastFuzz;
use strsim::levenshtein;

/// Result of a brute-force lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineMatch {
    /// The normalized vocabulary word.
    pub word: String,
    /// Comparator-specific score, higher is better.
    pub score: f64,
}

/// Number of characters shared by `a` and `b`.
///
/// Finds the longest common run, then recurses into the text left and right
/// of it on both sides.
pub fn similar_text(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    common_chars(&a, &b)
}

fn common_chars(a: &[char], b: &[char]) -> usize {
    let (mut pos_a, mut pos_b, mut max) = (0usize, 0usize, 0usize);

    for i in 0..a.len() {
        for j in 0..b.len() {
            let run = a[i..]
                .iter()
                .zip(&b[j..])
                .take_while(|(x, y)| x == y)
                .count();
            if run > max {
                (pos_a, pos_b, max) = (i, j, run);
            }
        }
    }

    if max == 0 {
        return 0;
    }

    max + common_chars(&a[..pos_a], &b[..pos_b])
        + common_chars(&a[pos_a + max..], &b[pos_b + max..])
}

/// Sorts by descending score, keeping index order for ties, and truncates.
fn rank(mut matches: Vec<BaselineMatch>, top_k: usize) -> Vec<BaselineMatch> {
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(top_k);
    matches
}

impl FastFuzz {
    /// Ranks every word by edit distance to `query`.
    ///
    /// Score is `1 - distance / max_distance` over all words, or 0 when every
    /// word is at distance 0.
    pub fn find_by_levenshtein(&self, query: &str, top_k: usize) -> Vec<BaselineMatch> {
        let query = self.normalize(query);

        let distances: Vec<(&str, usize)> = self
            .words
            .iter()
            .map(|w| (w.normalized.as_str(), levenshtein(&query, &w.normalized)))
            .collect();
        let max_distance = distances.iter().map(|&(_, d)| d).max().unwrap_or(0);

        let matches = distances
            .into_iter()
            .map(|(word, distance)| BaselineMatch {
                word: word.to_owned(),
                score: if max_distance == 0 {
                    0.0
                } else {
                    1.0 - distance as f64 / max_distance as f64
                },
            })
            .collect();

        rank(matches, top_k)
    }

    /// Ranks every word by the number of characters it shares with `query`.
    pub fn find_by_similar_text(&self, query: &str, top_k: usize) -> Vec<BaselineMatch> {
        let query = self.normalize(query);

        let matches = self
            .words
            .iter()
            .map(|w| BaselineMatch {
                word: w.normalized.clone(),
                score: similar_text(&query, &w.normalized) as f64,
            })
            .collect();

        rank(matches, top_k)
    }
}
