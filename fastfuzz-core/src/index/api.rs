//! Public API for constructing the index and reading stored words.

use crate::index::types::FastFuzz;
use fastfuzz_types::{IndexConfig, WordInfo};

impl FastFuzz {
    /// Creates an index over `vocabulary` with the given part window.
    ///
    /// Invalid bounds fall back to defaults as described on
    /// [`IndexConfig::new`]. An empty vocabulary leaves the index unbuilt.
    pub fn with_words<I, S>(vocabulary: I, min_part_length: usize, max_part_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::with_config(IndexConfig::new(min_part_length, max_part_length));
        let mut vocabulary = vocabulary.into_iter().peekable();
        if vocabulary.peek().is_some() {
            index.build(vocabulary);
        }
        index
    }

    /// Normalizes `text` the way words and queries are normalized.
    #[inline]
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Returns the original word stored for a normalized key.
    #[inline]
    pub fn original(&self, normalized: &str) -> Option<&str> {
        let id = *self.word_ids.get(normalized)?;
        self.words.get(id as usize).map(|w| w.original.as_str())
    }

    /// Returns the bookkeeping for a normalized key.
    pub fn word_info(&self, normalized: &str) -> Option<WordInfo> {
        let id = *self.word_ids.get(normalized)?;
        self.words.get(id as usize).map(|w| WordInfo {
            word: w.normalized.clone(),
            num_parts: w.num_parts,
        })
    }

    /// Iterates over `(normalized, original)` pairs in insertion order.
    pub fn words(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.words
            .iter()
            .map(|w| (w.normalized.as_str(), w.original.as_str()))
    }
}
