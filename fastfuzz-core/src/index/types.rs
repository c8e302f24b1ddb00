//! Index types and constants.

use std::collections::BTreeMap;

use crate::analyzer::normalizer::WordNormalizer;

use fastfuzz_types::{IndexConfig, WordId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Members of one part entry, ascending by [`WordId`].
pub(crate) type PartMembers = SmallVec<[WordId; 4]>;

/// Part entries of a single part length.
pub(crate) type PartBucket = FxHashMap<Box<str>, PartMembers>;

/// Inline capacity for per-query candidate lists.
pub const CANDIDATE_INLINE: usize = 64;

/// A vocabulary word, addressed by its position in `FastFuzz::words`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordEntry {
    pub normalized: String,
    pub original: String,
    pub num_parts: usize,
}

/// A word that received at least one hit, in encounter order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
    pub word_id: WordId,
    pub hits: u32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ScoredCandidate {
    pub word_id: WordId,
    pub score: f64,
    /// Position in encounter order; breaks score ties.
    pub order: u32,
}

/// Fuzzy word index over a fixed vocabulary.
///
/// Words are interned in first-insertion order. Every part of every word is
/// stored under its length in `word_parts`, pointing back at the ids of the
/// words containing it.
#[derive(Debug, Clone)]
pub struct FastFuzz {
    pub(crate) words: Vec<WordEntry>,
    pub(crate) word_ids: FxHashMap<String, WordId>,
    pub(crate) word_parts: BTreeMap<usize, PartBucket>,
    pub(crate) config: IndexConfig,
    pub(crate) normalizer: WordNormalizer,
    pub(crate) initialized: bool,
}

impl Default for FastFuzz {
    fn default() -> Self {
        Self::new()
    }
}

impl FastFuzz {
    /// Creates a new, empty index with the default part window.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Creates a new, empty index with a custom part window.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            words: Vec::new(),
            word_ids: FxHashMap::default(),
            word_parts: BTreeMap::new(),
            config,
            normalizer: WordNormalizer::new(),
            initialized: false,
        }
    }

    /// Returns the number of distinct normalized words.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the index holds no words.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` once the index has been built or loaded.
    #[inline(always)]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the part window of this index.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Removes all words and parts, keeping the part window.
    pub fn clear(&mut self) {
        self.words.clear();
        self.word_ids.clear();
        self.word_parts.clear();
        self.initialized = false;
    }
}
