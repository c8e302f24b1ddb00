//! Index serialization.
//!
//! The encoded form is a UTF-8 JSON object with exactly these fields:
//!
//! ```text
//! {
//!   "words":           [[normalized, original], ...]      // insertion order
//!   "word_parts":      { "<len>": { "<part>": [normalized, ...] } }
//!   "min_part_length": 2,
//!   "max_part_length": 4,
//!   "initialized":     true,
//!   "word_info":       { "<normalized>": { "word": ..., "num_parts": ... } }
//! }
//! ```
//!
//! Words are a list rather than an object so their order, which decides
//! score ties, survives the round trip. Non-Latin text is written as-is.

use std::collections::BTreeMap;

use crate::index::types::{FastFuzz, PartMembers, WordEntry};
use fastfuzz_types::{CodecError, CodecResult, IndexConfig, WordId, WordInfo};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct EncodedIndex<'a> {
    words: Vec<(&'a str, &'a str)>,
    word_parts: BTreeMap<usize, BTreeMap<&'a str, Vec<&'a str>>>,
    min_part_length: usize,
    max_part_length: usize,
    initialized: bool,
    word_info: BTreeMap<&'a str, EncodedWordInfo<'a>>,
}

#[derive(Serialize)]
struct EncodedWordInfo<'a> {
    word: &'a str,
    num_parts: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DecodedIndex {
    words: Vec<(String, String)>,
    word_parts: BTreeMap<usize, BTreeMap<String, Vec<String>>>,
    min_part_length: usize,
    max_part_length: usize,
    initialized: bool,
    word_info: BTreeMap<String, WordInfo>,
}

fn decoding(reason: impl Into<String>) -> CodecError {
    CodecError::Decoding(reason.into())
}

fn encoding(reason: impl Into<String>) -> CodecError {
    CodecError::Encoding(reason.into())
}

impl DecodedIndex {
    /// Validates the decoded fields and assembles a fresh index from them.
    fn into_index(self) -> CodecResult<FastFuzz> {
        let config = IndexConfig::try_new(self.min_part_length, self.max_part_length)
            .map_err(|e| decoding(e.to_string()))?;
        let mut index = FastFuzz::with_config(config);
        let mut word_info = self.word_info;

        for (normalized, original) in self.words {
            if index.word_ids.contains_key(&normalized) {
                return Err(decoding(format!("duplicate word {normalized:?}")));
            }
            if index.normalizer.normalize(&normalized) != normalized {
                return Err(decoding(format!("word {normalized:?} is not normalized")));
            }
            let info = word_info
                .remove(&normalized)
                .ok_or_else(|| decoding(format!("missing word info for {normalized:?}")))?;
            if info.word != normalized {
                return Err(decoding(format!(
                    "word info {:?} filed under {normalized:?}",
                    info.word
                )));
            }

            let id = WordId::try_from(index.words.len())
                .map_err(|_| decoding("too many words"))?;
            index.words.push(WordEntry {
                normalized: normalized.clone(),
                original,
                num_parts: info.num_parts,
            });
            index.word_ids.insert(normalized, id);
        }

        if let Some(stray) = word_info.keys().next() {
            return Err(decoding(format!("word info for unknown word {stray:?}")));
        }

        for (len, parts) in self.word_parts {
            if len == 0 {
                return Err(decoding("part length 0"));
            }
            let bucket = index.word_parts.entry(len).or_default();
            for (part, members) in parts {
                if part.chars().count() != len {
                    return Err(decoding(format!("part {part:?} filed under length {len}")));
                }
                let mut ids = members
                    .iter()
                    .map(|word| {
                        index.word_ids.get(word.as_str()).copied().ok_or_else(|| {
                            decoding(format!("part {part:?} refers to unknown word {word:?}"))
                        })
                    })
                    .collect::<CodecResult<PartMembers>>()?;
                ids.sort_unstable();
                ids.dedup();
                bucket.insert(part.into_boxed_str(), ids);
            }
        }

        index.initialized = self.initialized;
        Ok(index)
    }
}

impl FastFuzz {
    /// Serializes the full index state to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Encoding` if the in-memory state is inconsistent
    /// (for example a part refers to a word that does not exist). No partial
    /// output is produced.
    pub fn serialize_index(&self) -> CodecResult<String> {
        self.check_consistent()?;

        let words: Vec<(&str, &str)> = self
            .words
            .iter()
            .map(|w| (w.normalized.as_str(), w.original.as_str()))
            .collect();

        let word_parts: BTreeMap<usize, BTreeMap<&str, Vec<&str>>> = self
            .word_parts
            .iter()
            .map(|(&len, bucket)| {
                let parts: BTreeMap<&str, Vec<&str>> = bucket
                    .iter()
                    .map(|(part, members)| {
                        let words: Vec<&str> = members
                            .iter()
                            .map(|&id| self.words[id as usize].normalized.as_str())
                            .collect();
                        (&**part, words)
                    })
                    .collect();
                (len, parts)
            })
            .collect();

        let word_info: BTreeMap<&str, EncodedWordInfo<'_>> = self
            .words
            .iter()
            .map(|w| {
                (
                    w.normalized.as_str(),
                    EncodedWordInfo {
                        word: w.normalized.as_str(),
                        num_parts: w.num_parts,
                    },
                )
            })
            .collect();

        let encoded = EncodedIndex {
            words,
            word_parts,
            min_part_length: self.config.min_part_length,
            max_part_length: self.config.max_part_length,
            initialized: self.initialized,
            word_info,
        };

        serde_json::to_string(&encoded).map_err(|e| encoding(e.to_string()))
    }

    /// Replaces this index with one decoded from `encoded`.
    ///
    /// The whole input is parsed and validated before anything is replaced.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Decoding` if the input is malformed, incomplete
    /// or inconsistent. The index is left exactly as it was.
    pub fn deserialize_index(&mut self, encoded: &str) -> CodecResult<()> {
        *self = Self::from_serialized(encoded)?;
        Ok(())
    }

    /// Decodes a new index from a string produced by
    /// [`FastFuzz::serialize_index`].
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Decoding` if the input is not a valid index.
    pub fn from_serialized(encoded: &str) -> CodecResult<Self> {
        let decoded: DecodedIndex =
            serde_json::from_str(encoded).map_err(|e| decoding(e.to_string()))?;
        let index = decoded.into_index()?;

        tracing::debug!(
            words = index.words.len(),
            part_lengths = index.word_parts.len(),
            "fuzzy index decoded"
        );

        Ok(index)
    }

    fn check_consistent(&self) -> CodecResult<()> {
        if !self.config.is_valid() {
            return Err(encoding(format!(
                "invalid part window [{}, {}]",
                self.config.min_part_length, self.config.max_part_length
            )));
        }
        if self.word_ids.len() != self.words.len() {
            return Err(encoding("word lookup out of sync with word list"));
        }

        let word_count = self.words.len();
        for (len, bucket) in &self.word_parts {
            for (part, members) in bucket {
                if let Some(&id) = members.iter().find(|&&id| id as usize >= word_count) {
                    return Err(encoding(format!(
                        "part {part:?} of length {len} refers to missing word id {id}"
                    )));
                }
            }
        }
        Ok(())
    }
}
