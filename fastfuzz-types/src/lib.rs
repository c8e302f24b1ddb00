//! Core types and errors for the fastfuzz word index.
//!
//! This crate holds the value types shared between the index engine and its
//! callers. Keeping them separate means:
//!
//! - **Stable boundaries**: callers depend on result and config types
//!   without pulling in the engine
//! - **One error vocabulary**: configuration and codec failures are spelled
//!   the same way everywhere

#![warn(missing_docs)]

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dense identifier of a normalized vocabulary word.
///
/// Ids are handed out in first-insertion order, so comparing two ids tells
/// which word entered the index first.
pub type WordId = u32;

/// Default lower bound of the part length window.
pub const DEFAULT_MIN_PART_LENGTH: usize = 2;

/// Default upper bound of the part length window.
pub const DEFAULT_MAX_PART_LENGTH: usize = 4;

/// A ranked lookup result: an original vocabulary entry and its similarity.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    /// The vocabulary entry as it was supplied to the index.
    pub word: String,
    /// Similarity in `[0, 1]`, higher is better.
    pub percent: f64,
}

impl FuzzyMatch {
    /// Creates a new match.
    #[inline(always)]
    pub fn new(word: impl Into<String>, percent: f64) -> Self {
        Self {
            word: word.into(),
            percent,
        }
    }
}

impl fmt::Display for FuzzyMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3})", self.word, self.percent)
    }
}

/// Per-word bookkeeping used as the scoring denominator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInfo {
    /// The normalized word.
    pub word: String,
    /// Number of parts generated from the word, repeats included.
    pub num_parts: usize,
}

/// Part length window of an index.
///
/// Both bounds are inclusive and fixed for the lifetime of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Shortest part extracted from a word (at least 1).
    pub min_part_length: usize,
    /// Longest part extracted from a word (greater than the minimum).
    pub max_part_length: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_part_length: DEFAULT_MIN_PART_LENGTH,
            max_part_length: DEFAULT_MAX_PART_LENGTH,
        }
    }
}

impl IndexConfig {
    /// Builds a window, silently falling back to defaults for invalid bounds.
    ///
    /// A minimum below 1 keeps the default minimum. A maximum that does not
    /// exceed the effective minimum keeps the default maximum, raised to
    /// `min + 1` when the default itself would not exceed the minimum. A
    /// minimum with no length above it falls back to the default window.
    /// Use [`IndexConfig::try_new`] to reject invalid bounds instead.
    pub fn new(min_part_length: usize, max_part_length: usize) -> Self {
        let mut config = Self::default();

        if min_part_length >= 1 {
            config.min_part_length = min_part_length;
        } else {
            tracing::warn!(
                requested = min_part_length,
                fallback = config.min_part_length,
                "min part length below 1, keeping default"
            );
        }

        if max_part_length > config.min_part_length {
            config.max_part_length = max_part_length;
        } else {
            let fallback = match config.min_part_length.checked_add(1) {
                Some(above_min) => DEFAULT_MAX_PART_LENGTH.max(above_min),
                None => {
                    // No length fits above usize::MAX; fall back to the default window.
                    tracing::warn!(
                        requested = config.min_part_length,
                        fallback = DEFAULT_MIN_PART_LENGTH,
                        "min part length leaves no room for max, keeping default"
                    );
                    config.min_part_length = DEFAULT_MIN_PART_LENGTH;
                    DEFAULT_MAX_PART_LENGTH
                }
            };
            tracing::warn!(
                requested = max_part_length,
                min = config.min_part_length,
                fallback,
                "max part length must exceed min, keeping default"
            );
            config.max_part_length = fallback;
        }

        config
    }

    /// Builds a window, rejecting invalid bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MinPartTooSmall` if the minimum is 0.
    /// Returns `ConfigError::MaxPartNotAboveMin` if the maximum does not
    /// exceed the minimum.
    pub fn try_new(min_part_length: usize, max_part_length: usize) -> Result<Self, ConfigError> {
        if min_part_length < 1 {
            return Err(ConfigError::MinPartTooSmall {
                min: min_part_length,
            });
        }
        if max_part_length <= min_part_length {
            return Err(ConfigError::MaxPartNotAboveMin {
                min: min_part_length,
                max: max_part_length,
            });
        }
        Ok(Self {
            min_part_length,
            max_part_length,
        })
    }

    /// Returns `true` if the window satisfies `1 <= min < max`.
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.min_part_length >= 1 && self.max_part_length > self.min_part_length
    }
}

/// Invalid part length window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The minimum part length is below 1.
    #[error("min part length must be at least 1, got {min}")]
    MinPartTooSmall {
        /// The rejected minimum.
        min: usize,
    },
    /// The maximum part length does not exceed the minimum.
    #[error("max part length {max} must exceed min part length {min}")]
    MaxPartNotAboveMin {
        /// The minimum in effect.
        min: usize,
        /// The rejected maximum.
        max: usize,
    },
}

/// Failure to encode or decode a serialized index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The in-memory index cannot be represented; nothing was produced.
    #[error("failed to encode index: {0}")]
    Encoding(String),
    /// The input is not a valid serialized index; the receiver is unchanged.
    #[error("failed to decode index: {0}")]
    Decoding(String),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
