//! Fast fuzzy lookup of words in a fixed vocabulary.
//!
//! Words are cut into overlapping parts (every substring within a length
//! window) and indexed by part. A query is cut the same way; words sharing
//! the most parts with it, relative to the larger part count of the two,
//! rank highest. This avoids comparing the query against every word.
//!
//! ```
//! use fastfuzz_core::FastFuzz;
//!
//! let index = FastFuzz::with_words(["preved", "medved", "hello"], 2, 4);
//! let results = index.find("vedpre", 1);
//! assert_eq!(results[0].word, "preved");
//!
//! let encoded = index.serialize_index().unwrap();
//! let restored = FastFuzz::from_serialized(&encoded).unwrap();
//! assert_eq!(restored.find("vedpre", 1), results);
//! ```

pub mod analyzer;
pub mod index;

pub use fastfuzz_types::{
    CodecError, CodecResult, ConfigError, FuzzyMatch, IndexConfig, WordId, WordInfo,
    DEFAULT_MAX_PART_LENGTH, DEFAULT_MIN_PART_LENGTH,
};
pub use index::{BaselineMatch, FastFuzz, IndexStats};
