//! Statistics and IndexStats.

use crate::index::types::FastFuzz;
use fastfuzz_types::WordId;

/// A snapshot of index statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of distinct normalized words.
    pub num_words: usize,
    /// Number of distinct part lengths with at least one entry.
    pub num_part_lengths: usize,
    /// Number of distinct parts across all lengths.
    pub num_parts: usize,
    /// Total word references stored under all parts.
    pub total_postings: usize,
    /// Total UTF-8 bytes of all part keys.
    pub part_key_bytes: usize,
}

impl FastFuzz {
    /// Returns index statistics.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            num_words: self.words.len(),
            num_part_lengths: self.word_parts.len(),
            num_parts: 0,
            total_postings: 0,
            part_key_bytes: 0,
        };

        for bucket in self.word_parts.values() {
            stats.num_parts += bucket.len();
            for (part, members) in bucket {
                stats.part_key_bytes += part.len();
                stats.total_postings += members.len();
            }
        }

        stats
    }
}

impl IndexStats {
    /// Returns approximate memory usage of the part entries in bytes.
    pub fn memory_usage_bytes(&self) -> usize {
        let postings_size = self.total_postings * std::mem::size_of::<WordId>();
        self.part_key_bytes + postings_size
    }
}

impl core::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} words, {} parts over {} lengths, {} postings",
            self.num_words, self.num_parts, self.num_part_lengths, self.total_postings
        )
    }
}
