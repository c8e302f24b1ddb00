//! Part extraction.
//!
//! A part is a contiguous run of characters of a normalized word. Words are
//! cut into every part whose length lies in the index's window
//! `[min, max]`, with the window clipped to the word's own length.
//!
//! Lengths and offsets are counted in characters, so a Cyrillic letter
//! (two UTF-8 bytes) is one unit just like a Latin one.

use smallvec::SmallVec;

/// Byte offsets of every char boundary of `word`, end included.
#[inline]
fn char_boundaries(word: &str) -> SmallVec<[usize; 32]> {
    let mut bounds: SmallVec<[usize; 32]> = word.char_indices().map(|(i, _)| i).collect();
    bounds.push(word.len());
    bounds
}

/// Clips the `[min, max]` window to a word of `word_len` characters.
#[inline(always)]
fn clipped_window(word_len: usize, min: usize, max: usize) -> (usize, usize) {
    (min.min(word_len), max.min(word_len))
}

/// Emits every part of `word` with its length in characters.
///
/// Parts are emitted by increasing size, then increasing offset. Each part
/// borrows from `word`. An empty word emits nothing.
///
/// # Example
///
/// ```
/// use fastfuzz_core::analyzer::parts::extract_parts;
///
/// let mut parts = Vec::new();
/// extract_parts("hello", 2, 4, |part, _| parts.push(part));
///
/// assert_eq!(parts.len(), 9); // 4 pairs, 3 triples, 2 quads
/// assert_eq!(parts[0], "he");
/// assert_eq!(parts[8], "ello");
/// ```
#[inline]
pub fn extract_parts<'a, F>(word: &'a str, min: usize, max: usize, mut callback: F)
where
    F: FnMut(&'a str, usize),
{
    if word.is_empty() {
        return;
    }

    let bounds = char_boundaries(word);
    let word_len = bounds.len() - 1;
    let (min_len, max_len) = clipped_window(word_len, min, max);

    for size in min_len..=max_len {
        if size == 0 {
            continue;
        }
        for start in 0..=word_len - size {
            callback(&word[bounds[start]..bounds[start + size]], size);
        }
    }
}

/// Collects the parts of `word` in extraction order.
pub fn get_parts(word: &str, min: usize, max: usize) -> Vec<&str> {
    let mut parts = Vec::with_capacity(count_parts(word.chars().count(), min, max));
    extract_parts(word, min, max, |part, _| parts.push(part));
    parts
}

/// Counts the parts of a word of `word_len` characters without extracting.
#[inline]
pub fn count_parts(word_len: usize, min: usize, max: usize) -> usize {
    let (min_len, max_len) = clipped_window(word_len, min, max);
    (min_len.max(1)..=max_len)
        .map(|size| word_len - size + 1)
        .sum()
}
