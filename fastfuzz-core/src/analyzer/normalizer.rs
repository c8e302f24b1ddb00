//! Word normalization.
//!
//! Turns an arbitrary string into the form that is indexed and probed:
//! lowercase basic Latin (`a-z`) and basic Cyrillic (`а-я`) letters only.
//! `ё` is folded onto `е`; everything else (digits, punctuation, whitespace,
//! symbols, other scripts) is dropped.

/// Byte value meaning "drop this ASCII byte".
const DROP: u8 = 0;

const fn build_ascii_fold_table() -> [u8; 128] {
    let mut table = [DROP; 128];
    let mut b = 0u8;
    while b < 128 {
        if b.is_ascii_lowercase() {
            table[b as usize] = b;
        } else if b.is_ascii_uppercase() {
            table[b as usize] = b + (b'a' - b'A');
        }
        b += 1;
    }
    table
}

/// ASCII letters map to their lowercase form, every other byte to [`DROP`].
static ASCII_FOLD_TABLE: [u8; 128] = build_ascii_fold_table();

/// Folds a lowercased character onto the indexed alphabet.
///
/// Returns `None` for characters outside it.
#[inline(always)]
fn fold_char(c: char) -> Option<char> {
    match c {
        'ё' => Some('е'),
        'a'..='z' | 'а'..='я' => Some(c),
        _ => None,
    }
}

/// Normalizer for vocabulary words and queries.
///
/// The transformation is total and idempotent: any input (including the
/// empty string) produces a possibly empty output, and normalizing an
/// already normalized word returns it unchanged.
///
/// # Examples
///
/// ```
/// use fastfuzz_core::analyzer::WordNormalizer;
///
/// let normalizer = WordNormalizer::new();
/// assert_eq!(normalizer.normalize("Hello, World!"), "helloworld");
/// assert_eq!(normalizer.normalize("Ёлка 2024"), "елка");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNormalizer;

impl WordNormalizer {
    /// Creates a normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() {
            let b = bytes[i];
            if b < 128 {
                let folded = ASCII_FOLD_TABLE[b as usize];
                if folded != DROP {
                    out.push(folded as char);
                }
                i += 1;
                continue;
            }

            // Non-ASCII: decode one char starting at a char boundary.
            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();

            for lowered in ch.to_lowercase() {
                if let Some(folded) = fold_char(lowered) {
                    out.push(folded);
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Normalizes a word with the default normalizer.
#[inline]
pub fn normalize_word(input: &str) -> String {
    WordNormalizer::new().normalize(input)
}
