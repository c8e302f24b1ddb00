//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Reduces raw text to lowercase Latin and Cyrillic letters
//! - **Parts**: Cuts normalized words into every substring of the window

pub mod normalizer;
pub mod parts;

pub use normalizer::{normalize_word, WordNormalizer};
pub use parts::{count_parts, extract_parts, get_parts};
