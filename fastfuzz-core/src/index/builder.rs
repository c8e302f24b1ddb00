//! Index building logic.

use crate::analyzer::parts::extract_parts;
use crate::index::types::{FastFuzz, WordEntry};
use fastfuzz_types::WordId;
use smallvec::smallvec;

impl FastFuzz {
    /// Builds the index from `vocabulary`.
    ///
    /// ## Fresh vocabulary
    ///
    /// A non-empty vocabulary replaces the stored words entirely. Each word
    /// is normalized; when two words share a normalized form the later one
    /// becomes the stored original, while the key keeps the position of its
    /// first occurrence.
    ///
    /// ## Re-derive
    ///
    /// An empty vocabulary keeps the stored words and only rebuilds the part
    /// entries and part counts from them.
    ///
    /// Either way the part entries are rebuilt from scratch and the index is
    /// marked initialized.
    pub fn build<I, S>(&mut self, vocabulary: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = vocabulary.into_iter().peekable();
        if vocabulary.peek().is_some() {
            self.words.clear();
            self.word_ids.clear();

            let mut norm_buf = String::with_capacity(64);
            for word in vocabulary {
                self.insert_word(word.as_ref(), &mut norm_buf);
            }
        }

        self.rebuild_parts();
        self.initialized = true;

        tracing::debug!(
            words = self.words.len(),
            part_lengths = self.word_parts.len(),
            "fuzzy index built"
        );
    }

    /// Records `original` under its normalized form, last write wins.
    fn insert_word(&mut self, original: &str, norm_buf: &mut String) {
        self.normalizer.normalize_into(original, norm_buf);

        if let Some(&id) = self.word_ids.get(norm_buf.as_str()) {
            self.words[id as usize].original = original.to_owned();
            return;
        }

        debug_assert!(self.words.len() < WordId::MAX as usize, "word id space exhausted");
        let id = self.words.len() as WordId;
        self.words.push(WordEntry {
            normalized: norm_buf.clone(),
            original: original.to_owned(),
            num_parts: 0,
        });
        self.word_ids.insert(norm_buf.clone(), id);
    }

    /// Rebuilds every part entry and part count from the stored words.
    ///
    /// Words are visited in id order, so each member list ends up ascending
    /// and a repeated part within one word only has to be checked against
    /// the last member.
    pub(crate) fn rebuild_parts(&mut self) {
        let Self {
            words,
            word_parts,
            config,
            ..
        } = self;

        word_parts.clear();

        for (id, entry) in words.iter_mut().enumerate() {
            let id = id as WordId;
            let mut num_parts = 0usize;

            extract_parts(
                &entry.normalized,
                config.min_part_length,
                config.max_part_length,
                |part, len| {
                    num_parts += 1;
                    let bucket = word_parts.entry(len).or_default();
                    match bucket.get_mut(part) {
                        Some(members) => {
                            if members.last() != Some(&id) {
                                members.push(id);
                            }
                        }
                        None => {
                            bucket.insert(part.into(), smallvec![id]);
                        }
                    }
                },
            );

            entry.num_parts = num_parts;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::index::types::FastFuzz;

    fn members(index: &FastFuzz, part: &str) -> Vec<u32> {
        index
            .word_parts
            .get(&part.chars().count())
            .and_then(|bucket| bucket.get(part))
            .map(|m| m.to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn parts_point_back_at_words() {
        let mut index = FastFuzz::new();
        index.build(["preved", "medved", "hello"]);

        assert_eq!(members(&index, "ved"), vec![0, 1]);
        assert_eq!(members(&index, "pr"), vec![0]);
        assert_eq!(members(&index, "ello"), vec![2]);
        assert!(members(&index, "xyz").is_empty());
    }

    #[test]
    fn repeated_part_is_stored_once() {
        let mut index = FastFuzz::new();
        index.build(["aaaa"]);

        assert_eq!(members(&index, "aa"), vec![0]);
        // aa x3, aaa x2, aaaa x1
        assert_eq!(index.words[0].num_parts, 6);
    }

    #[test]
    fn last_write_wins_keeps_first_position() {
        let mut index = FastFuzz::new();
        index.build(["Hello!", "world", "HELLO"]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.original("hello"), Some("HELLO"));
        assert_eq!(index.word_ids.get("hello"), Some(&0));
        assert_eq!(index.word_ids.get("world"), Some(&1));
    }

    #[test]
    fn new_vocabulary_replaces_old() {
        let mut index = FastFuzz::new();
        index.build(["preved", "medved"]);
        index.build(["hello"]);

        assert_eq!(index.len(), 1);
        assert!(index.original("preved").is_none());
        assert!(members(&index, "ved").is_empty());
        assert_eq!(members(&index, "hel"), vec![0]);
    }

    #[test]
    fn empty_vocabulary_rederives_parts() {
        let mut index = FastFuzz::new();
        index.build(["preved", "medved"]);
        let before = index.word_parts.clone();

        index.word_parts.clear();
        index.build(Vec::<&str>::new());

        assert_eq!(index.len(), 2);
        assert_eq!(index.word_parts, before);
        assert!(index.is_initialized());
    }

    #[test]
    fn empty_vocabulary_on_fresh_index() {
        let mut index = FastFuzz::new();
        index.build(Vec::<String>::new());
        assert!(index.is_initialized());
        assert!(index.is_empty());
        assert!(index.word_parts.is_empty());
    }

    #[test]
    fn word_normalizing_to_empty_has_no_parts() {
        let mut index = FastFuzz::new();
        index.build(["12345", "abc"]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.original(""), Some("12345"));
        assert_eq!(index.word_info("").map(|i| i.num_parts), Some(0));
    }

    #[test]
    fn short_words_use_clipped_window() {
        let mut index = FastFuzz::new();
        index.build(["a", "ab"]);

        assert_eq!(members(&index, "a"), vec![0]);
        assert_eq!(members(&index, "ab"), vec![1]);
        assert_eq!(index.words[0].num_parts, 1);
        assert_eq!(index.words[1].num_parts, 1);
    }

    #[test]
    fn cyrillic_parts_keyed_by_char_length() {
        let mut index = FastFuzz::new();
        index.build(["Превед"]);

        assert_eq!(members(&index, "вед"), vec![0]);
        assert!(index.word_parts.get(&3).is_some_and(|b| b.contains_key("пре")));
        assert!(index.word_parts.keys().all(|&len| (2..=4).contains(&len)));
    }
}
