//! Part index and lookup.
//!
//! Every vocabulary word is normalized and cut into all parts of the
//! configured length window. Each part maps back to the words containing
//! it; a query is cut the same way and every word sharing parts with it is
//! scored by overlap.
//!
//! Storage:
//! - Words are interned in first-insertion order and addressed by `WordId`
//! - Part entries are grouped by part length, each holding ascending ids
//! - Part counts per word are kept next to the word for scoring
//!
//! Threading:
//! - [`FastFuzz::find`] and [`FastFuzz::serialize_index`] take `&self` and
//!   never mutate, so a built index can be shared across threads. Rebuilding
//!   takes `&mut self`; build a new index and swap it in to keep serving.

mod api;
mod baseline;
mod builder;
mod codec;
mod scoring;
mod search;
mod stats;
mod types;

pub use baseline::{similar_text, BaselineMatch};
pub use scoring::overlap_score;
pub use stats::IndexStats;
pub use types::FastFuzz;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const NAMES: &[&str] = &[
        "Abbott", "Abe", "Addison", "Adrian", "Aiken", "Ainsley", "Al", "Alan", "Alaric", "Alban",
        "Albert", "Albion", "Aldrich", "Alec", "Alex", "Alexander", "Alexis", "Alf", "Alfie",
        "Alfred", "Alger", "Algernon", "Alick", "Allan", "Allen", "Alton", "Alvin", "Ambrose",
        "Andrew", "Andy", "Anthony", "Archer", "Armstrong", "Arnold", "Ashley", "Aston",
        "Atwater", "Aubrey", "Austin", "Avery", "Bailey", "Baldwin", "Barclay", "Barrett",
        "Bartholomew", "Barton", "Basil", "Baxter", "Baz", "Benedict", "Benjamin", "Bennett",
        "Benson", "Bentley", "Berkley", "Bernard", "Bert", "Bill", "Blake", "Bob", "Bobby", "Bond",
        "Brad", "Bradley", "Brent", "Bret", "Brewster", "Brian", "Brigham", "Brooke", "Bruce",
        "Bruno", "Bryant", "Buck", "Bud", "Burgess", "Burton", "Byron", "Cade", "Caesar",
        "Caldwell", "Calvert", "Calvin", "Carl", "Carlton", "Carter", "Carver", "Cary", "Casey",
        "Cassian", "Cecil", "Cedric", "Chad", "Chandler", "Chapman", "Charles", "Charlie",
        "Charlton", "Chase", "Chester", "Chris", "Christian", "Christopher", "Chuck", "Clarence",
        "Claude", "Clay", "Clayton", "Clement", "Cliff", "Clifford", "Clifton", "Clive", "Clyde",
        "Cole", "Coleman", "Colin", "Conrad", "Constant", "Conway", "Corwin", "Courtney", "Craig",
        "Crispin", "Crosby", "Curtis", "Cuthbert", "Cyril",
    ];

    #[test]
    fn transposed_query_finds_preved() {
        let index = FastFuzz::with_words(["preved", "medved", "hello"], 2, 4);
        let results = index.find("vedpre", 1);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "preved");
        assert!(results[0].percent > 0.0 && results[0].percent <= 1.0);
    }

    #[test]
    fn names_top_three() {
        let index = FastFuzz::with_words(NAMES, 2, 4);
        let results = index.find("charter", 3);

        assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            assert!(pair[0].percent >= pair[1].percent);
        }
        assert!(results.iter().all(|r| r.percent <= 1.0 && r.percent > 0.0));

        let unique: HashSet<_> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(unique.len(), 3);
        assert_eq!(results[0].word, "Carter");
    }

    #[test]
    fn find_is_deterministic() {
        let index = FastFuzz::with_words(NAMES, 2, 4);
        for query in ["charter", "alx", "bred", "crist", "zzz"] {
            assert_eq!(index.find(query, 5), index.find(query, 5));
        }
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let index = FastFuzz::with_words(NAMES, 2, 4);
        for query in ["a", "al", "alalalalal", "christopherchristopher", "bobby", "Ccc"] {
            for result in index.find(query, NAMES.len()) {
                assert!(
                    (0.0..=1.0).contains(&result.percent),
                    "{query:?} -> {result}"
                );
            }
        }
    }

    #[test]
    fn self_lookup_scores_one() {
        let index = FastFuzz::with_words(NAMES, 2, 4);
        for name in NAMES {
            let best = index.find_best(name).expect("name should match itself");
            assert_eq!(best.percent, 1.0, "{name}");
        }
    }

    #[test]
    fn result_count_bounded_by_hits() {
        let index = FastFuzz::with_words(["preved", "medved", "hello"], 2, 4);
        assert_eq!(index.find("ved", 100).len(), 2);
        assert_eq!(index.find("hello", 100).len(), 1);
    }

    #[test]
    fn empty_vocabulary_finds_nothing() {
        let mut index = FastFuzz::new();
        index.build(Vec::<&str>::new());
        assert!(index.find("anything", 10).is_empty());
    }

    #[test]
    fn round_trip_preserves_lookups() {
        let index = FastFuzz::with_words(NAMES, 2, 4);
        let encoded = index.serialize_index().expect("should encode");
        let restored = FastFuzz::from_serialized(&encoded).expect("should decode");

        for query in ["charter", "alx", "bred", "crist", "Clifton", ""] {
            assert_eq!(restored.find(query, 5), index.find(query, 5), "{query:?}");
        }
        assert_eq!(restored.stats(), index.stats());
    }

    #[test]
    fn custom_window() {
        let index = FastFuzz::with_words(["preved", "medved"], 3, 6);
        assert_eq!(index.find("preved", 1)[0].percent, 1.0);
        // Six-letter words have no two-letter parts at this window.
        assert!(index.find("ed", 1).is_empty());
    }

    #[test]
    fn clear_resets() {
        let mut index = FastFuzz::with_words(["preved", "medved"], 2, 4);
        index.clear();

        assert!(index.is_empty());
        assert!(!index.is_initialized());
        assert!(index.find("preved", 1).is_empty());
        assert_eq!(index.stats().num_parts, 0);
    }

    #[test]
    fn index_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FastFuzz>();

        let index = std::sync::Arc::new(FastFuzz::with_words(NAMES, 2, 4));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let index = std::sync::Arc::clone(&index);
                std::thread::spawn(move || index.find("charter", 3))
            })
            .collect();

        let expected = index.find("charter", 3);
        for handle in handles {
            assert_eq!(handle.join().expect("thread should finish"), expected);
        }
    }
}
