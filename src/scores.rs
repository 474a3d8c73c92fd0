use log::warn;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Storage key for the single all-time best score, string-encoded.
pub const BEST_SCORE_KEY: &str = "bestScore";
/// Storage key for the named leaderboard, a JSON array.
pub const TOP_SCORES_KEY: &str = "topScores";

pub const MAX_ENTRIES: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

/// The all-time best score plus the named top-10 list. Loaded once at
/// startup; every mutation is written back to the store immediately,
/// with write failures logged and otherwise ignored.
pub struct ScoreBook {
    pub best: u32,
    pub top: Vec<HighScoreEntry>,
}

impl ScoreBook {
    /// Missing or unparsable records read as an empty book.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = store
            .get(BEST_SCORE_KEY)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);
        let top = store
            .get(TOP_SCORES_KEY)
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        ScoreBook { best, top }
    }

    pub fn is_new_best(&self, score: u32) -> bool {
        score > self.best
    }

    pub fn record_best(&mut self, score: u32, store: &mut dyn KeyValueStore) {
        self.best = score;
        if let Err(err) = store.set(BEST_SCORE_KEY, &score.to_string()) {
            warn!("failed to persist best score: {:#}", err);
        }
    }

    /// Add a named entry, keep the list sorted by score descending and
    /// capped at [`MAX_ENTRIES`], and write it back.
    pub fn record_entry(&mut self, name: &str, score: u32, store: &mut dyn KeyValueStore) {
        self.top.push(HighScoreEntry {
            name: name.to_string(),
            score,
        });
        self.top.sort_by(|a, b| b.score.cmp(&a.score));
        self.top.truncate(MAX_ENTRIES);

        match serde_json::to_string(&self.top) {
            Ok(json) => {
                if let Err(err) = store.set(TOP_SCORES_KEY, &json) {
                    warn!("failed to persist leaderboard: {:#}", err);
                }
            }
            Err(err) => warn!("failed to encode leaderboard: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn empty_store_loads_as_empty_book() {
        let store = MemoryStore::default();
        let book = ScoreBook::load(&store);
        assert_eq!(book.best, 0);
        assert!(book.top.is_empty());
    }

    #[test]
    fn corrupt_records_load_as_empty_book() {
        let mut store = MemoryStore::default();
        store.set(BEST_SCORE_KEY, "over nine thousand").unwrap();
        store.set(TOP_SCORES_KEY, "{ nope").unwrap();
        let book = ScoreBook::load(&store);
        assert_eq!(book.best, 0);
        assert!(book.top.is_empty());
    }

    #[test]
    fn new_best_is_strictly_greater() {
        let book = ScoreBook { best: 5, top: vec![] };
        assert!(!book.is_new_best(4));
        assert!(!book.is_new_best(5));
        assert!(book.is_new_best(6));
    }

    #[test]
    fn best_score_round_trips_through_the_store() {
        let mut store = MemoryStore::default();
        let mut book = ScoreBook::load(&store);
        book.record_best(7, &mut store);

        let reloaded = ScoreBook::load(&store);
        assert_eq!(reloaded.best, 7);
    }

    #[test]
    fn entries_stay_sorted_and_capped() {
        let mut store = MemoryStore::default();
        let mut book = ScoreBook::load(&store);
        for i in 0..12 {
            book.record_entry(&format!("p{}", i), i, &mut store);
        }
        assert_eq!(book.top.len(), MAX_ENTRIES);
        assert_eq!(book.top[0].score, 11);
        assert!(book
            .top
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));

        // the persisted copy matches the in-memory one
        let reloaded = ScoreBook::load(&store);
        assert_eq!(reloaded.top, book.top);
    }

    #[test]
    fn new_best_flow_records_name_and_score() {
        let mut store = MemoryStore::default();
        store.set(BEST_SCORE_KEY, "5").unwrap();

        let mut book = ScoreBook::load(&store);
        assert!(book.is_new_best(7));
        book.record_best(7, &mut store);
        book.record_entry("Ana", 7, &mut store);

        assert_eq!(store.get(BEST_SCORE_KEY).as_deref(), Some("7"));
        let reloaded = ScoreBook::load(&store);
        assert_eq!(reloaded.best, 7);
        assert_eq!(
            reloaded.top,
            vec![HighScoreEntry {
                name: "Ana".to_string(),
                score: 7
            }]
        );
    }
}
