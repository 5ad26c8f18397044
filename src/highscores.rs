//! Best-score persistence
//!
//! Stored as a plain decimal integer under `flappyHighScore`, so scores saved
//! by the classic page carry over.

use crate::hooks::ScoreStore;
use crate::persistence::KeyValueStore;

/// Storage key for the best score
pub const STORAGE_KEY: &str = "flappyHighScore";

/// `ScoreStore` backed by any key/value store
#[derive(Debug, Clone, Default)]
pub struct BestScoreStore<S> {
    store: S,
}

impl<S: KeyValueStore> BestScoreStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Parse a stored best score; garbage and negatives read as 0
pub fn parse_best(raw: &str) -> u32 {
    let raw = raw.trim();
    raw.parse::<u32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).map(|v| v as u32))
        .unwrap_or(0)
}

impl<S: KeyValueStore> ScoreStore for BestScoreStore<S> {
    fn load_best_score(&mut self) -> u32 {
        match self.store.get(STORAGE_KEY) {
            Some(raw) => {
                let best = parse_best(&raw);
                log::info!("Loaded best score {}", best);
                best
            }
            None => {
                log::info!("No best score found, starting fresh");
                0
            }
        }
    }

    fn save_best_score(&mut self, score: u32) {
        match self.store.set(STORAGE_KEY, &score.to_string()) {
            Ok(()) => log::info!("Best score saved ({})", score),
            Err(e) => log::warn!("Could not save best score: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, StorageError};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_save_then_load() {
        let mut scores = BestScoreStore::new(MemoryStore::new());
        assert_eq!(scores.load_best_score(), 0);
        scores.save_best_score(17);
        assert_eq!(scores.load_best_score(), 17);
        assert_eq!(scores.into_inner().get(STORAGE_KEY).as_deref(), Some("17"));
    }

    #[test]
    fn test_parse_best() {
        assert_eq!(parse_best("42"), 42);
        assert_eq!(parse_best(" 7\n"), 7);
        assert_eq!(parse_best("12.0"), 12);
        assert_eq!(parse_best("-3"), 0);
        assert_eq!(parse_best("lots"), 0);
        assert_eq!(parse_best(""), 0);
    }

    #[test]
    fn test_broken_store_is_not_fatal() {
        let mut scores = BestScoreStore::new(BrokenStore);
        scores.save_best_score(9);
        assert_eq!(scores.load_best_score(), 0);
    }
}
