//! The best-score record.

use crate::backend::KeyValueStore;

/// Storage key of the record.
pub const BEST_MOVES_KEY: &str = "memory_best_moves";

/// Lowest move count of any finished game, persisted across runs.
#[derive(Debug)]
pub struct BestScore<S> {
    store: S,
}

impl<S: KeyValueStore> BestScore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored best, or `None` if absent, corrupt, or unreadable.
    pub fn read(&self) -> Option<u32> {
        let raw = match self.store.get(BEST_MOVES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("best score unavailable: {}", e);
                return None;
            }
        };

        match raw.trim().parse::<u32>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("ignoring corrupt best score record {:?}", raw);
                None
            }
        }
    }

    /// Persist `candidate` if nothing is stored yet or it beats the stored value.
    ///
    /// Returns whether a new value was persisted. Write failures are logged
    /// and reported as `false`.
    pub fn write_if_better(&mut self, candidate: u32) -> bool {
        if let Some(prior) = self.read() {
            if candidate >= prior {
                return false;
            }
        }

        match self.store.set(BEST_MOVES_KEY, &candidate.to_string()) {
            Ok(()) => {
                log::info!("new best score: {} moves", candidate);
                true
            }
            Err(e) => {
                log::warn!("could not persist best score {}: {}", candidate, e);
                false
            }
        }
    }
}
