//! Best-score persistence.
//!
//! A single integer record (`memory_best_moves`) stored as a decimal string in
//! a durable key-value store. Reads never fail the caller: a missing,
//! unreadable, or corrupt record simply means "no best score yet".

pub mod backend;
pub mod best;
pub mod error;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use best::{BestScore, BEST_MOVES_KEY};
pub use error::StoreError;
