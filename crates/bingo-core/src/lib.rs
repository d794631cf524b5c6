//! Bingo card core
//!
//! Data model and persistence for bingo cards: named, ordered lists of
//! predictions whose outcomes get filled in over time.
//!
//! - `card` - `Card`, `Prediction`, `CardDraft`, `CardSummary`, `CardId`
//! - `storage` - `CardStore` trait with file-per-record and in-memory backends

pub mod card;
pub mod storage;

// Re-export main types at crate root
pub use card::{Card, CardDraft, CardId, CardSummary, Prediction};
pub use storage::{CardStore, FileStore, MemoryStore, StoreError, StoreResult};
