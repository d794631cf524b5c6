//! Storage abstraction for cards
//!
//! This module defines the `CardStore` trait that abstracts over storage
//! backends. Implementations:
//!
//! - **File**: one JSON file per card in a data directory (`FileStore`)
//! - **Memory**: in-memory storage for tests and scratch servers (`MemoryStore`)
//!
//! # Example
//!
//! ```rust
//! use bingo_core::card::{CardDraft, Prediction};
//! use bingo_core::storage::{CardStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let card = store
//!     .create(CardDraft::new("Finals").prediction(Prediction::new("A")))
//!     .unwrap();
//!
//! let fetched = store.get(card.id.as_str()).unwrap();
//! assert_eq!(fetched, card);
//! ```

mod error;
mod file;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::{CardStore, MAX_ID_ATTEMPTS};
