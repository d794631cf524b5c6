//! Storage trait definitions

use crate::card::{Card, CardDraft, CardId, CardSummary};
use crate::storage::error::{StoreError, StoreResult};

/// How many fresh ids `create` draws before giving up on collisions.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Create, read, update and list operations for cards.
///
/// Backends take `&self` and are shared across request handlers behind an
/// `Arc`; any interior state must do its own locking. There is no delete.
pub trait CardStore: Send + Sync {
    /// Persist a new card under a freshly generated id.
    ///
    /// The id is never taken from the caller. Ids that already name a record
    /// are discarded and redrawn, up to [`MAX_ID_ATTEMPTS`] times.
    fn create(&self, draft: CardDraft) -> StoreResult<Card>;

    /// Retrieve a card by id.
    ///
    /// Returns `StoreError::NotFound` if no record exists.
    fn get(&self, id: &str) -> StoreResult<Card>;

    /// Replace an existing card.
    ///
    /// This is a full overwrite: the stored name and predictions become exactly
    /// those in `draft`; nothing from the previous version is merged in.
    /// Returns `StoreError::NotFound` (and writes nothing) if the card doesn't
    /// exist.
    fn update(&self, id: &str, draft: CardDraft) -> StoreResult<Card>;

    /// Summaries of every card, ordered by case-insensitive name then id.
    fn list(&self) -> StoreResult<Vec<CardSummary>>;

    /// Check if a card exists.
    fn exists(&self, id: &str) -> StoreResult<bool> {
        match self.get(id) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Draw ids until `taken` reports a free one.
pub(crate) fn allocate_id<F>(mut taken: F) -> StoreResult<CardId>
where
    F: FnMut(&CardId) -> StoreResult<bool>,
{
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = CardId::generate();
        if !taken(&id)? {
            return Ok(id);
        }
        tracing::warn!("generated card id {} collides with an existing record", id);
    }
    Err(StoreError::IdExhausted(MAX_ID_ATTEMPTS))
}
