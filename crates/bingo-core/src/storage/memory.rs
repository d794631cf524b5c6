//! In-memory storage backend
//!
//! A simple map-based implementation for testing and development.
//! Not suitable for production use due to lack of persistence.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::info;

use crate::card::{sort_summaries, Card, CardDraft, CardId, CardSummary};
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::traits::{allocate_id, CardStore};

/// In-memory card store.
///
/// Useful for:
/// - Gateway tests that don't care about the filesystem
/// - Throwaway development servers (`--in-memory`)
#[derive(Debug, Default)]
pub struct MemoryStore {
    cards: RwLock<BTreeMap<CardId, Card>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with initial cards, keeping their ids.
    pub fn with_cards(cards: Vec<Card>) -> Self {
        let store = Self::new();
        {
            let mut map = store.cards.write();
            for card in cards {
                map.insert(card.id.clone(), card);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.cards.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.read().is_empty()
    }
}

impl CardStore for MemoryStore {
    fn create(&self, draft: CardDraft) -> StoreResult<Card> {
        let mut cards = self.cards.write();
        let id = allocate_id(|id| Ok(cards.contains_key(id)))?;
        let card = Card::from_draft(id.clone(), draft);
        cards.insert(id, card.clone());
        info!("created card {}", card.id);
        Ok(card)
    }

    fn get(&self, id: &str) -> StoreResult<Card> {
        let key = CardId::parse(id).map_err(|_| StoreError::NotFound(id.to_string()))?;
        self.cards
            .read()
            .get(&key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn update(&self, id: &str, draft: CardDraft) -> StoreResult<Card> {
        let key = CardId::parse(id).map_err(|_| StoreError::NotFound(id.to_string()))?;
        let mut cards = self.cards.write();
        let slot = cards
            .get_mut(&key)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = Card::from_draft(key, draft);
        info!("updated card {}", id);
        Ok(slot.clone())
    }

    fn list(&self) -> StoreResult<Vec<CardSummary>> {
        let mut summaries: Vec<CardSummary> =
            self.cards.read().values().map(CardSummary::from).collect();
        sort_summaries(&mut summaries);
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Prediction;

    #[test]
    fn test_create_then_get() {
        let store = MemoryStore::new();
        let card = store
            .create(CardDraft::new("Finals").prediction(Prediction::new("A")))
            .unwrap();
        assert!(card.id.is_canonical());
        assert_eq!(store.get(card.id.as_str()).unwrap(), card);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_missing_does_not_insert() {
        let store = MemoryStore::new();
        let err = store.update("deadbeef", CardDraft::new("x")).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_id_is_not_found() {
        let store = MemoryStore::new();
        assert!(store.get("../nope").unwrap_err().is_not_found());
        assert!(!store.exists("../nope").unwrap());
    }

    #[test]
    fn test_with_cards_keeps_ids() {
        let card = Card::from_draft(CardId::parse("cafe0001").unwrap(), CardDraft::new("x"));
        let store = MemoryStore::with_cards(vec![card.clone()]);
        assert_eq!(store.get("cafe0001").unwrap(), card);
    }
}
