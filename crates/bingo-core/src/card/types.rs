//! Card type definitions

use serde::{Deserialize, Deserializer, Serialize};

use super::id::CardId;

/// One item on a bingo card.
///
/// Predictions have no identity of their own; they are addressed by their
/// position in the owning card's `predictions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Outcome: `None` while undecided, then `Some(true)` or `Some(false)`.
    #[serde(default)]
    pub state: Option<bool>,

    #[serde(default)]
    pub note: Option<String>,
}

impl Prediction {
    /// An undecided prediction with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            state: None,
            note: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn state(mut self, state: bool) -> Self {
        self.state = Some(state);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A named, ordered sequence of predictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub predictions: Vec<Prediction>,
}

impl Card {
    /// Build a card from a client payload and a store-assigned id.
    pub fn from_draft(id: CardId, draft: CardDraft) -> Self {
        Self {
            id,
            name: draft.name,
            predictions: draft.predictions,
        }
    }
}

/// Client payload for both create and update.
///
/// There is no `id` field: identity is always assigned by the store, and an
/// `id` sent by a client is ignored. `name` is required here even though
/// stored records may lack it. Prediction names are taken as sent, blanks
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardDraft {
    pub name: String,
    pub predictions: Vec<Prediction>,
}

impl CardDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predictions: Vec::new(),
        }
    }

    /// Append a prediction, keeping submission order.
    pub fn prediction(mut self, prediction: Prediction) -> Self {
        self.predictions.push(prediction);
        self
    }
}

/// Row returned by a card listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub count: usize,
}

impl CardSummary {
    /// Listing order: case-insensitive name, then id. Empty names sort first.
    pub fn sort_key(&self) -> (String, &str) {
        (self.name.to_lowercase(), self.id.as_str())
    }
}

impl From<&Card> for CardSummary {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name.clone(),
            count: card.predictions.len(),
        }
    }
}

/// Sort summaries into listing order in place.
pub fn sort_summaries(summaries: &mut [CardSummary]) {
    summaries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
