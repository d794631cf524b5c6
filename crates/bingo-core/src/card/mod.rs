//! Bingo card data model
//!
//! A card is a named, ordered list of predictions. Each prediction carries an
//! optional outcome (`state`) and note.
//!
//! # Example
//!
//! ```rust
//! use bingo_core::card::{CardDraft, Prediction};
//!
//! let draft = CardDraft::new("Finals")
//!     .prediction(Prediction::new("Overtime").description("Game goes to OT"))
//!     .prediction(Prediction::new("Shutout").state(false));
//!
//! assert_eq!(draft.predictions.len(), 2);
//! ```

mod id;
mod types;

pub use id::{CardId, InvalidCardId, ID_LEN, MAX_ID_LEN};
pub(crate) use types::null_as_default;
pub use types::{sort_summaries, Card, CardDraft, CardSummary, Prediction};
