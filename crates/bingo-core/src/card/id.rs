//! Card identifiers
//!
//! New cards get eight lowercase hex characters taken from a random UUID.
//! Lookups accept a slightly wider alphabet so records written by hand or by
//! older tools stay addressable, but never anything that could name a path
//! outside the data directory.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of a generated id.
pub const ID_LEN: usize = 8;

/// Longest id accepted by [`CardId::parse`].
pub const MAX_ID_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card id: {0:?}")]
pub struct InvalidCardId(pub String);

/// Short identifier of a card, also the stem of its record file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    /// Draw a fresh id: 8 lowercase hex chars (32 bits).
    pub fn generate() -> Self {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        Self(hex[..ID_LEN].to_string())
    }

    /// Accept an id that is safe to use as a file stem.
    pub fn parse(s: &str) -> Result<Self, InvalidCardId> {
        let ok = !s.is_empty()
            && s.len() <= MAX_ID_LEN
            && s
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if ok {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidCardId(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for ids of the generated shape (8 lowercase hex chars).
    pub fn is_canonical(&self) -> bool {
        self.0.len() == ID_LEN
            && self
                .0
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CardId {
    type Error = InvalidCardId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
