use serde::{Deserialize, Serialize};
use std::fmt;

/// Display ordinal of a flashcard, 1-based, assigned once at load time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(u32);

impl CardId {
    /// Creates a new `CardId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id for the card found at the zero-based `position` of a loaded payload.
    #[must_use]
    pub fn from_position(position: usize) -> Self {
        let ordinal = u32::try_from(position).unwrap_or(u32::MAX - 1);
        Self(ordinal.saturating_add(1))
    }

    /// Returns the underlying value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
