//! Cards.
//!
//! A `Card` is an immutable value plus a unique identity. Equality and
//! hashing use the identity only: two `Card(3)`s minted separately are
//! different cards, and a zone holding one does not hold the other.

use crate::core::entity::CardId;

/// A single playing card.
#[derive(Clone, Copy, Debug)]
pub struct Card {
    id: CardId,
    value: i32,
}

impl Card {
    /// Mint a new card with a fresh identity.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self {
            id: CardId::next(),
            value,
        }
    }

    /// The card's identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// The card's integer value (its rank).
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.value)
    }
}

/// Face card values above the numbered deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceCard {
    Jack,
    Queen,
    King,
}

impl FaceCard {
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            FaceCard::Jack => 11,
            FaceCard::Queen => 12,
            FaceCard::King => 13,
        }
    }
}
