//! Move representation.
//!
//! A host translates player gestures into `Move`s and hands them to
//! `Match::apply`. Every applied move is kept as a `MoveRecord` in the
//! match history.
//!
//! ```
//! use planar_duel::cards::Card;
//! use planar_duel::core::{Defender, Move, PlayerId};
//!
//! let slot_card = Card::new(1);
//! let attack = Move::Attack {
//!     slot_card,
//!     hand_card: Card::new(4),
//!     defender: Defender { player: PlayerId::new(1), slot_card: Card::new(2) },
//! };
//! assert_eq!(attack.name(), "attack");
//! ```

use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Card;

/// The attacking half of an attack: a slotted card and its support from hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Attacker {
    pub player: PlayerId,
    pub slot_card: Card,
    pub hand_card: Card,
}

/// The defending half of an attack: the slotted card to knock out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Defender {
    pub player: PlayerId,
    pub slot_card: Card,
}

/// A move made by the player whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Play a hand card into a slot.
    PlayToSlot { slot: usize, card: Card },

    /// Discard hand cards and end the turn.
    Discard { cards: SmallVec<[Card; 3]> },

    /// Merge two slotted cards into a hand card equal to their sum.
    Combine {
        target: Card,
        other: Card,
        to: Card,
        keep: Card,
    },

    /// Knock out a defending card. The mover is the attacker.
    Attack {
        slot_card: Card,
        hand_card: Card,
        defender: Defender,
    },
}

impl Move {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Move::PlayToSlot { .. } => "play_to_slot",
            Move::Discard { .. } => "discard",
            Move::Combine { .. } => "combine",
            Move::Attack { .. } => "attack",
        }
    }

    /// Discard move from a slice of cards.
    #[must_use]
    pub fn discard(cards: &[Card]) -> Self {
        Move::Discard {
            cards: SmallVec::from_slice(cards),
        }
    }
}

/// A move that was applied, with its position in the match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// 0-based position in the match history.
    pub sequence: u32,

    /// Who made the move.
    pub player: PlayerId,

    /// The move itself.
    pub mv: Move,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_names() {
        let card = Card::new(1);
        assert_eq!(Move::PlayToSlot { slot: 0, card }.name(), "play_to_slot");
        assert_eq!(Move::discard(&[card]).name(), "discard");
        assert_eq!(
            Move::Combine { target: card, other: card, to: card, keep: card }.name(),
            "combine"
        );
    }

    #[test]
    fn test_discard_keeps_order() {
        let (a, b) = (Card::new(1), Card::new(2));
        match Move::discard(&[b, a]) {
            Move::Discard { cards } => assert_eq!(cards.as_slice(), &[b, a]),
            other => panic!("unexpected move {other:?}"),
        }
    }

    #[test]
    fn test_moves_compare_by_card_identity() {
        let card = Card::new(3);
        let lookalike = Card::new(3);
        assert_eq!(
            Move::PlayToSlot { slot: 1, card },
            Move::PlayToSlot { slot: 1, card }
        );
        assert_ne!(
            Move::PlayToSlot { slot: 1, card },
            Move::PlayToSlot { slot: 1, card: lookalike }
        );
    }
}
