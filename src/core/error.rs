//! Error types.
//!
//! Every rejected move is an [`InvalidMove`]. Its `Display` text is the
//! message a host shows to the player verbatim, so the wording is part of
//! the public interface.

use crate::cards::Card;
use crate::core::player::PlayerId;

/// A move the rules do not allow.
///
/// Returned before any state is touched: a failed move leaves the match
/// exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("It is not player {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("Player {player} is not in this match")]
    UnknownPlayer { player: PlayerId },

    #[error("Can't play {card}, not in hand")]
    PlayNotInHand { card: Card },

    #[error("Can't play {card}, slot {slot} does not exist")]
    NoSuchSlot { card: Card, slot: usize },

    #[error("Can't discard, {card} not in hand")]
    DiscardNotInHand { card: Card },

    #[error("Can't discard, it is not player {player}'s turn")]
    DiscardNotYourTurn { player: PlayerId },

    #[error("Can't remove, {card} not in a slot")]
    RemoveNotInSlot { card: Card },

    #[error("Can't combine, {target} and {other} do not add up to {to}")]
    CombineSumMismatch { target: Card, other: Card, to: Card },

    #[error("Can't combine, {card} can't be combined with itself")]
    CombineWithItself { card: Card },

    #[error("Can't combine, {card} is not in a slot")]
    CombineNotInSlot { card: Card },

    #[error("Can't combine, {card} is not in the hand")]
    CombineNotInHand { card: Card },

    #[error("Can't combine, {card} is not one of the combining cards")]
    CombineKeepMismatch { card: Card },

    #[error("Can't attack, {slot_card} with {hand_card} does not defeat {defend_card}")]
    AttackNotDefeated {
        slot_card: Card,
        hand_card: Card,
        defend_card: Card,
    },

    #[error("Can't attack, {card} is not in a slot")]
    AttackNotInSlot { card: Card },

    #[error("Can't attack, player {player} can't attack their own side")]
    AttackOwnSide { player: PlayerId },
}

/// An arranged side that breaks the zone rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("{card} appears in more than one place")]
    DuplicateCard { card: Card },

    #[error("expected {expected} slots, found {found}")]
    SlotCount { expected: usize, found: usize },
}
