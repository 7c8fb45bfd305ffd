//! One player's side of the table.
//!
//! A `Side` owns four zones and the rank marker:
//! - draw pile: ordered, drawn from the front
//! - hand: topped up to the configured hand size
//! - slots: fixed number of board positions, each empty or holding one card
//! - discard pile: append-only until the next reshuffle
//!
//! Every card sits in exactly one zone. All moves validate first and mutate
//! after, so a rejected move leaves the side untouched.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::Card;
use crate::core::config::SideConfig;
use crate::core::error::{InvalidMove, LayoutError};
use crate::core::rng::GameRng;

/// Card storage for the hand. Inline for the usual three or four cards.
pub type Hand = SmallVec<[Card; 4]>;

/// Board slots. `None` marks an empty slot; positions never shift.
pub type Slots = SmallVec<[Option<Card>; 4]>;

/// An explicit arrangement of a side's zones.
///
/// Used to set up positions for scenarios and tests. `rank: None` mints a
/// fresh rank marker from the config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideLayout {
    pub rank: Option<Card>,
    pub draw_pile: Vec<Card>,
    pub hand: Vec<Card>,
    pub slots: Vec<Option<Card>>,
    pub discard_pile: Vec<Card>,
}

impl Default for SideLayout {
    fn default() -> Self {
        Self {
            rank: None,
            draw_pile: Vec::new(),
            hand: Vec::new(),
            slots: vec![None; SideConfig::default().slot_count],
            discard_pile: Vec::new(),
        }
    }
}

/// One player's zones.
#[derive(Clone, Debug)]
pub struct Side {
    config: SideConfig,
    rank: Card,
    draw_pile: Vector<Card>,
    hand: Hand,
    slots: Slots,
    discard_pile: Vector<Card>,
    rng: GameRng,
}

impl Side {
    /// Create a fully initialized side: rank marker, shuffled deck, full hand.
    #[must_use]
    pub fn new(config: SideConfig, rng: GameRng) -> Self {
        let mut side = Self {
            rank: Card::new(config.rank_value),
            draw_pile: config.deck_values.iter().map(|&value| Card::new(value)).collect(),
            hand: Hand::new(),
            slots: std::iter::repeat(None).take(config.slot_count).collect(),
            discard_pile: Vector::new(),
            config,
            rng,
        };
        side.reshuffle();
        side.draw_hand();
        side
    }

    /// Create a side with the default config and a fixed shuffle seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SideConfig::default(), GameRng::new(seed))
    }

    /// Build a side from an explicit arrangement.
    ///
    /// The layout is taken as is: the hand is not topped up and nothing is
    /// shuffled. Fails if a card appears twice or the slot count is wrong.
    pub fn from_layout(layout: SideLayout, config: SideConfig, rng: GameRng) -> Result<Self, LayoutError> {
        if layout.slots.len() != config.slot_count {
            return Err(LayoutError::SlotCount {
                expected: config.slot_count,
                found: layout.slots.len(),
            });
        }

        let rank = layout.rank.unwrap_or_else(|| Card::new(config.rank_value));

        let mut seen = rustc_hash::FxHashSet::default();
        let all = std::iter::once(rank)
            .chain(layout.draw_pile.iter().copied())
            .chain(layout.hand.iter().copied())
            .chain(layout.slots.iter().flatten().copied())
            .chain(layout.discard_pile.iter().copied());
        for card in all {
            if !seen.insert(card) {
                return Err(LayoutError::DuplicateCard { card });
            }
        }

        Ok(Self {
            config,
            rank,
            draw_pile: layout.draw_pile.into_iter().collect(),
            hand: layout.hand.into_iter().collect(),
            slots: layout.slots.into_iter().collect(),
            discard_pile: layout.discard_pile.into_iter().collect(),
            rng,
        })
    }

    /// Snapshot of the current arrangement.
    #[must_use]
    pub fn layout(&self) -> SideLayout {
        SideLayout {
            rank: Some(self.rank),
            draw_pile: self.draw_pile.iter().copied().collect(),
            hand: self.hand.to_vec(),
            slots: self.slots.to_vec(),
            discard_pile: self.discard_pile.iter().copied().collect(),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &SideConfig {
        &self.config
    }

    /// The rank marker card.
    #[must_use]
    pub fn rank(&self) -> Card {
        self.rank
    }

    /// Draw pile, front first.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw_pile
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    /// Index of the slot holding exactly this card.
    #[must_use]
    pub fn slot_of(&self, card: Card) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(card))
    }

    /// Whether exactly this card is in the hand.
    #[must_use]
    pub fn in_hand(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Number of gameplay cards across all four zones (rank marker excluded).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.hand.len()
            + self.slots.iter().flatten().count()
            + self.discard_pile.len()
    }

    // === Internal pile management ===

    /// Move the discard pile under the draw pile and shuffle the lot.
    fn reshuffle(&mut self) {
        let mut pile: Vec<Card> = self.draw_pile.iter().copied().collect();
        pile.extend(self.discard_pile.iter().copied());
        self.discard_pile.clear();
        self.rng.shuffle(&mut pile);
        trace!(cards = pile.len(), "reshuffled draw pile");
        self.draw_pile = pile.into_iter().collect();
    }

    /// Draw until the hand is full or no cards remain anywhere.
    fn draw_hand(&mut self) {
        while self.hand.len() < self.config.hand_size {
            if self.draw_pile.is_empty() {
                self.reshuffle();
            }
            match self.draw_pile.pop_front() {
                Some(card) => self.hand.push(card),
                None => break,
            }
        }
    }

    // === Validation ===

    /// Check that `card` can be played into `slot`.
    pub(crate) fn check_play(&self, slot: usize, card: Card) -> Result<(), InvalidMove> {
        if !self.in_hand(card) {
            return Err(InvalidMove::PlayNotInHand { card });
        }
        if slot >= self.slots.len() {
            return Err(InvalidMove::NoSuchSlot { card, slot });
        }
        Ok(())
    }

    /// Check that every card is in a slot, counting repeats as already removed.
    pub(crate) fn check_remove(&self, cards: &[Card]) -> Result<(), InvalidMove> {
        let mut remaining = self.slots.clone();
        for &card in cards {
            let slot = remaining
                .iter()
                .position(|slot| *slot == Some(card))
                .ok_or(InvalidMove::RemoveNotInSlot { card })?;
            remaining[slot] = None;
        }
        Ok(())
    }

    // === Moves ===

    /// Play a card from hand into a slot.
    ///
    /// A card already in that slot goes to the discard pile.
    pub fn play_to_slot(&mut self, slot: usize, card: Card) -> Result<(), InvalidMove> {
        self.check_play(slot, card)?;

        self.hand.retain(|held| *held != card);
        if let Some(previous) = self.slots[slot].replace(card) {
            self.discard_pile.push_back(previous);
        }
        debug!(slot, %card, "played to slot");
        Ok(())
    }

    /// Discard cards from hand, then top the hand back up.
    ///
    /// Discarded cards go to the discard pile in the given order.
    pub fn discard_from_hand(&mut self, cards: &[Card]) -> Result<(), InvalidMove> {
        let mut remaining = self.hand.clone();
        for &card in cards {
            let index = remaining
                .iter()
                .position(|held| *held == card)
                .ok_or(InvalidMove::DiscardNotInHand { card })?;
            remaining.remove(index);
        }

        self.hand = remaining;
        self.discard_pile.extend(cards.iter().copied());
        self.draw_hand();
        debug!(discarded = cards.len(), hand = self.hand.len(), "discarded from hand");
        Ok(())
    }

    /// Clear the slots holding these cards and discard them.
    pub fn remove_from_slots(&mut self, cards: &[Card]) -> Result<(), InvalidMove> {
        self.check_remove(cards)?;

        for &card in cards {
            if let Some(slot) = self.slot_of(card) {
                self.slots[slot] = None;
                self.discard_pile.push_back(card);
            }
        }
        debug!(removed = cards.len(), "removed from slots");
        Ok(())
    }

    /// Merge two slotted cards into a hand card equal to their sum.
    ///
    /// `to` leaves the hand and takes `target`'s slot, `other`'s slot empties,
    /// `keep` (one of `target`/`other`) returns to the hand and the other one
    /// is discarded.
    pub fn combine(&mut self, target: Card, other: Card, to: Card, keep: Card) -> Result<(), InvalidMove> {
        if target.value().checked_add(other.value()) != Some(to.value()) {
            return Err(InvalidMove::CombineSumMismatch { target, other, to });
        }
        if target == other {
            return Err(InvalidMove::CombineWithItself { card: target });
        }
        let target_slot = self
            .slot_of(target)
            .ok_or(InvalidMove::CombineNotInSlot { card: target })?;
        let other_slot = self
            .slot_of(other)
            .ok_or(InvalidMove::CombineNotInSlot { card: other })?;
        if !self.in_hand(to) {
            return Err(InvalidMove::CombineNotInHand { card: to });
        }
        if keep != target && keep != other {
            return Err(InvalidMove::CombineKeepMismatch { card: keep });
        }

        let discard = if keep == target { other } else { target };

        self.hand.retain(|held| *held != to);
        self.hand.push(keep);
        self.discard_pile.push_back(discard);
        self.slots[target_slot] = Some(to);
        self.slots[other_slot] = None;
        debug!(%target, %other, %to, %keep, "combined");
        Ok(())
    }
}
