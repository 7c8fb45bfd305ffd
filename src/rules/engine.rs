//! The match: turn order and move arbitration.
//!
//! `Match` owns one `Side` per player and the turn pointer. It checks that
//! the mover holds the turn, then delegates to the side(s) involved. Only
//! discarding ends a turn; playing, combining and attacking do not.

use im::Vector;
use tracing::debug;

use crate::cards::Card;
use crate::core::action::{Attacker, Defender, Move, MoveRecord};
use crate::core::config::MatchConfig;
use crate::core::error::InvalidMove;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::plane;
use crate::zones::Side;

/// A match in progress.
#[derive(Clone, Debug)]
pub struct Match {
    sides: PlayerMap<Side>,
    turn: PlayerId,
    history: Vector<MoveRecord>,
}

impl Match {
    /// Create a match with `player_count` freshly shuffled sides.
    ///
    /// ```
    /// use planar_duel::rules::Match;
    /// use planar_duel::core::PlayerId;
    ///
    /// let game = Match::new(2);
    /// assert_eq!(game.player_count(), 2);
    /// assert_eq!(game.turn(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::with_config(MatchConfig {
            player_count,
            ..MatchConfig::default()
        })
    }

    /// Create a match from a configuration.
    ///
    /// Without a configured seed the shuffle is seeded from OS entropy, so
    /// every match deals independently.
    #[must_use]
    pub fn with_config(config: MatchConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(players = config.player_count, seed = rng.seed(), "starting match");
        let sides = PlayerMap::new(config.player_count, |_| Side::new(config.side.clone(), rng.fork()));
        Self {
            sides,
            turn: PlayerId::new(0),
            history: Vector::new(),
        }
    }

    /// Assemble a match from already-arranged sides, in seat order. Player 0 moves first.
    #[must_use]
    pub fn from_sides(sides: Vec<Side>) -> Self {
        Self {
            sides: PlayerMap::from_vec(sides),
            turn: PlayerId::new(0),
            history: Vector::new(),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.sides.player_count()
    }

    /// Whose move is currently legal.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn sides(&self) -> &[Side] {
        self.sides.as_slice()
    }

    #[must_use]
    pub fn side(&self, player: PlayerId) -> Option<&Side> {
        self.sides.get(player)
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Moves ===

    /// Play a hand card into one of the mover's slots.
    pub fn play_to_slot(&mut self, player: PlayerId, slot: usize, card: Card) -> Result<(), InvalidMove> {
        let side = self.side_on_turn(player)?;
        side.play_to_slot(slot, card)?;
        self.record(player, Move::PlayToSlot { slot, card });
        Ok(())
    }

    /// Discard hand cards, top the hand back up and pass the turn.
    pub fn discard_from_hand(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), InvalidMove> {
        if player != self.turn {
            return Err(InvalidMove::DiscardNotYourTurn { player });
        }
        self.sides[player].discard_from_hand(cards)?;
        self.turn = self.turn.next(self.player_count());
        debug!(%player, next = %self.turn, "turn passed");
        self.record(player, Move::discard(cards));
        Ok(())
    }

    /// Combine two of the mover's slotted cards into a hand card.
    pub fn combine(
        &mut self,
        player: PlayerId,
        target: Card,
        other: Card,
        to: Card,
        keep: Card,
    ) -> Result<(), InvalidMove> {
        let side = self.side_on_turn(player)?;
        side.combine(target, other, to, keep)?;
        self.record(player, Move::Combine { target, other, to, keep });
        Ok(())
    }

    /// Knock a defending card out of its slot.
    ///
    /// The attacker must hold the turn. Their support card replaces the
    /// attacking card in its slot (the attacking card is discarded) and the
    /// defending card is removed to its owner's discard pile. Every check
    /// runs before either side changes.
    pub fn attack(&mut self, attacker: Attacker, defender: Defender) -> Result<(), InvalidMove> {
        if attacker.player != self.turn {
            return Err(InvalidMove::NotYourTurn { player: attacker.player });
        }
        if attacker.player == defender.player {
            return Err(InvalidMove::AttackOwnSide { player: attacker.player });
        }
        let defending = self
            .sides
            .get(defender.player)
            .ok_or(InvalidMove::UnknownPlayer { player: defender.player })?;
        let attacking = &self.sides[attacker.player];

        if !plane::check_valid(
            attacker.slot_card.value(),
            defender.slot_card.value(),
            attacker.hand_card.value(),
        ) {
            return Err(InvalidMove::AttackNotDefeated {
                slot_card: attacker.slot_card,
                hand_card: attacker.hand_card,
                defend_card: defender.slot_card,
            });
        }
        let slot = attacking
            .slot_of(attacker.slot_card)
            .ok_or(InvalidMove::AttackNotInSlot { card: attacker.slot_card })?;
        attacking.check_play(slot, attacker.hand_card)?;
        defending.check_remove(&[defender.slot_card])?;

        let (attacking, defending) = self
            .sides
            .get_pair_mut(attacker.player, defender.player)
            .ok_or(InvalidMove::UnknownPlayer { player: defender.player })?;
        attacking.play_to_slot(slot, attacker.hand_card)?;
        defending.remove_from_slots(&[defender.slot_card])?;

        debug!(
            attacker = %attacker.player,
            defender = %defender.player,
            slot_card = %attacker.slot_card,
            hand_card = %attacker.hand_card,
            defend_card = %defender.slot_card,
            "attack resolved"
        );
        self.record(
            attacker.player,
            Move::Attack {
                slot_card: attacker.slot_card,
                hand_card: attacker.hand_card,
                defender,
            },
        );
        Ok(())
    }

    /// Apply a move on behalf of `player`.
    pub fn apply(&mut self, player: PlayerId, mv: Move) -> Result<(), InvalidMove> {
        match mv {
            Move::PlayToSlot { slot, card } => self.play_to_slot(player, slot, card),
            Move::Discard { cards } => self.discard_from_hand(player, &cards),
            Move::Combine { target, other, to, keep } => self.combine(player, target, other, to, keep),
            Move::Attack { slot_card, hand_card, defender } => self.attack(
                Attacker {
                    player,
                    slot_card,
                    hand_card,
                },
                defender,
            ),
        }
    }

    /// Every attack `player` could make right now.
    ///
    /// Empty when it is not their turn.
    #[must_use]
    pub fn legal_attacks(&self, player: PlayerId) -> Vec<(Attacker, Defender)> {
        let mut attacks = Vec::new();
        if player != self.turn {
            return attacks;
        }
        let attacking = &self.sides[player];

        for slot_card in attacking.slots().iter().flatten() {
            for hand_card in attacking.hand() {
                for (defending_player, defending) in self.sides.iter() {
                    if defending_player == player {
                        continue;
                    }
                    for defend_card in defending.slots().iter().flatten() {
                        if plane::check_valid(slot_card.value(), defend_card.value(), hand_card.value()) {
                            attacks.push((
                                Attacker {
                                    player,
                                    slot_card: *slot_card,
                                    hand_card: *hand_card,
                                },
                                Defender {
                                    player: defending_player,
                                    slot_card: *defend_card,
                                },
                            ));
                        }
                    }
                }
            }
        }

        attacks
    }

    // === Helpers ===

    fn side_on_turn(&mut self, player: PlayerId) -> Result<&mut Side, InvalidMove> {
        if player != self.turn {
            return Err(InvalidMove::NotYourTurn { player });
        }
        Ok(&mut self.sides[player])
    }

    fn record(&mut self, player: PlayerId, mv: Move) {
        let sequence = self.history.len() as u32;
        debug!(%player, sequence, kind = mv.name(), "move applied");
        self.history.push_back(MoveRecord { sequence, player, mv });
    }
}
