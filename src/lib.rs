//! # planar-duel
//!
//! Rules engine for a turn-based card duel.
//!
//! Each player has a side: a private draw pile, a hand of three, four board
//! slots and a discard pile. Players play cards into slots, combine two
//! slotted cards into a hand card equal to their sum, and attack. An attack
//! is legal only along a fixed cyclic defeat relation over ranks 1-7.
//!
//! ## Design Principles
//!
//! 1. **Identity, not value**: two cards of the same value are different
//!    cards. Zone membership is always checked by identity.
//!
//! 2. **Validate, then mutate**: a rejected move returns an `InvalidMove`
//!    and leaves the match unchanged.
//!
//! 3. **Request-scoped randomness**: each match seeds its own shuffle.
//!
//! ## Modules
//!
//! - `core`: Card ids, players, RNG, configuration, moves, errors
//! - `cards`: Cards and face-card values
//! - `plane`: The cyclic defeat relation
//! - `zones`: One player's side
//! - `rules`: The match arbiter
//!
//! ## Example
//!
//! ```
//! use planar_duel::core::{MatchBuilder, PlayerId};
//!
//! let mut game = MatchBuilder::new().seed(42).build();
//! let p0 = PlayerId::new(0);
//!
//! let card = game.sides()[0].hand()[0];
//! game.play_to_slot(p0, 0, card).unwrap();
//! assert_eq!(game.sides()[0].slots()[0], Some(card));
//!
//! game.discard_from_hand(p0, &[]).unwrap();
//! assert_eq!(game.turn(), PlayerId::new(1));
//! ```

pub mod core;
pub mod cards;
pub mod plane;
pub mod zones;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CardId, PlayerId, PlayerMap, GameRng,
    SideConfig, MatchConfig, MatchBuilder,
    Attacker, Defender, Move, MoveRecord,
    InvalidMove, LayoutError,
};

pub use crate::cards::{Card, FaceCard};

pub use crate::plane::{check_valid, resolve, PlaneDefeat};

pub use crate::zones::{Side, SideLayout};

pub use crate::rules::Match;
