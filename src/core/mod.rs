//! Core engine types: card identity, players, RNG, configuration, moves, errors.
//!
//! This module holds the building blocks the zone and rules layers share.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::CardId;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{SideConfig, MatchConfig, MatchBuilder};
pub use action::{Attacker, Defender, Move, MoveRecord};
pub use error::{InvalidMove, LayoutError};
