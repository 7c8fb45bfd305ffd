//! Attack legality.
//!
//! Attacks are legal only along the cyclic defeat relation over ranks 1-7.
//! See [`resolver`] for the construction.

pub mod resolver;

pub use resolver::{attackers_of, check_valid, in_plane, resolve, PlaneDefeat, MAX_RANK, MIN_RANK};
