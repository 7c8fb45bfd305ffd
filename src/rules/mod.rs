//! Move arbitration.
//!
//! `Match` owns the sides and the turn pointer. It checks turn ownership,
//! consults the defeat relation for attacks and delegates everything else
//! to the sides involved.

pub mod engine;

pub use engine::Match;
