//! Per-player zones.
//!
//! ## Key Types
//!
//! - `Side`: draw pile, hand, slots, discard pile and rank marker of one player
//! - `SideLayout`: an explicit arrangement of those zones

pub mod side;

pub use side::{Hand, Side, SideLayout, Slots};
