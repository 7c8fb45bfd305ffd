//! Cards and face-card constants.
//!
//! ## Key Types
//!
//! - `Card`: an integer value with a unique identity
//! - `FaceCard`: Jack, Queen and King values

pub mod card;

pub use card::{Card, FaceCard};
