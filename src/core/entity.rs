//! Card identity.
//!
//! Two cards with the same value are different cards. Every minted card gets
//! a `CardId` that is unique for the lifetime of the process, so "is this
//! exact card in this zone" is an id comparison.
//!
//! ## Usage
//!
//! ```
//! use planar_duel::core::CardId;
//!
//! let a = CardId::next();
//! let b = CardId::next();
//! assert_ne!(a, b);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(0);

/// Unique identifier for a minted card.
///
/// Ids are handed out by a process-wide counter, never reused, and never
/// derived from the card's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u32);

impl CardId {
    /// Allocate a fresh id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
