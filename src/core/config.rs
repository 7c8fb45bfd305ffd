//! Match configuration.
//!
//! Hosts configure a match at startup by providing:
//! - `SideConfig`: deck contents, hand size, slot count, rank marker
//! - `MatchConfig`: player count, per-side config, optional seed
//!
//! Defaults reproduce the standard duel: two players, ten cards valued
//! 1 through 10 per side, a hand of three, four slots, a Jack as rank marker.
//! Both types deserialize with defaults for missing fields, so a host can
//! load a partial config file.

use serde::{Deserialize, Serialize};

use crate::cards::FaceCard;

/// Per-side configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideConfig {
    /// Hand size the side tops up to.
    pub hand_size: usize,

    /// Number of board slots.
    pub slot_count: usize,

    /// Values of the cards minted into the draw pile, one card per entry.
    pub deck_values: Vec<i32>,

    /// Value of the rank marker card.
    pub rank_value: i32,
}

impl Default for SideConfig {
    fn default() -> Self {
        Self {
            hand_size: 3,
            slot_count: 4,
            deck_values: (1..=10).collect(),
            rank_value: FaceCard::Jack.value(),
        }
    }
}

/// Match-wide configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of sides, fixed for the life of the match.
    pub player_count: usize,

    /// Configuration shared by every side.
    pub side: SideConfig,

    /// Shuffle seed. `None` draws a fresh seed from OS entropy per match.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            side: SideConfig::default(),
            seed: None,
        }
    }
}

/// Builder for a `Match`.
///
/// ```
/// use planar_duel::core::MatchBuilder;
///
/// let game = MatchBuilder::new().player_count(3).seed(7).build();
/// assert_eq!(game.player_count(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: MatchConfig,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing (e.g. deserialized) configuration.
    pub fn from_config(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        assert!((1..=255).contains(&count), "Player count must be 1-255");
        self.config.player_count = count;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.side.hand_size = size;
        self
    }

    pub fn slot_count(mut self, count: usize) -> Self {
        self.config.side.slot_count = count;
        self
    }

    pub fn deck_values(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.config.side.deck_values = values.into_iter().collect();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// The configuration built so far.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Build the match: one fully initialized side per player, turn 0.
    pub fn build(self) -> crate::rules::Match {
        crate::rules::Match::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_side_config() {
        let config = SideConfig::default();
        assert_eq!(config.hand_size, 3);
        assert_eq!(config.slot_count, 4);
        assert_eq!(config.deck_values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(config.rank_value, 11);
    }

    #[test]
    fn test_default_match_config() {
        let config = MatchConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_overrides() {
        let builder = MatchBuilder::new()
            .player_count(4)
            .hand_size(5)
            .slot_count(6)
            .deck_values([1, 1, 2])
            .seed(99);

        let config = builder.config();
        assert_eq!(config.player_count, 4);
        assert_eq!(config.side.hand_size, 5);
        assert_eq!(config.side.slot_count, 6);
        assert_eq!(config.side.deck_values, vec![1, 1, 2]);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    #[should_panic(expected = "Player count must be 1-255")]
    fn test_builder_rejects_zero_players() {
        let _ = MatchBuilder::new().player_count(0);
    }

    #[test]
    fn test_partial_config_from_json() {
        let config: MatchConfig =
            serde_json::from_str(r#"{ "player_count": 3, "side": { "hand_size": 4 } }"#).unwrap();

        assert_eq!(config.player_count, 3);
        assert_eq!(config.side.hand_size, 4);
        assert_eq!(config.side.slot_count, 4);
        assert_eq!(config.side.deck_values.len(), 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = MatchConfig {
            seed: Some(42),
            ..MatchConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
