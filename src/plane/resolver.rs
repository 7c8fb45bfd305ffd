//! Cyclic defeat relation over ranks 1-7.
//!
//! For a rank `r` and each interval in {1, 2, 4}, a card of rank `r`
//! supported by a card of rank `r + 3 * interval` defeats a card of rank
//! `r + interval`, both taken cyclically onto 1..=7. {1, 2, 4} is a
//! difference set mod 7, so every rank beats exactly three others, each
//! with exactly one support rank.
//!
//! The relation is always computed from the formula, never tabulated.

use rustc_hash::FxHashSet;

/// Smallest rank that takes part in attacks.
pub const MIN_RANK: i32 = 1;

/// Largest rank that takes part in attacks.
pub const MAX_RANK: i32 = 7;

const INTERVALS: [i32; 3] = [1, 2, 4];

/// One entry of a rank's defeat set: it beats `beats` when supported by `with`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneDefeat {
    pub beats: i32,
    pub with: i32,
}

/// Reduce onto 1..=7.
fn planar_mod(input: i32) -> i32 {
    (input - 1).rem_euclid(MAX_RANK) + 1
}

/// Whether `rank` takes part in the defeat relation.
#[must_use]
pub fn in_plane(rank: i32) -> bool {
    (MIN_RANK..=MAX_RANK).contains(&rank)
}

/// The three `(beats, with)` pairs for an attacking rank.
///
/// Ranks outside 1..=7 have no pairs.
///
/// ```
/// use planar_duel::plane::{resolve, PlaneDefeat};
///
/// let pairs = resolve(1);
/// assert_eq!(pairs.len(), 3);
/// assert!(pairs.contains(&PlaneDefeat { beats: 2, with: 4 }));
/// ```
#[must_use]
pub fn resolve(rank: i32) -> FxHashSet<PlaneDefeat> {
    if !in_plane(rank) {
        return FxHashSet::default();
    }
    INTERVALS
        .iter()
        .map(|&interval| PlaneDefeat {
            beats: planar_mod(rank + interval),
            with: planar_mod(rank + interval * 3),
        })
        .collect()
}

/// Whether `attack_rank` supported by `support_rank` defeats `defend_rank`.
#[must_use]
pub fn check_valid(attack_rank: i32, defend_rank: i32, support_rank: i32) -> bool {
    resolve(attack_rank).contains(&PlaneDefeat {
        beats: defend_rank,
        with: support_rank,
    })
}

/// Every `(attack rank, support rank)` pair that defeats `defend_rank`.
///
/// Sorted by attack rank.
#[must_use]
pub fn attackers_of(defend_rank: i32) -> Vec<(i32, i32)> {
    let mut pairs: Vec<_> = (MIN_RANK..=MAX_RANK)
        .flat_map(|attack| {
            resolve(attack)
                .into_iter()
                .filter(|defeat| defeat.beats == defend_rank)
                .map(move |defeat| (attack, defeat.with))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}
