//! Property tests: random move sequences keep every card in exactly one zone.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use planar_duel::cards::Card;
use planar_duel::core::{MatchBuilder, Move, PlayerId};
use planar_duel::rules::Match;
use planar_duel::zones::{Side, SideLayout};

/// A move chosen relative to whatever the board looks like when it is played.
#[derive(Clone, Debug)]
struct Choice {
    kind: u8,
    a: usize,
    b: usize,
    c: usize,
}

fn choice() -> impl Strategy<Value = Choice> {
    (0u8..4, 0usize..8, 0usize..8, 0usize..8).prop_map(|(kind, a, b, c)| Choice { kind, a, b, c })
}

fn to_move(game: &Match, choice: &Choice) -> Option<Move> {
    let player = game.turn();
    let side = &game.sides()[player.index()];
    let hand = side.hand();
    let filled: Vec<Card> = side.slots().iter().flatten().copied().collect();

    match choice.kind {
        0 if !hand.is_empty() => Some(Move::PlayToSlot {
            slot: choice.b % 5,
            card: hand[choice.a % hand.len()],
        }),
        1 => {
            let count = choice.a % (hand.len() + 1);
            Some(Move::discard(&hand[..count]))
        }
        2 if filled.len() >= 2 && !hand.is_empty() => {
            let target = filled[choice.a % filled.len()];
            let other = filled[choice.b % filled.len()];
            Some(Move::Combine {
                target,
                other,
                to: hand[choice.c % hand.len()],
                keep: target,
            })
        }
        3 => {
            let attacks = game.legal_attacks(player);
            if attacks.is_empty() {
                return None;
            }
            let (attacker, defender) = attacks[choice.a % attacks.len()];
            Some(Move::Attack {
                slot_card: attacker.slot_card,
                hand_card: attacker.hand_card,
                defender,
            })
        }
        _ => None,
    }
}

fn snapshot(game: &Match) -> (PlayerId, Vec<SideLayout>) {
    (game.turn(), game.sides().iter().map(Side::layout).collect())
}

fn check_zones(side: &Side) -> Result<(), TestCaseError> {
    prop_assert_eq!(side.slots().len(), 4);
    prop_assert_eq!(side.card_count(), 10);

    let layout = side.layout();
    let mut seen = FxHashSet::default();
    let all = layout
        .draw_pile
        .iter()
        .chain(layout.hand.iter())
        .chain(layout.slots.iter().flatten())
        .chain(layout.discard_pile.iter());
    for card in all {
        prop_assert!(seen.insert(*card), "{} is in two zones", card);
    }
    prop_assert!(!seen.contains(&side.rank()));
    Ok(())
}

proptest! {
    #[test]
    fn prop_moves_preserve_zones(seed in any::<u64>(), choices in prop::collection::vec(choice(), 1..60)) {
        let mut game = MatchBuilder::new().seed(seed).build();

        for choice in &choices {
            let Some(mv) = to_move(&game, choice) else { continue };
            let player = game.turn();
            let before = snapshot(&game);
            let history_len = game.history().len();
            let is_discard = matches!(mv, Move::Discard { .. });

            match game.apply(player, mv) {
                Ok(()) => {
                    prop_assert_eq!(game.history().len(), history_len + 1);
                    if is_discard {
                        prop_assert_eq!(game.turn(), player.next(game.player_count()));
                        let side = &game.sides()[player.index()];
                        let loose = side.card_count() - side.slots().iter().flatten().count();
                        prop_assert_eq!(side.hand().len(), loose.min(3));
                    } else {
                        prop_assert_eq!(game.turn(), player);
                    }
                }
                Err(_) => {
                    prop_assert_eq!(snapshot(&game), before);
                    prop_assert_eq!(game.history().len(), history_len);
                }
            }

            for side in game.sides() {
                check_zones(side)?;
            }
        }
    }

    #[test]
    fn prop_wrong_player_never_moves(seed in any::<u64>(), slot in 0usize..4) {
        let mut game = MatchBuilder::new().seed(seed).build();
        let other = PlayerId::new(1);
        let card = game.sides()[1].hand()[0];
        let before = snapshot(&game);

        prop_assert!(game.play_to_slot(other, slot, card).is_err());
        prop_assert!(game.discard_from_hand(other, &[card]).is_err());
        prop_assert_eq!(snapshot(&game), before);
    }
}
