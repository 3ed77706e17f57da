//! Property tests for the turn state machine under arbitrary input sequences.

use std::collections::HashSet;

use memory_match::core::{score_for_pairs, GameConfig, GameController, NullView, Selection};
use memory_match::types::{CardHandle, Phase, MATCH_SCORE_INCREMENT};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Select(u16),
    Tick(u32),
    Start,
    Reset,
    Answer(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u16..12).prop_map(Op::Select),
        3 => (0u32..1_500).prop_map(Op::Tick),
        1 => Just(Op::Start),
        1 => Just(Op::Reset),
        1 => any::<bool>().prop_map(Op::Answer),
    ]
}

fn game(pairs: usize, seed: u32) -> GameController<NullView> {
    let config = GameConfig {
        pairs,
        ..GameConfig::default()
    };
    GameController::from_config(&config, NullView, seed).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Counters and the turn buffer stay consistent whatever the player does.
    #[test]
    fn prop_counters_stay_consistent(
        pairs in 1usize..=6,
        seed in any::<u32>(),
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let mut game = game(pairs, seed);
        game.start_game();

        for op in ops {
            let (moves_before, score_before) = (game.moves(), game.score());
            match op {
                Op::Select(i) => {
                    let outcome = game.select_card(CardHandle::new(i));
                    match outcome {
                        Selection::Matched { .. } => {
                            prop_assert_eq!(game.moves(), moves_before + 1);
                            prop_assert_eq!(game.score(), score_before + MATCH_SCORE_INCREMENT);
                        }
                        Selection::Mismatched => {
                            prop_assert_eq!(game.moves(), moves_before + 1);
                            prop_assert_eq!(game.score(), score_before);
                        }
                        Selection::Revealed | Selection::Ignored(_) => {
                            prop_assert_eq!(game.moves(), moves_before);
                            prop_assert_eq!(game.score(), score_before);
                        }
                    }
                }
                Op::Tick(ms) => {
                    game.tick(ms);
                    prop_assert_eq!(game.moves(), moves_before);
                    prop_assert_eq!(game.score(), score_before);
                }
                Op::Start => {
                    game.start_game();
                }
                Op::Reset => {
                    game.reset_game();
                    prop_assert_eq!((game.moves(), game.score()), (0, 0));
                }
                Op::Answer(yes) => {
                    game.confirm_restart(yes);
                }
            }

            prop_assert!(game.selected().len() <= 2);
            prop_assert_eq!(
                game.score(),
                score_for_pairs((game.deck().matched_count() / 2) as u32)
            );
            if game.phase() == Phase::Resolving {
                prop_assert_eq!(game.selected().len(), 2);
            } else {
                prop_assert!(game.selected().len() <= 1);
            }
            if game.phase() == Phase::Won {
                prop_assert!(game.deck().all_matched());
                prop_assert!(!game.stopwatch().is_running());
            }
        }
    }

    /// Every shuffle is a permutation of the same handles.
    #[test]
    fn prop_display_order_is_permutation(
        pairs in 1usize..=26,
        seed in any::<u32>(),
        resets in 0usize..4,
    ) {
        let mut game = game(pairs, seed);
        for _ in 0..resets {
            game.reset_game();
        }
        let order = game.deck().order();
        prop_assert_eq!(order.len(), pairs * 2);
        let unique: HashSet<CardHandle> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), pairs * 2);
        prop_assert!(order.iter().all(|h| h.index() < pairs * 2));
    }
}
