//! Player inputs routed through `apply_input` to the cursor and the controller.

use memory_match::core::{Deck, GameController, Rules};
use memory_match::term::{apply_input, TermBoard};
use memory_match::types::{CardFace, CardHandle, GameInput, Phase};

fn game() -> GameController<TermBoard> {
    let a = CardFace::new(0);
    let b = CardFace::new(1);
    let deck = Deck::new(vec![a, b, a, b]).unwrap();
    let board = TermBoard::for_deck(&deck);
    GameController::new(deck, board, Rules::default(), 11)
}

fn win(g: &mut GameController<TermBoard>) {
    for h in [0, 2, 1, 3] {
        g.select_card(CardHandle::new(h));
    }
}

#[test]
fn test_select_flips_card_under_cursor() {
    let mut g = game();
    assert!(!apply_input(&mut g, GameInput::Select));

    assert!(apply_input(&mut g, GameInput::Start));
    assert!(apply_input(&mut g, GameInput::CursorRight));
    let under = g.view().card_under_cursor().unwrap();
    assert!(apply_input(&mut g, GameInput::Select));
    assert_eq!(g.selected(), &[under]);
    assert!(g.view().tile(under).unwrap().face_up);

    // Same card again is ignored.
    assert!(!apply_input(&mut g, GameInput::Select));
}

#[test]
fn test_start_twice_reports_no_change() {
    let mut g = game();
    assert!(apply_input(&mut g, GameInput::Start));
    assert!(!apply_input(&mut g, GameInput::Start));
    assert_eq!(g.stopwatch().session(), 1);
}

#[test]
fn test_reset_raises_prompt_and_confirm_answers_it() {
    let mut g = game();
    apply_input(&mut g, GameInput::Start);
    apply_input(&mut g, GameInput::Reset);
    assert!(g.view().prompt_pending());
    assert_eq!(g.phase(), Phase::AwaitingRestart);

    assert!(apply_input(&mut g, GameInput::Confirm));
    assert!(!g.view().prompt_pending());
    assert_eq!(g.phase(), Phase::Selecting);

    // No prompt pending any more.
    assert!(!apply_input(&mut g, GameInput::Decline));
}

#[test]
fn test_decline_after_win_clears_summary() {
    let mut g = game();
    g.start_game();
    win(&mut g);
    assert!(g.view().summary().is_some());
    assert!(g.view().prompt_pending());

    assert!(apply_input(&mut g, GameInput::Decline));
    assert_eq!(g.phase(), Phase::NotStarted);
    assert!(g.view().summary().is_none());
    assert!(!g.view().prompt_pending());
    assert_eq!(g.view().moves(), 0);
    assert_eq!(g.view().elapsed(), "00:00:00");
    for h in g.view().order() {
        let tile = g.view().tile(*h).unwrap();
        assert!(!tile.face_up && tile.enabled);
    }
}

#[test]
fn test_start_after_win_begins_fresh_game() {
    let mut g = game();
    g.start_game();
    win(&mut g);

    assert!(apply_input(&mut g, GameInput::Start));
    assert_eq!(g.phase(), Phase::Selecting);
    assert!(!g.view().prompt_pending());
    assert_eq!((g.moves(), g.score()), (0, 0));
    assert_eq!(g.stopwatch().session(), 2);
}
