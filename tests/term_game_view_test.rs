use memory_match::core::{Deck, GameController, Rules};
use memory_match::term::{apply_input, AnchorY, GameView, TermBoard, Viewport};
use memory_match::types::{CardFace, CardHandle, GameInput, Phase};

/// Two-by-two grid of `[A, B, A, B]`.
fn game() -> GameController<TermBoard> {
    let a = CardFace::new(0);
    let b = CardFace::new(1);
    let deck = Deck::new(vec![a, b, a, b]).unwrap();
    let board = TermBoard::for_deck(&deck);
    GameController::new(deck, board, Rules::default(), 3)
}

fn screen_text(game: &GameController<TermBoard>, vp: Viewport) -> String {
    GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(game.view(), game.phase(), vp)
        .text()
}

#[test]
fn term_view_frame_size_matches_grid() {
    let g = game();
    // 2 columns of 5-wide tiles with 1-cell gaps: 2*6+1 = 13, plus border.
    assert_eq!(GameView::default().frame_size(g.view()), (15, 11));
}

#[test]
fn term_view_renders_border_corners() {
    let g = game();
    let fb = GameView::default().render(g.view(), g.phase(), Viewport::new(15, 11));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(14, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 10).unwrap().ch, '└');
    assert_eq!(fb.get(14, 10).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_face_down_tiles() {
    let mut g = game();
    g.start_game();
    let fb = GameView::default().render(g.view(), g.phase(), Viewport::new(15, 11));

    // First tile starts inside the border plus one gap cell.
    assert_eq!(fb.get(2, 2).unwrap().ch, '░');
    assert_eq!(fb.get(4, 3).unwrap().ch, '░');
    assert_eq!(fb.get(10, 8).unwrap().ch, '░');
}

#[test]
fn term_view_shows_symbol_of_revealed_card() {
    let mut g = game();
    g.start_game();
    let first: CardHandle = g.view().order()[0];
    assert!(apply_input(&mut g, GameInput::Select));

    let fb = GameView::default().render(g.view(), g.phase(), Viewport::new(15, 11));
    let symbol = g.deck().get(first).unwrap().face.symbol();
    assert_eq!(fb.get(4, 3).unwrap().ch, symbol);
    // Neighbouring tile stays face down.
    assert_eq!(fb.get(10, 3).unwrap().ch, '░');
}

#[test]
fn term_view_draws_cursor_only_while_selecting() {
    let mut g = game();
    let vp = Viewport::new(15, 11);

    let fb = GameView::default().render(g.view(), g.phase(), vp);
    assert_ne!(fb.get(1, 3).unwrap().ch, '▶');

    g.start_game();
    let fb = GameView::default().render(g.view(), g.phase(), vp);
    assert_eq!(fb.get(1, 3).unwrap().ch, '▶');
    assert_eq!(fb.get(7, 3).unwrap().ch, '◀');

    apply_input(&mut g, GameInput::CursorDown);
    let fb = GameView::default().render(g.view(), g.phase(), vp);
    assert_eq!(fb.get(1, 7).unwrap().ch, '▶');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut g = game();
    g.start_game();
    g.tick(2_000);

    let text = screen_text(&g, Viewport::new(50, 11));
    assert!(text.contains("MOVES"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("TIME"));
    assert!(text.contains("00:00:02"));

    let narrow = screen_text(&g, Viewport::new(20, 11));
    assert!(!narrow.contains("MOVES"));
}

#[test]
fn term_view_banners_follow_phase() {
    let mut g = game();
    let vp = Viewport::new(60, 11);
    assert!(screen_text(&g, vp).contains("PRESS S TO START"));

    g.start_game();
    let text = screen_text(&g, vp);
    assert!(!text.contains("PRESS S TO START"));
    assert!(!text.contains("PLAY AGAIN"));

    g.reset_game();
    assert_eq!(g.phase(), Phase::AwaitingRestart);
    assert!(screen_text(&g, vp).contains("PLAY AGAIN? (Y/N)"));
}

#[test]
fn term_view_shows_summary_after_win() {
    let mut g = game();
    g.start_game();
    for h in [0, 2, 1, 3] {
        g.select_card(CardHandle::new(h));
    }
    assert_eq!(g.phase(), Phase::Won);

    let text = screen_text(&g, Viewport::new(60, 11));
    assert!(text.contains("YOU WON"));
    assert!(text.contains("Moves: 2 | Score: 50"));
    assert!(text.contains("PLAY AGAIN? (Y/N)"));
}
