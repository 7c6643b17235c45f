use tui_pairs::core::{GameState, Timings};
use tui_pairs::term::{GameView, ViewState, Viewport};
use tui_pairs::types::{Card, CardId};

fn ready_game() -> GameState {
    let cards = vec![
        Card::new(1, "SUN"),
        Card::new(2, "SUN"),
        Card::new(3, "MOON"),
        Card::new(4, "MOON"),
    ];
    let mut state = GameState::unshuffled(cards, Timings::default());
    state.tick(3000);
    state
}

#[test]
fn term_view_renders_status_and_face_down_grid() {
    let state = ready_game();
    let view = GameView::new(2);
    let fb = view.render(&state.snapshot(), &ViewState::default(), Viewport::new(60, 20));

    assert!(fb.row_text(0).starts_with(" PAIRS"));
    assert!(fb.row_text(0).contains("pairs left 2/2"));

    let text = fb.to_text();
    assert!(!text.contains("SUN"));
    assert_eq!(text.matches('┌').count(), 4);
}

#[test]
fn term_view_shows_faces_of_selected_cards() {
    let mut state = ready_game();
    state.select_card(CardId(3));

    let fb = GameView::new(4).render(&state.snapshot(), &ViewState::default(), Viewport::new(80, 24));
    let text = fb.to_text();
    assert!(text.contains("MOON"));
    assert!(!text.contains("SUN"));
}

#[test]
fn term_view_countdown_during_peek() {
    let cards = vec![Card::new(1, "a"), Card::new(2, "a")];
    let mut state = GameState::unshuffled(cards, Timings::default());
    state.tick(2500);

    let fb = GameView::new(4).render(&state.snapshot(), &ViewState::default(), Viewport::new(60, 12));
    assert!(fb.row_text(0).contains("memorize! 1s"));
}

#[test]
fn term_view_removed_cards_leave_gaps() {
    let mut state = ready_game();
    state.select_card(CardId(1));
    state.select_card(CardId(2));
    state.tick(1500);

    let view = GameView::new(2);
    let fb = view.render(&state.snapshot(), &ViewState::default(), Viewport::new(60, 20));
    // Two cards left, drawn in the first row of the grid.
    assert_eq!(fb.to_text().matches('┌').count(), 2);
    assert!(fb.row_text(0).contains("pairs left 1/2"));
}

#[test]
fn term_view_tiny_viewport_does_not_panic() {
    let state = ready_game();
    let view = GameView::new(4);
    for (w, h) in [(0, 0), (1, 1), (10, 3), (30, 8)] {
        let fb = view.render(
            &state.snapshot(),
            &ViewState {
                cursor: Some(3),
                pressed: Some((CardId(4), 3000)),
            },
            Viewport::new(w, h),
        );
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn term_view_wide_grid_does_not_overflow() {
    let state = ready_game();
    let fb = GameView::new(10_000).render(&state.snapshot(), &ViewState::default(), Viewport::new(120, 30));
    assert_eq!(fb.to_text().matches('┌').count(), 4);
}
