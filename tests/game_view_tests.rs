//! GameView tests - rendering an engine snapshot into a framebuffer.

use stonefall::core::Engine;
use stonefall::term::{GameView, Viewport};
use stonefall::types::{DEFAULT_COLS, DEFAULT_ROWS};

fn render(engine: &Engine, paused: bool) -> stonefall::term::FrameBuffer {
    GameView::default().render(engine, paused, Viewport::new(80, 30))
}

fn screen_text(fb: &stonefall::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_draws_playfield_border() {
    let engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, 7);
    let text = screen_text(&render(&engine, false));

    assert!(text.contains('┌'));
    assert!(text.contains('┘'));
    // Top border spans the playfield width (2 columns per cell).
    let expected = "─".repeat(DEFAULT_COLS * 2);
    assert!(text.contains(&expected));
}

#[test]
fn test_render_draws_falling_stone_cells() {
    let engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, 7);
    let fb = render(&engine, false);

    // 2 columns per board cell, 4 occupied cells per stone.
    let blocks = screen_text(&fb).chars().filter(|&c| c == '█').count();
    // Falling stone plus next-stone preview.
    assert_eq!(blocks, 2 * 4 + 2 * 4);
}

#[test]
fn test_render_side_panel_labels_and_values() {
    let engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, 7);
    let text = screen_text(&render(&engine, false));

    for label in ["NEXT", "SCORE", "LEVEL", "LINES"] {
        assert!(text.contains(label), "missing {label}");
    }
}

#[test]
fn test_pause_overlay() {
    let engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, 7);

    assert!(!screen_text(&render(&engine, false)).contains("PAUSED"));
    assert!(screen_text(&render(&engine, true)).contains("PAUSED"));
}

#[test]
fn test_game_over_overlay_shows_score_and_restart_hint() {
    let mut engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, 7);
    while !engine.game_over() {
        engine.instant_drop();
    }

    let text = screen_text(&render(&engine, false));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains(&format!("SCORE {}", engine.score())));
    assert!(text.contains("PRESS SPACE TO RESTART"));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, 7);
    let view = GameView::default();
    let _ = view.render(&engine, false, Viewport::new(5, 3));
    let _ = view.render(&engine, false, Viewport::new(0, 0));
}
