//! Terminal runner (default binary).
//!
//! The driver owns everything the engine does not: key mapping, the pause
//! flag, the turbo toggle and the gravity timer. It is a single-threaded
//! poll loop: render, wait for input until the next gravity tick is due,
//! apply actions, tick. The gravity period is re-read from the engine
//! after every tick so a level-up takes effect on the next re-arm.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use stonefall::core::Engine;
use stonefall::input::{handle_key_event, is_repeatable, should_quit};
use stonefall::term::{GameView, TerminalRenderer, Viewport};
use stonefall::types::{GameAction, DEFAULT_COLS, DEFAULT_ROWS, TURBO_FRAME_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, entropy_seed());
    let view = GameView::default();

    let mut paused = false;
    let mut turbo = false;
    let mut next_gravity = Instant::now() + Duration::from_millis(engine.delay_ms() as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&engine, paused, Viewport::new(w, h));
        term.draw(&fb)?;

        // Wait for input until the next gravity tick is due. Turbo mode
        // polls at a fixed frame rate instead of the gravity period, and a
        // finished game has no pending tick to wait for.
        let timeout = if turbo || engine.game_over() {
            Duration::from_millis(TURBO_FRAME_MS)
        } else {
            next_gravity.saturating_duration_since(Instant::now())
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let repeat = key.kind == KeyEventKind::Repeat;
                if key.kind != KeyEventKind::Press && !repeat {
                    continue;
                }

                if should_quit(key) {
                    return Ok(());
                }

                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                // Terminal auto-repeat only drives movement and soft drop.
                if repeat && !is_repeatable(action) {
                    continue;
                }

                match action {
                    GameAction::Pause => {
                        paused = !paused;
                        if !paused {
                            next_gravity =
                                Instant::now() + Duration::from_millis(engine.delay_ms() as u64);
                        }
                    }
                    GameAction::ToggleTurbo => {
                        turbo = !turbo;
                    }
                    GameAction::Restart => {
                        if engine.game_over() {
                            engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, engine.seed());
                            next_gravity =
                                Instant::now() + Duration::from_millis(engine.delay_ms() as u64);
                        }
                    }
                    _ if !paused => engine.apply_action(action),
                    _ => {}
                }
            }
        }

        if !paused && !engine.game_over() {
            if turbo {
                // Fixed-rate mode: one gravity step per frame.
                engine.drop(false);
            } else if Instant::now() >= next_gravity {
                engine.drop(false);
                // Re-arm from the possibly updated delay.
                next_gravity = Instant::now() + Duration::from_millis(engine.delay_ms() as u64);
            }
        }
    }
}

/// Seed for a fresh session; wall-clock derived, no RNG crate needed.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
