//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game view draws into a
//! plain framebuffer of styled characters, and the renderer flushes that
//! framebuffer to the terminal. Keeping the view pure makes it
//! unit-testable without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
