//! Stonefall: a terminal falling-block puzzle game.
//!
//! `core` is the deterministic game engine (no I/O), `term` is the
//! framebuffer-based terminal renderer, `input` maps key events to game
//! actions, and the binary in `main.rs` owns the poll loop and the
//! gravity timer.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
