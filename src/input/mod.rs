//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Key
//! repeat is left to the terminal's auto-repeat; the driver accepts repeat
//! events for movement and soft drop.

pub mod map;

pub use map::{handle_key_event, is_repeatable, should_quit};
