//! Shared types and tuning constants.
//! This module contains pure data types with no external dependencies.

/// A single board or shape cell. 0 = empty, 1..7 = occupied with a color id.
pub type Cell = u8;

/// Default board dimensions (playable rows).
pub const DEFAULT_ROWS: usize = 22;
pub const DEFAULT_COLS: usize = 10;

/// Gravity delay progression (milliseconds).
pub const BASE_DELAY_MS: u32 = 1000;
pub const DELAY_STEP_MS: u32 = 50;
pub const MIN_DELAY_MS: u32 = 100;

/// A level-up is granted once `lines >= level * LINES_PER_LEVEL`.
pub const LINES_PER_LEVEL: u32 = 6;

/// Line clear scoring, indexed by rows cleared in one lock (Classic rules).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Frame period for the driver's turbo mode (~30 fps, gravity every frame).
pub const TURBO_FRAME_MS: u64 = 33;

/// Game actions produced by the input layer.
///
/// The engine consumes the first five; `Pause`, `ToggleTurbo` and `Restart`
/// are owned by the driver loop (the engine has no pause state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    ToggleTurbo,
    Restart,
}
