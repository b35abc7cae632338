//! Engine module - the game state machine.
//!
//! One `Engine` instance is one game session. It owns the board, the
//! falling stone, the next stone and the score state, and exposes the
//! command surface (move, rotate, drop, instant drop) plus a read-only
//! snapshot for the presentation layer. Commands are advisory: a command
//! blocked by collision, or any command after game over, is silently
//! discarded.
//!
//! The engine has no clock. The driver is expected to call
//! `drop(manual=false)` on a timer with period `delay_ms()` and to re-read
//! the delay after every call that returned true.

use crate::core::{Board, Shape, SimpleRng};
use crate::types::{
    GameAction, BASE_DELAY_MS, DELAY_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DELAY_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    stone: Shape,
    stone_x: i32,
    stone_y: i32,
    next_stone: Shape,
    score: u32,
    lines: u32,
    level: u32,
    delay_ms: u32,
    game_over: bool,
    rng: SimpleRng,
}

impl Engine {
    /// Create a new game session on an empty `rows` x `cols` board.
    pub fn new(rows: usize, cols: usize, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next_stone = Shape::random(&mut rng);
        let mut engine = Self {
            board: Board::new(rows, cols),
            stone: next_stone.clone(),
            stone_x: 0,
            stone_y: 0,
            next_stone,
            score: 0,
            lines: 0,
            level: 1,
            delay_ms: BASE_DELAY_MS,
            game_over: false,
            rng,
        };
        engine.spawn();
        engine
    }

    // Snapshot surface.

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stone(&self) -> &Shape {
        &self.stone
    }

    pub fn stone_pos(&self) -> (i32, i32) {
        (self.stone_x, self.stone_y)
    }

    pub fn next_stone(&self) -> &Shape {
        &self.next_stone
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity delay in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current RNG state, usable as the seed for a restarted session.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Promote the next stone to active and draw a fresh next stone.
    ///
    /// The stone spawns centered at the top; if it already collides there
    /// the game is over (the stone stays stored for rendering).
    fn spawn(&mut self) {
        self.stone = self.next_stone.clone();
        self.next_stone = Shape::random(&mut self.rng);
        self.stone_x = (self.board.cols() as i32 - self.stone.width() as i32) / 2;
        self.stone_y = 0;

        if self.board.collides(&self.stone, self.stone_x, self.stone_y) {
            self.game_over = true;
        }
    }

    /// Move the stone horizontally. The candidate x is clamped to the board
    /// before the collision check, so a single call never moves more than
    /// one cell past clamping; a blocked move is discarded.
    pub fn move_stone(&mut self, delta_x: i32) {
        if self.game_over {
            return;
        }

        let mut new_x = self.stone_x + delta_x;
        if new_x < 0 {
            new_x = 0;
        }
        let max_x = self.board.cols() as i32 - self.stone.width() as i32;
        if new_x > max_x {
            new_x = max_x;
        }

        if !self.board.collides(&self.stone, new_x, self.stone_y) {
            self.stone_x = new_x;
        }
    }

    /// Rotate the stone clockwise in place; no wall kicks. The rotation is
    /// discarded if the rotated matrix collides at the current offset.
    pub fn rotate_stone(&mut self) {
        if self.game_over {
            return;
        }

        let rotated = self.stone.rotate_cw();
        if !self.board.collides(&rotated, self.stone_x, self.stone_y) {
            self.stone = rotated;
        }
    }

    /// Advance the stone one row.
    ///
    /// Manual drops score one point per row. When the step collides, the
    /// stone locks at its previous y (the merge accounts for the
    /// overshoot), the next stone spawns, full rows are cleared, and
    /// scoring, level and delay are updated. Returns true exactly on the
    /// call that locked the stone.
    pub fn drop(&mut self, manual: bool) -> bool {
        if self.game_over {
            return false;
        }

        if manual {
            self.score += 1;
        }

        self.stone_y += 1;
        if !self.board.collides(&self.stone, self.stone_x, self.stone_y) {
            return false;
        }

        self.board.merge(&self.stone, self.stone_x, self.stone_y);
        self.spawn();

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.add_cleared_lines(cleared);
            self.update_level();
            self.update_delay();
        }
        true
    }

    /// Hard drop: manual drops until exactly one lock event occurs.
    pub fn instant_drop(&mut self) {
        if self.game_over {
            return;
        }
        while !self.drop(true) {}
    }

    /// Apply an engine-facing action. Driver-owned actions (pause, turbo,
    /// restart) are ignored here.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_stone(-1),
            GameAction::MoveRight => self.move_stone(1),
            GameAction::SoftDrop => {
                self.drop(true);
            }
            GameAction::HardDrop => self.instant_drop(),
            GameAction::Rotate => self.rotate_stone(),
            GameAction::Pause | GameAction::ToggleTurbo | GameAction::Restart => {}
        }
    }

    /// Score a lock event that cleared `n` rows, using the level before any
    /// level-up from this event.
    fn add_cleared_lines(&mut self, n: u32) {
        self.lines += n;
        let idx = (n as usize).min(LINE_SCORES.len() - 1);
        self.score += LINE_SCORES[idx] * self.level;
    }

    /// At most one level-up per lock event, even when a multi-line clear
    /// crosses several thresholds at once.
    fn update_level(&mut self) {
        if self.lines >= self.level * LINES_PER_LEVEL {
            self.level += 1;
        }
    }

    fn update_delay(&mut self) {
        self.delay_ms = BASE_DELAY_MS
            .saturating_sub(DELAY_STEP_MS * (self.level - 1))
            .max(MIN_DELAY_MS);
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_progress(&mut self, lines: u32, level: u32) {
        self.lines = lines;
        self.level = level;
        self.update_delay();
    }
}
