//! Board module - manages the game grid
//!
//! The board is `rows` playable rows by `cols` columns, row-major, with one
//! synthetic fully-occupied guard row appended at the bottom. The guard row
//! acts as an always-colliding floor so collision checks never need a
//! separate "below the board" branch. Because of it, the lock merge writes
//! at `offset_y - 1`: the y increment that detected the collision is one
//! past the resting position.
//!
//! Coordinates: (x, y), x left-to-right, y top-to-bottom, row 0 at the top.
//! The board is mutated only by the lock-and-clear pipeline.

use crate::core::shapes::Shape;
use crate::types::Cell;

/// Cell value used for the guard row.
const GUARD: Cell = 1;

/// The game grid: playable rows plus the guard row, flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with `rows` playable rows and `cols` columns.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        let mut cells = vec![0; (rows + 1) * cols];
        cells[rows * cols..].fill(GUARD);
        Self { rows, cols, cells }
    }

    /// Number of playable rows (the guard row is not counted).
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index for (x, y), guard row included. None if out of bounds.
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols as i32 || y < 0 || y > self.rows as i32 {
            return None;
        }
        Some((y as usize) * self.cols + (x as usize))
    }

    /// Cell at (x, y). The guard row reads back as occupied.
    /// Returns None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set a cell in the playable area. Returns false if out of bounds or
    /// aimed at the guard row.
    pub fn set(&mut self, x: i32, y: i32, value: Cell) -> bool {
        if y >= self.rows as i32 {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check a shape against the board at the given offset.
    ///
    /// True when any occupied shape cell maps to an out-of-bounds or
    /// non-zero board cell; the guard row makes the floor collide without a
    /// special case. Pure: used by move, rotate, spawn and drop.
    pub fn collides(&self, shape: &Shape, off_x: i32, off_y: i32) -> bool {
        for (cx, cy, _) in shape.occupied() {
            match self.get(off_x + cx as i32, off_y + cy as i32) {
                Some(0) => {}
                _ => return true,
            }
        }
        false
    }

    /// Merge a landed stone into the board.
    ///
    /// `off_y` is the y whose increment detected the collision, so cells are
    /// written one row up (`off_y - 1`). Values are added; collision
    /// detection guarantees the targets are empty, and a target outside the
    /// playable area is an invariant violation, not a recoverable state.
    pub fn merge(&mut self, shape: &Shape, off_x: i32, off_y: i32) {
        for (cx, cy, value) in shape.occupied() {
            let x = off_x + cx as i32;
            let y = off_y + cy as i32 - 1;
            let idx = match self.index(x, y) {
                Some(idx) if y < self.rows as i32 => idx,
                _ => panic!("stone merge outside the board at ({x}, {y})"),
            };
            self.cells[idx] += value;
        }
    }

    /// Whether playable row `y` has no empty cell.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        let start = y * self.cols;
        self.cells[start..start + self.cols].iter().all(|&c| c != 0)
    }

    /// Remove playable row `y`, shifting the rows above down and inserting
    /// a fresh empty row at the top.
    pub fn remove_row(&mut self, y: usize) {
        assert!(y < self.rows, "row removal outside the board at row {y}");

        // Shift rows [0, y) down by one; copy_within handles the overlap.
        for row in (1..=y).rev() {
            let src = (row - 1) * self.cols;
            let dst = row * self.cols;
            self.cells.copy_within(src..src + self.cols, dst);
        }
        self.cells[..self.cols].fill(0);
    }

    /// Remove every full playable row and return how many were removed.
    ///
    /// The scan restarts from the top after each removal because row
    /// indices shift, and stops once a full pass finds no complete row.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        'scan: loop {
            for y in 0..self.rows {
                if self.is_row_full(y) {
                    self.remove_row(y);
                    cleared += 1;
                    continue 'scan;
                }
            }
            break;
        }
        cleared
    }
}
