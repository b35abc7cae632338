//! Shapes module - the 7 canonical stone geometries and their rotation.
//!
//! A shape is a small matrix of cells; empty cells are 0, occupied cells
//! carry the shape's color id (1..7). Rotation is a pure transform that
//! builds a new matrix; there is no wall-kick system.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::Cell;

/// One row of a shape matrix. No shape is wider or taller than 4 cells,
/// so rows fit inline without heap allocation.
pub type ShapeRow = ArrayVec<Cell, 4>;

/// A stone geometry: a small row-major matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, 4>,
}

/// The canonical stone templates. Occupied cells carry the color id.
const TEMPLATES: [&[&[Cell]]; 7] = [
    // T
    &[&[1, 1, 1], &[0, 1, 0]],
    // S
    &[&[0, 2, 2], &[2, 2, 0]],
    // Z
    &[&[3, 3, 0], &[0, 3, 3]],
    // J
    &[&[4, 0, 0], &[4, 4, 4]],
    // L
    &[&[0, 0, 5], &[5, 5, 5]],
    // I
    &[&[6, 6, 6, 6]],
    // O
    &[&[7, 7], &[7, 7]],
];

/// Number of canonical shapes.
pub const SHAPE_COUNT: usize = TEMPLATES.len();

impl Shape {
    /// Build a shape from row slices. Rows must be non-empty, rectangular
    /// and at most 4x4.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        let mut out: ArrayVec<ShapeRow, 4> = ArrayVec::new();
        for row in rows {
            out.push(row.iter().copied().collect());
        }
        Self { rows: out }
    }

    /// The canonical shape with the given template index (0..SHAPE_COUNT).
    pub fn canonical(index: usize) -> Self {
        Self::from_rows(TEMPLATES[index])
    }

    /// Draw one of the 7 canonical shapes uniformly at random.
    pub fn random(rng: &mut SimpleRng) -> Self {
        Self::canonical(rng.next_range(SHAPE_COUNT as u32) as usize)
    }

    /// Width of the shape matrix in cells.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Height of the shape matrix in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell value at local coordinate (x, y).
    pub fn at(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Iterate the occupied cells as (x, y, value) triples.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(x, &v)| (x, y, v))
        })
    }

    /// Rotate clockwise: for an h x w matrix, produce a w x h matrix where
    /// new row `x` (taken from `w-1` down to `0`) is column `x` of the
    /// original read top-to-bottom.
    pub fn rotate_cw(&self) -> Shape {
        let mut rows: ArrayVec<ShapeRow, 4> = ArrayVec::new();
        for x in (0..self.width()).rev() {
            let mut row = ShapeRow::new();
            for y in 0..self.height() {
                row.push(self.rows[y][x]);
            }
            rows.push(row);
        }
        Shape { rows }
    }
}
