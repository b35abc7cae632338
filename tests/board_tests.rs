//! Board tests - grid, guard row and collision behavior.

use stonefall::core::{Board, Shape};

fn square() -> Shape {
    Shape::from_rows(&[&[7, 7], &[7, 7]])
}

#[test]
fn test_new_board_dimensions() {
    let board = Board::new(22, 10);
    assert_eq!(board.rows(), 22);
    assert_eq!(board.cols(), 10);

    for y in 0..22 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(0), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_guard_row_is_always_occupied() {
    let board = Board::new(22, 10);
    for x in 0..10 {
        let cell = board.get(x, 22).expect("guard row is addressable");
        assert_ne!(cell, 0);
    }
}

#[test]
fn test_collision_truth_table() {
    let mut board = Board::new(10, 8);
    let shape = square();

    // In-bounds over empty cells: free.
    assert!(!board.collides(&shape, 3, 3));
    assert!(!board.collides(&shape, 0, 0));
    assert!(!board.collides(&shape, 6, 8));

    // Out of bounds on either axis: collision.
    assert!(board.collides(&shape, -1, 3)); // left wall
    assert!(board.collides(&shape, 7, 3)); // right wall
    assert!(board.collides(&shape, 3, 9)); // guard row (floor)

    // Any single occupied board cell under the shape: collision.
    board.set(4, 4, 3);
    assert!(board.collides(&shape, 3, 3));
    assert!(board.collides(&shape, 4, 4));
    assert!(board.collides(&shape, 3, 4));
    assert!(!board.collides(&shape, 5, 3));
}

#[test]
fn test_collision_skips_empty_shape_cells() {
    let mut board = Board::new(10, 8);
    // S-like shape with holes at (0,0) and (2,1).
    let shape = Shape::from_rows(&[&[0, 2, 2], &[2, 2, 0]]);

    // Occupy the board under the shape's holes only.
    board.set(3, 3, 5);
    board.set(5, 4, 5);
    assert!(!board.collides(&shape, 3, 3));
}

#[test]
fn test_merge_uses_previous_row() {
    let mut board = Board::new(10, 8);
    let shape = square();

    // The drop that collided incremented y to 10 (bottom is the guard at
    // row 10); the stone rests with rows 8 and 9 filled.
    board.merge(&shape, 0, 10 - 1);
    assert_eq!(board.get(0, 8), Some(7));
    assert_eq!(board.get(1, 9), Some(7));
    assert_eq!(board.get(0, 7), Some(0));
}

#[test]
fn test_full_rows_are_detected_and_removed() {
    let mut board = Board::new(6, 4);
    for x in 0..4 {
        board.set(x, 5, 2);
    }
    board.set(0, 4, 9);

    assert!(board.is_row_full(5));
    assert!(!board.is_row_full(4));

    assert_eq!(board.clear_full_rows(), 1);
    assert!(!board.is_row_full(5));
    // The marker shifted down into the vacated row.
    assert_eq!(board.get(0, 5), Some(9));
    // A fresh empty row appeared at the top.
    for x in 0..4 {
        assert_eq!(board.get(x, 0), Some(0));
    }
}

#[test]
fn test_four_simultaneous_rows_clear_in_one_pass() {
    let mut board = Board::new(8, 4);
    for y in 4..8 {
        for x in 0..4 {
            board.set(x, y, 6);
        }
    }
    board.set(2, 3, 9);

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(2, 7), Some(9));
    for y in 0..7 {
        for x in 0..4 {
            assert_eq!(board.get(x, y), Some(0));
        }
    }
}
