//! Shape tests - canonical templates and rotation geometry.

use stonefall::core::shapes::SHAPE_COUNT;
use stonefall::core::{Shape, SimpleRng};

#[test]
fn test_seven_canonical_shapes() {
    assert_eq!(SHAPE_COUNT, 7);

    // Each template has exactly 4 occupied cells and its own color id.
    let mut ids = Vec::new();
    for index in 0..SHAPE_COUNT {
        let shape = Shape::canonical(index);
        assert_eq!(shape.occupied().count(), 4, "template {index}");
        ids.push(shape.occupied().next().unwrap().2);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SHAPE_COUNT, "color ids must be distinct");
}

#[test]
fn test_rotation_matches_worked_example() {
    let before = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]);
    let after = before.rotate_cw();

    // New row x (x from w-1 down to 0) is column x read top-to-bottom.
    assert_eq!(after, Shape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]));
}

#[test]
fn test_rotation_has_order_four() {
    for index in 0..SHAPE_COUNT {
        let shape = Shape::canonical(index);
        let once = shape.rotate_cw();
        let back = once.rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(shape, back);
    }
}

#[test]
fn test_rotation_preserves_occupied_count() {
    for index in 0..SHAPE_COUNT {
        let shape = Shape::canonical(index);
        assert_eq!(shape.rotate_cw().occupied().count(), 4);
    }
}

#[test]
fn test_random_draws_are_deterministic_per_seed() {
    let mut a = SimpleRng::new(42);
    let mut b = SimpleRng::new(42);
    for _ in 0..50 {
        assert_eq!(Shape::random(&mut a), Shape::random(&mut b));
    }
}
