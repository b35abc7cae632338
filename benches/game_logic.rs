use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stonefall::core::{Board, Engine, Shape};
use stonefall::types::{DEFAULT_COLS, DEFAULT_ROWS};

fn bench_gravity_drop(c: &mut Criterion) {
    c.bench_function("gravity_drop_full_column", |b| {
        b.iter(|| {
            let mut engine = Engine::new(DEFAULT_ROWS, DEFAULT_COLS, black_box(12345));
            while !engine.drop(false) {}
            engine
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(DEFAULT_ROWS, DEFAULT_COLS);
            for y in (DEFAULT_ROWS - 4)..DEFAULT_ROWS {
                for x in 0..DEFAULT_COLS {
                    board.set(x as i32, y as i32, 6);
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = Shape::canonical(0);
    c.bench_function("rotate_cw", |b| b.iter(|| black_box(&shape).rotate_cw()));
}

fn bench_collision_check(c: &mut Criterion) {
    let board = Board::new(DEFAULT_ROWS, DEFAULT_COLS);
    let shape = Shape::canonical(5);
    c.bench_function("collision_check", |b| {
        b.iter(|| board.collides(black_box(&shape), 3, 10))
    });
}

criterion_group!(
    benches,
    bench_gravity_drop,
    bench_clear_four_rows,
    bench_rotate,
    bench_collision_check
);
criterion_main!(benches);
