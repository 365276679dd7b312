use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use gridtoe::{has_line, Board, Position, Symbol};

const X: Symbol = Symbol('X');
const O: Symbol = Symbol('O');

/// Checkerboard fill: every line blocked, so the scan never exits early.
fn blocked_board(size: usize) -> Board {
    let mut board = Board::new(size).unwrap();
    for row in 0..size {
        for col in 0..size {
            let symbol = if (row + col) % 2 == 0 { X } else { O };
            board.place(Position::new(row, col), symbol);
        }
    }
    board
}

fn winning_board(size: usize) -> Board {
    let mut board = Board::new(size).unwrap();
    for col in 0..size {
        board.place(Position::new(size - 1, col), X);
    }
    board
}

fn bench_has_line(c: &mut Criterion) {
    let blocked = blocked_board(10);
    let won = winning_board(10);
    let empty = Board::new(10).unwrap();

    c.bench_function("has_line/blocked_10x10", |b| {
        b.iter(|| black_box(has_line(black_box(&blocked), X)))
    });
    c.bench_function("has_line/won_10x10", |b| {
        b.iter(|| black_box(has_line(black_box(&won), X)))
    });
    c.bench_function("has_line/empty_10x10", |b| {
        b.iter(|| black_box(has_line(black_box(&empty), X)))
    });
}

criterion_group!(win_check, bench_has_line);
criterion_main!(win_check);
