//! Benchmarks for Othello engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use othello_engine::board::eval::stable_discs;
use othello_engine::board::{
    find_best_move, find_best_move_with, Board, EdgeStabilityTable, EvalProfile, Evaluator,
    Player, SearchParams, Square,
};

/// A crowded midgame position with occupied corners and edges
const MIDGAME: &str = "\
    B.WWWW..\
    .BBWWB..\
    WWBBWBW.\
    WBWBBWW.\
    WBBWBBW.\
    .WBBBWB.\
    ..BWWB..\
    ..W.....";

fn positions() -> Vec<(&'static str, Board)> {
    let mut opening = Board::new();
    for (sq, player) in [
        (Square(2, 3), Player::Black),
        (Square(2, 2), Player::White),
        (Square(3, 2), Player::Black),
    ] {
        opening = opening.apply_move(sq, player);
    }
    vec![
        ("startpos", Board::new()),
        ("opening", opening),
        ("midgame", MIDGAME.parse().expect("valid snapshot")),
    ]
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, board) in positions() {
        group.bench_with_input(BenchmarkId::new("legal_moves", name), &board, |b, board| {
            b.iter(|| black_box(board.legal_moves(Player::Black)))
        });
    }

    group.finish();
}

fn bench_edge_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_table");
    group.sample_size(10);
    group.bench_function("build", |b| b.iter(EdgeStabilityTable::build));
    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for profile in EvalProfile::BUILTIN {
        let evaluator = Evaluator::new(profile);
        for (name, board) in positions() {
            let id = BenchmarkId::new(profile.name, name);
            group.bench_with_input(id, &board, |b, board| {
                b.iter(|| black_box(evaluator.evaluate(board, Player::Black)))
            });
        }
    }

    for (name, board) in positions() {
        group.bench_with_input(BenchmarkId::new("stable_discs", name), &board, |b, board| {
            b.iter(|| black_box(stable_discs(board)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let board = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| find_best_move(&board, Player::Black, black_box(depth)))
        });
    }

    let params = SearchParams {
        depth: 4,
        threads: 4,
        ..SearchParams::default()
    };
    group.bench_function("startpos_parallel_4", |b| {
        b.iter(|| find_best_move_with(&board, Player::Black, black_box(&params)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_movegen,
    bench_edge_table,
    bench_eval,
    bench_search
);
criterion_main!(benches);
