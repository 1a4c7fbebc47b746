//! Root-split parallel search.
//!
//! Root moves are dealt round-robin to scoped worker threads. Each worker owns
//! its board copies and its own [`Searcher`], and returns a private best
//! `(root index, move, score)`. Results are merged only after every worker has
//! joined: highest score wins, lowest root index breaks ties, which matches
//! the sequential scan exactly.

use std::thread;

use log::debug;

use super::{SearchParams, SearchResult, Searcher};
use crate::board::eval::Evaluator;
use crate::board::{Board, Player, Square};

/// Search thread stack size (8 MB; recursion depth is bounded by the ply budget)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

#[derive(Clone, Copy, Debug)]
struct WorkerResult {
    worker_id: usize,
    best: Option<(usize, Square, i32)>,
    nodes: u64,
}

fn better(candidate: (usize, Square, i32), current: Option<(usize, Square, i32)>) -> bool {
    match current {
        None => true,
        Some((idx, _, score)) => candidate.2 > score || (candidate.2 == score && candidate.0 < idx),
    }
}

fn run_worker(
    worker_id: usize,
    workers: usize,
    board: Board,
    player: Player,
    depth: u32,
    params: SearchParams,
) -> WorkerResult {
    let evaluator = Evaluator::new(params.profile);
    let mut searcher = Searcher::new(&evaluator, player);
    let mut best = None;

    let moves = board.legal_moves(player);
    for (idx, &sq) in moves.iter().enumerate().skip(worker_id).step_by(workers) {
        let score = searcher.score_root_move(&board, sq, depth);
        let candidate = (idx, sq, score);
        if better(candidate, best) {
            best = Some(candidate);
        }
    }

    WorkerResult {
        worker_id,
        best,
        nodes: searcher.stats.nodes,
    }
}

/// Search the root moves of `board` on `params.threads` workers.
///
/// Falls back to the caller's thread if a worker cannot be spawned or panics.
#[must_use]
pub fn search_root_parallel(
    board: &Board,
    player: Player,
    depth: u32,
    params: &SearchParams,
) -> SearchResult {
    let move_count = board.legal_moves(player).len();
    if move_count == 0 {
        return SearchResult::pass();
    }
    let workers = params.threads.clamp(1, move_count);

    let results: Vec<Option<WorkerResult>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker_id| {
                let board = *board;
                let params = *params;
                thread::Builder::new()
                    .name(format!("search-{worker_id}"))
                    .stack_size(SEARCH_STACK_SIZE)
                    .spawn_scoped(scope, move || {
                        run_worker(worker_id, workers, board, player, depth, params)
                    })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.ok().and_then(|h| h.join().ok()))
            .collect()
    });

    let mut best = None;
    let mut nodes = 0;
    for (worker_id, result) in results.into_iter().enumerate() {
        let result = result.unwrap_or_else(|| {
            debug!("search-{worker_id} failed, redoing its share on the caller thread");
            run_worker(worker_id, workers, *board, player, depth, *params)
        });
        nodes += result.nodes;
        if let Some(candidate) = result.best {
            if better(candidate, best) {
                best = Some(candidate);
            }
        }
        debug!(
            "search-{}: best {:?} nodes {}",
            result.worker_id, result.best, result.nodes
        );
    }

    match best {
        Some((_, sq, score)) => SearchResult {
            best_move: Some(sq),
            score,
            nodes,
        },
        None => SearchResult::pass(),
    }
}
