//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! - Root: every legal move is searched with a full window; the strictly
//!   greatest score wins, so the first move in scan order wins ties
//! - Interior: plain alpha-beta, moves in board-scan order
//! - Leaves: depth exhausted or side to move has no legal move
//!
//! Leaves are always scored from the root player's side. Every child gets its
//! own `Board` copy; nothing is shared between sibling branches.
//! There is no transposition table, move ordering or iterative deepening.

mod params;
pub mod parallel;

use std::time::Instant;

use log::{debug, trace};

use super::eval::Evaluator;
use super::{Board, Player, Square};
pub use params::{SearchParams, DEFAULT_DEPTH};

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, or `None` when the player must pass
    pub best_move: Option<Square>,
    /// Score of the best move from the searching player's side (0 on a pass)
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

impl SearchResult {
    /// The "must pass" result.
    #[must_use]
    pub const fn pass() -> Self {
        SearchResult {
            best_move: None,
            score: 0,
            nodes: 0,
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.best_move.is_none()
    }

    /// `(row, col, score)`, with `(-1, -1, 0)` for a pass.
    #[must_use]
    pub fn as_triple(&self) -> (i32, i32, i32) {
        match self.best_move {
            Some(Square(row, col)) => (row as i32, col as i32, self.score),
            None => (-1, -1, 0),
        }
    }
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

/// Recursive search state for one thread.
pub struct Searcher<'e> {
    evaluator: &'e Evaluator<'e>,
    root: Player,
    pub stats: SearchStats,
}

impl<'e> Searcher<'e> {
    /// A searcher scoring leaves for `root`.
    #[must_use]
    pub fn new(evaluator: &'e Evaluator<'e>, root: Player) -> Self {
        Searcher {
            evaluator,
            root,
            stats: SearchStats::default(),
        }
    }

    fn leaf(&mut self, board: &Board) -> i32 {
        self.stats.leaves += 1;
        self.evaluator.evaluate(board, self.root)
    }

    /// Alpha-beta minimax. `maximizing` is true when `to_move` is the root player.
    pub fn minimax(
        &mut self,
        board: &Board,
        to_move: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || !board.has_legal_move(to_move) {
            return self.leaf(board);
        }

        let moves = board.legal_moves(to_move);
        let next_player = to_move.opponent();

        if maximizing {
            let mut best = i32::MIN;
            for sq in moves {
                let child = board.apply_move(sq, to_move);
                let score = self.minimax(&child, next_player, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for sq in moves {
                let child = board.apply_move(sq, to_move);
                let score = self.minimax(&child, next_player, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Unpruned minimax over the same tree; reference for [`Searcher::minimax`].
    pub fn minimax_full(
        &mut self,
        board: &Board,
        to_move: Player,
        depth: u32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || !board.has_legal_move(to_move) {
            return self.leaf(board);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for sq in board.legal_moves(to_move) {
            let child = board.apply_move(sq, to_move);
            let score = self.minimax_full(&child, to_move.opponent(), depth - 1, !maximizing);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    /// Score one root move: apply it, then search the opponent's reply tree.
    pub fn score_root_move(&mut self, board: &Board, sq: Square, depth: u32) -> i32 {
        let child = board.apply_move(sq, self.root);
        self.minimax(
            &child,
            self.root.opponent(),
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            false,
        )
    }
}

/// Best move for `player` at `depth` plies with the default profile.
#[must_use]
pub fn find_best_move(board: &Board, player: Player, depth: u32) -> SearchResult {
    find_best_move_with(board, player, &SearchParams::with_depth(depth))
}

/// Best move for `player` under `params`.
///
/// Returns [`SearchResult::pass`] when `player` has no legal move.
#[must_use]
pub fn find_best_move_with(board: &Board, player: Player, params: &SearchParams) -> SearchResult {
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        debug!("search: {player} has no legal move, must pass");
        return SearchResult::pass();
    }

    let depth = params.depth.max(1);
    let start = Instant::now();

    let result = if params.threads > 1 && moves.len() > 1 {
        parallel::search_root_parallel(board, player, depth, params)
    } else {
        let evaluator = Evaluator::new(params.profile);
        let mut searcher = Searcher::new(&evaluator, player);
        let mut best_move = moves[0];
        let mut best_score = i32::MIN;

        for sq in moves {
            let score = searcher.score_root_move(board, sq, depth);
            trace!("search: root move {sq} scored {score}");
            if score > best_score {
                best_score = score;
                best_move = sq;
            }
        }

        SearchResult {
            best_move: Some(best_move),
            score: best_score,
            nodes: searcher.stats.nodes,
        }
    };

    debug!(
        "search: {} depth {} profile {} moves {} -> {:?} score {} nodes {} in {:?}",
        player,
        depth,
        params.profile.name,
        moves.len(),
        result.best_move,
        result.score,
        result.nodes,
        start.elapsed()
    );

    result
}
