//! Property-based tests using proptest.

use crate::board::eval::stability::stable_discs;
use crate::board::{
    find_best_move, find_best_move_with, Board, Cell, Direction, Evaluator, Player, SearchParams,
    Searcher, Square,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

/// Play `plies` random legal moves (passing when forced) from the start.
fn random_playout(seed: u64, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut player = Player::Black;

    for _ in 0..plies {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            if !board.has_legal_move(player.opponent()) {
                break;
            }
            player = player.opponent();
            continue;
        }
        let sq = moves[rng.gen_range(0..moves.len())];
        board = board.apply_move(sq, player);
        player = player.opponent();
    }
    (board, player)
}

/// Cells that lie strictly between `sq` and a bracketing disc in some direction.
fn bracketed(board: &Board, sq: Square, player: Player) -> Vec<Square> {
    let mut cells = Vec::new();
    for dir in Direction::ALL {
        let mut run = Vec::new();
        for next in sq.ray(dir) {
            match board.cell(next).player() {
                Some(p) if p == player.opponent() => run.push(next),
                Some(_) => {
                    cells.extend(run);
                    break;
                }
                None => break,
            }
        }
    }
    cells
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: each move adds exactly one disc and only flips bracketed discs
    #[test]
    fn prop_move_is_flip_complete(seed in any::<u64>(), plies in 0..40usize) {
        let (board, player) = random_playout(seed, plies);
        for sq in board.legal_moves(player) {
            let next = board.apply_move(sq, player);
            prop_assert_eq!(next.disc_count(), board.disc_count() + 1);

            let flipped = bracketed(&board, sq, player);
            prop_assert!(!flipped.is_empty());
            for cell in Square::all() {
                let expected = if cell == sq || flipped.contains(&cell) {
                    player.disc()
                } else {
                    board.cell(cell)
                };
                prop_assert_eq!(next.cell(cell), expected);
            }
        }
    }

    /// Property: a disc never returns to empty
    #[test]
    fn prop_discs_never_vanish(seed in any::<u64>(), plies in 1..60usize) {
        let (before, _) = random_playout(seed, plies - 1);
        let (after, _) = random_playout(seed, plies);
        for sq in Square::all() {
            if before.cell(sq) != Cell::Empty {
                prop_assert_ne!(after.cell(sq), Cell::Empty);
            }
        }
    }

    /// Property: legal_moves agrees with is_legal_move and has_legal_move
    #[test]
    fn prop_move_queries_agree(seed in any::<u64>(), plies in 0..50usize) {
        let (board, _) = random_playout(seed, plies);
        for player in Player::ALL {
            let moves = board.legal_moves(player);
            prop_assert_eq!(moves.is_empty(), !board.has_legal_move(player));
            prop_assert_eq!(moves.len(), board.mobility(player));
            for sq in Square::all() {
                prop_assert_eq!(moves.contains(sq), board.is_legal_move(sq, player));
            }
        }
    }

    /// Property: stable sets only grow when empty squares get filled
    #[test]
    fn prop_stability_monotone(seed in any::<u64>(), plies in 10..60usize, fill_seed in any::<u64>()) {
        let (board, _) = random_playout(seed, plies);
        let mut rng = StdRng::seed_from_u64(fill_seed);
        let mut denser = board;
        for sq in Square::all() {
            if board.cell(sq).is_empty() && rng.gen_bool(0.5) {
                let player = if rng.gen_bool(0.5) { Player::Black } else { Player::White };
                denser.put(sq, player.disc());
            }
        }
        prop_assert!(stable_discs(&board).is_subset(stable_discs(&denser)));
    }

    /// Property: stable discs are never flipped by any legal reply
    #[test]
    fn prop_stable_discs_survive_next_move(seed in any::<u64>(), plies in 20..60usize) {
        let (board, player) = random_playout(seed, plies);
        let stable = stable_discs(&board);
        for sq in board.legal_moves(player) {
            let next = board.apply_move(sq, player);
            for disc in stable.iter() {
                prop_assert_eq!(next.cell(disc), board.cell(disc));
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// Property: alpha-beta returns the same value as unpruned minimax
    #[test]
    fn prop_alpha_beta_equals_minimax(seed in any::<u64>(), plies in 4..30usize, depth in 1..=3u32) {
        let (board, player) = random_playout(seed, plies);
        let evaluator = Evaluator::default();
        let mut pruned = Searcher::new(&evaluator, player);
        let mut full = Searcher::new(&evaluator, player);

        for sq in board.legal_moves(player) {
            let child = board.apply_move(sq, player);
            let a = pruned.minimax(&child, player.opponent(), depth - 1, i32::MIN, i32::MAX, false);
            let b = full.minimax_full(&child, player.opponent(), depth - 1, false);
            prop_assert_eq!(a, b);
        }
    }

    /// Property: the parallel root split picks the same move and score
    #[test]
    fn prop_parallel_equals_sequential(seed in any::<u64>(), plies in 4..40usize) {
        let (board, player) = random_playout(seed, plies);
        let sequential = find_best_move(&board, player, 2);
        let params = SearchParams { depth: 2, threads: 4, ..SearchParams::default() };
        let parallel = find_best_move_with(&board, player, &params);
        prop_assert_eq!(sequential.best_move, parallel.best_move);
        prop_assert_eq!(sequential.score, parallel.score);
    }
}
