pub mod board;
pub mod game;
pub mod shell;

pub use board::{find_best_move, Board, Cell, EvalProfile, Player, SearchParams, SearchResult, Square};
pub use game::{Game, GameError, GameStatus};
pub use shell::{Controller, Shell, ShellConfig};
