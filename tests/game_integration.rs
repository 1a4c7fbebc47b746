//! End-to-end games driven through the text shell.

use std::time::Duration;

use othello_engine::board::{Player, SearchParams, Square};
use othello_engine::game::Game;
use othello_engine::shell::{Controller, Shell, ShellConfig, ShellExit};

fn run(script: &str, config: ShellConfig) -> (ShellExit, Game, String) {
    let mut shell = Shell::new(script.as_bytes(), Vec::new(), config);
    let exit = shell.run().expect("shell run");
    let (game, out) = shell.into_parts();
    (exit, game, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn human_against_engine() {
    let config = ShellConfig {
        white: Controller::Ai,
        params: SearchParams::with_depth(2),
        ..ShellConfig::default()
    };
    let (exit, game, out) = run("2 3\nquit\n", config);

    assert_eq!(exit, ShellExit::Quit);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[0].square, Some(Square(2, 3)));
    assert_eq!(game.history()[1].player, Player::White);
    assert!(out.contains("White (W) is controlled by ai"));
    assert!(out.contains("AI is thinking..."));
    assert!(out.contains("AI plays: "));
    assert_eq!(game.current_player(), Player::Black);
}

#[test]
fn engine_against_engine_runs_to_completion() {
    let config = ShellConfig {
        black: Controller::Ai,
        white: Controller::Ai,
        params: SearchParams::with_depth(1),
        ai_delay: Duration::ZERO,
        seed: None,
    };
    let (exit, game, out) = run("", config);

    assert_eq!(exit, ShellExit::Finished);
    assert!(game.is_over());
    let (black, white) = game.scores();
    assert!(out.contains(&format!("Final Score - Black: {black}, White: {white}")));
    let verdict = match black.cmp(&white) {
        std::cmp::Ordering::Greater => "Black wins!",
        std::cmp::Ordering::Less => "White wins!",
        std::cmp::Ordering::Equal => "It's a tie!",
    };
    assert!(out.ends_with(&format!("{verdict}\n")));
}

#[test]
fn engine_against_random_is_reproducible() {
    let config = ShellConfig {
        black: Controller::Ai,
        white: Controller::Random,
        params: SearchParams::with_depth(1),
        seed: Some(42),
        ..ShellConfig::default()
    };
    let (_, first, _) = run("", config);
    let (_, second, _) = run("", config);

    assert!(first.is_over());
    assert_eq!(first.board(), second.board());
    assert_eq!(first.history(), second.history());
}

#[test]
fn forced_pass_is_announced() {
    use othello_engine::board::BoardBuilder;

    let board = BoardBuilder::new().row(0, "BW......").row(1, "B.......").build();
    let game = Game::from_board(board, Player::White);
    let mut shell = Shell::with_game("0 2\n".as_bytes(), Vec::new(), ShellConfig::default(), game);
    let exit = shell.run().expect("shell run");
    let (game, out) = shell.into_parts();
    let out = String::from_utf8(out).expect("utf8 output");

    assert_eq!(exit, ShellExit::Finished);
    assert!(out.contains("No valid moves for White. Passing turn."));
    assert!(out.contains("No valid moves for either player. Game over!"));
    assert_eq!(game.scores(), (4, 0));
    assert!(out.contains("Black wins!"));
}
