//! Interactive text front end.
//!
//! Drives a [`Game`] turn by turn: prints the board and scores, announces
//! forced passes, asks the configured controller of each colour for a move,
//! and reports the winner. Humans type `row col`, `hint`, `board`, `help` or
//! `quit`. The loop only talks to the core through legality checks, move
//! application and best-move search.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{find_best_move_with, Player, SearchParams, Square};
use crate::game::{Game, GameError, GameStatus};

pub mod command;

pub use command::{parse_shell_command, ShellCommand};

const INVALID_INPUT: &str =
    "Invalid input. Enter a move as two numbers separated by a space (0-7), or 'help'.";

/// Who picks the moves for one colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Controller {
    #[default]
    Human,
    /// Alpha-beta search with the shell's [`SearchParams`]
    Ai,
    /// Uniformly random legal move
    Random,
}

impl Controller {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Controller::Human => "human",
            Controller::Ai => "ai",
            Controller::Random => "random",
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for unknown controller names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerParseError {
    pub name: String,
}

impl fmt::Display for ControllerParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown controller '{}' (expected human, ai or random)",
            self.name
        )
    }
}

impl std::error::Error for ControllerParseError {}

impl FromStr for Controller {
    type Err = ControllerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Controller::Human),
            "ai" | "engine" => Ok(Controller::Ai),
            "random" => Ok(Controller::Random),
            _ => Err(ControllerParseError {
                name: s.to_string(),
            }),
        }
    }
}

/// Error type for shell failures
#[derive(Debug)]
pub enum ShellError {
    Io(io::Error),
    /// The game rejected a move chosen by a non-human controller
    Game(GameError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "I/O error: {e}"),
            ShellError::Game(e) => write!(f, "Game error: {e}"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Io(e) => Some(e),
            ShellError::Game(e) => Some(e),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(e: io::Error) -> Self {
        ShellError::Io(e)
    }
}

impl From<GameError> for ShellError {
    fn from(e: GameError) -> Self {
        ShellError::Game(e)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ShellConfig {
    pub black: Controller,
    pub white: Controller,
    pub params: SearchParams,
    /// Pause before each computer move
    pub ai_delay: Duration,
    /// Seed for the random controller; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl ShellConfig {
    #[must_use]
    pub fn controller(&self, player: Player) -> Controller {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// How a shell session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellExit {
    /// Neither player could move
    Finished,
    /// A human typed `quit`
    Quit,
    /// Input reached end of file
    Eof,
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    game: Game,
    config: ShellConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, config: ShellConfig) -> Self {
        Self::with_game(input, out, config, Game::new())
    }

    pub fn with_game(input: R, out: W, config: ShellConfig, game: Game) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Shell {
            input,
            out,
            game,
            config,
            rng,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the shell, returning the final game and the output sink.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.out)
    }

    /// Play until the game ends or the user quits, then print the final score.
    pub fn run(&mut self) -> Result<ShellExit, ShellError> {
        self.print_banner()?;
        let exit = self.game_loop()?;
        self.print_board()?;
        self.print_result()?;
        self.out.flush()?;
        Ok(exit)
    }

    fn game_loop(&mut self) -> Result<ShellExit, ShellError> {
        loop {
            self.print_board()?;
            let player = self.game.current_player();
            let (black, white) = self.game.scores();
            writeln!(self.out, "Current player: {player} ({})", player.symbol())?;
            writeln!(self.out, "Score - Black: {black}, White: {white}")?;

            match self.game.status() {
                GameStatus::Terminal => {
                    writeln!(self.out, "No valid moves for either player. Game over!")?;
                    return Ok(ShellExit::Finished);
                }
                GameStatus::MustPass => {
                    writeln!(self.out, "No valid moves for {player}. Passing turn.")?;
                    self.game.pass()?;
                    continue;
                }
                GameStatus::Ongoing => {}
            }

            match self.config.controller(player) {
                Controller::Human => {
                    if let Some(exit) = self.human_turn(player)? {
                        return Ok(exit);
                    }
                }
                Controller::Ai => self.ai_turn(player)?,
                Controller::Random => self.random_turn(player)?,
            }
        }
    }

    /// Read commands until a move is played. `Some` ends the session.
    fn human_turn(&mut self, player: Player) -> Result<Option<ShellExit>, ShellError> {
        loop {
            write!(self.out, "Enter your move (row col), 'hint', or 'quit': ")?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                writeln!(self.out, "Input closed. Game ended.")?;
                return Ok(Some(ShellExit::Eof));
            }

            let Some(cmd) = parse_shell_command(&line) else {
                continue;
            };
            match cmd {
                ShellCommand::Quit => {
                    writeln!(self.out, "Game ended by user.")?;
                    return Ok(Some(ShellExit::Quit));
                }
                ShellCommand::Hint => {
                    let result = find_best_move_with(self.game.board(), player, &self.config.params);
                    let (row, col, score) = result.as_triple();
                    writeln!(self.out, "Suggested move: {row} {col} (score: {score})")?;
                }
                ShellCommand::Board => self.print_board()?,
                ShellCommand::Help => self.print_help()?,
                ShellCommand::Unknown(_) => writeln!(self.out, "{INVALID_INPUT}")?,
                ShellCommand::OffBoard { .. } => writeln!(self.out, "Invalid move. Try again.")?,
                ShellCommand::Move(sq) => match self.game.play(sq) {
                    Ok(()) => return Ok(None),
                    Err(GameError::IllegalMove(e)) => {
                        debug!("rejected human move: {e}");
                        writeln!(self.out, "Invalid move. Try again.")?;
                    }
                    Err(e) => return Err(e.into()),
                },
            }
        }
    }

    fn ai_turn(&mut self, player: Player) -> Result<(), ShellError> {
        self.pause();
        writeln!(self.out, "AI is thinking...")?;
        let result = find_best_move_with(self.game.board(), player, &self.config.params);
        debug!(
            "{player} ai: move {:?} score {} nodes {}",
            result.best_move, result.score, result.nodes
        );
        match result.best_move {
            Some(sq) => self.play_announced("AI", sq),
            None => Ok(self.game.pass()?),
        }
    }

    fn random_turn(&mut self, player: Player) -> Result<(), ShellError> {
        self.pause();
        let moves = self.game.board().legal_moves(player);
        match moves.as_slice().choose(&mut self.rng).copied() {
            Some(sq) => self.play_announced("Random", sq),
            None => Ok(self.game.pass()?),
        }
    }

    fn play_announced(&mut self, who: &str, sq: Square) -> Result<(), ShellError> {
        writeln!(self.out, "{who} plays: {sq}")?;
        self.game.play(sq)?;
        Ok(())
    }

    fn pause(&self) {
        if !self.config.ai_delay.is_zero() {
            thread::sleep(self.config.ai_delay);
        }
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to Othello!")?;
        for player in Player::ALL {
            let controller = self.config.controller(player);
            if controller != Controller::Human {
                writeln!(
                    self.out,
                    "{player} ({}) is controlled by {controller}",
                    player.symbol()
                )?;
            }
        }
        writeln!(
            self.out,
            "Black (B) moves first. Enter moves as row and column numbers (0-7)."
        )?;
        writeln!(
            self.out,
            "Type 'hint' for a suggested move or 'quit' to end the game."
        )
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  row col   place a disc, e.g. '2 3' (or 'd3')")?;
        writeln!(self.out, "  hint      suggest a move")?;
        writeln!(self.out, "  board     print the board")?;
        writeln!(self.out, "  quit      end the game")
    }

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", self.game.board())?;
        writeln!(self.out)
    }

    fn print_result(&mut self) -> io::Result<()> {
        let (black, white) = self.game.scores();
        writeln!(self.out, "Final Score - Black: {black}, White: {white}")?;
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => writeln!(self.out, "Black wins!"),
            std::cmp::Ordering::Less => writeln!(self.out, "White wins!"),
            std::cmp::Ordering::Equal => writeln!(self.out, "It's a tie!"),
        }
    }
}
