use std::io;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use othello_engine::board::{EvalProfile, SearchParams, DEFAULT_DEPTH};
use othello_engine::shell::{Controller, Shell, ShellConfig, ShellExit};

/// Play Othello in the terminal against a person, the engine or a random mover
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Who plays Black: human, ai or random
    #[arg(long, default_value = "human")]
    black: Controller,

    /// Who plays White: human, ai or random
    #[arg(long, default_value = "ai")]
    white: Controller,

    /// Search depth in plies for engine moves and hints
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Evaluation profile: balanced, mobility, corners or positional
    #[arg(short, long, default_value = "balanced")]
    profile: EvalProfile,

    /// Worker threads for the root search
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Seed for the random controller
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.threads == 0 {
        bail!("--threads must be at least 1");
    }

    let config = ShellConfig {
        black: cli.black,
        white: cli.white,
        params: SearchParams {
            depth: cli.depth,
            profile: cli.profile,
            threads: cli.threads,
        },
        ai_delay: Duration::from_millis(cli.delay_ms),
        seed: cli.seed,
    };
    info!("starting game: {config:?}");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
    match shell.run()? {
        ShellExit::Finished => info!("game finished"),
        ShellExit::Quit | ShellExit::Eof => info!("game abandoned"),
    }
    Ok(())
}
