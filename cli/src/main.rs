use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use mineclear_core::{
    CellCount, Coord, DEFAULT_MINES, DEFAULT_SIDE, FirstReveal, Game, GameConfig,
};
use rand::Rng;

mod command;
mod render;

use command::{Command, HELP};
use render::TextBoard;

/// Clear the minefield without stepping on a mine.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    rows: Coord,

    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    cols: Coord,

    /// Number of mines, must stay below twice the row count
    #[arg(long, default_value_t = DEFAULT_MINES)]
    mines: CellCount,

    /// Seed for mine placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Move a mine hit by the first reveal instead of removing it
    #[arg(long)]
    relocate_first_mine: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

impl Args {
    fn game_config(&self) -> mineclear_core::Result<GameConfig> {
        let first_reveal = if self.relocate_first_mine {
            FirstReveal::Relocate
        } else {
            FirstReveal::Disarm
        };
        Ok(GameConfig::new(self.rows, self.cols, self.mines)?.with_first_reveal(first_reveal))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config().context("Invalid board settings")?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "Starting {}x{} game with {} mines, seed {}",
        config.cols,
        config.rows,
        config.mines,
        seed
    );
    let mut game = Game::with_seed(config, seed).context("Could not create game")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}")?;
    write!(stdout, "{}> ", TextBoard::new(&game))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => match command.apply(&mut game) {
                Ok(message) => {
                    if let Some(message) = message {
                        writeln!(stdout, "{message}")?;
                    }
                    write!(stdout, "{}", TextBoard::new(&game))?;
                }
                Err(err) => {
                    log::debug!("Rejected {:?}: {}", command, err);
                    writeln!(stdout, "{err}")?;
                }
            },
            Err(err) => writeln!(stdout, "{err}")?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    log::info!("Bye");
    Ok(())
}
