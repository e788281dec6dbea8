use std::str::FromStr;

use mineclear_core::{Coord, Coord2, FlagOutcome, Game, MineGenerator, RevealOutcome};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Restart,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, type `h` for help")]
    Unknown(String),
    #[error("Expected two coordinates: X Y")]
    MissingCoords,
    #[error("Invalid coordinate `{0}`")]
    BadCoord(String),
}

pub const HELP: &str = "\
commands:
  o X Y   reveal the cell in column X, row Y (also `r`)
  f X Y   toggle a flag
  n       start a new game (also `esc`)
  h       show this help
  q       quit";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "o" | "r" | "open" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words)?),
            "n" | "new" | "esc" | "restart" => Command::Restart,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_string())),
        };
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, ParseCommandError> {
    let mut next = || -> Result<Coord, ParseCommandError> {
        let word = words.next().ok_or(ParseCommandError::MissingCoords)?;
        word.parse()
            .map_err(|_| ParseCommandError::BadCoord(word.to_string()))
    };
    Ok((next()?, next()?))
}

impl Command {
    /// Runs the command against the game and returns a message for the player.
    pub fn apply<G: MineGenerator>(
        self,
        game: &mut Game<G>,
    ) -> mineclear_core::Result<Option<&'static str>> {
        log::debug!("Applying {:?}", self);
        Ok(match self {
            Command::Reveal(coords) => match game.reveal(coords)? {
                RevealOutcome::Opened if game.is_won() => Some("GameClear"),
                RevealOutcome::Opened => None,
                RevealOutcome::HitMine => Some("GameOver"),
                RevealOutcome::AlreadyOpen => Some("Already revealed"),
                RevealOutcome::Blocked if game.is_game_over() => {
                    Some("Game has ended, type `n` for a new one")
                }
                RevealOutcome::Blocked => Some("Cell is flagged, unflag it first"),
            },
            Command::Flag(coords) => match game.toggle_flag(coords)? {
                FlagOutcome::Toggled => None,
                FlagOutcome::Blocked if game.is_game_over() => {
                    Some("Game has ended, type `n` for a new one")
                }
                FlagOutcome::Blocked => Some("Revealed cells cannot be flagged"),
            },
            Command::Restart => {
                game.reset()?;
                Some("New game")
            }
            Command::Help => Some(HELP),
            Command::Quit => None,
        })
    }
}
