use thiserror::Error;

use crate::CellCount;

/// Rejected board parameters. No board is built when one of these is raised.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Too many mines: {mines} requested, must be below {limit}")]
    TooManyMines { mines: CellCount, limit: CellCount },
    #[error("Mine layout places {placed} mines, configured {expected}")]
    MineCountMismatch {
        expected: CellCount,
        placed: CellCount,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
