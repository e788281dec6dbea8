use serde::{Deserialize, Serialize};

use crate::*;

/// Side length of the classic board.
pub const DEFAULT_SIDE: Coord = 10;

/// Mine count of the classic board.
pub const DEFAULT_MINES: CellCount = 10;

/// What happens when the very first reveal of a game lands on a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstReveal {
    /// The mine is removed, the game continues with one mine less.
    #[default]
    Disarm,
    /// The mine is moved to another safe cell, the mine count is kept.
    Relocate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    #[serde(default)]
    pub first_reveal: FirstReveal,
}

impl GameConfig {
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self {
            rows,
            cols,
            mines,
            first_reveal: FirstReveal::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub const fn with_first_reveal(self, first_reveal: FirstReveal) -> Self {
        Self {
            first_reveal,
            ..self
        }
    }

    /// Checks the construction preconditions.
    ///
    /// Mine counts are bounded by `rows * 2` as well as by the cell count. The
    /// first bound is narrower than the board requires for most shapes, but
    /// it is the established contract for valid configurations.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        let limit = self.mine_limit();
        if self.mines >= limit {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                limit,
            }
            .into());
        }
        Ok(())
    }

    /// Exclusive upper bound on the mine count.
    pub const fn mine_limit(&self) -> CellCount {
        let by_rows = (self.rows as CellCount) * 2;
        let by_cells = self.total_cells();
        if by_rows < by_cells { by_rows } else { by_cells }
    }

    /// Playable size as `(cols, rows)`, matching the `(x, y)` order.
    pub const fn size(&self) -> Coord2 {
        (self.cols, self.rows)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.cols, self.rows)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIDE,
            cols: DEFAULT_SIDE,
            mines: DEFAULT_MINES,
            first_reveal: FirstReveal::default(),
        }
    }
}
