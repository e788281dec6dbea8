use serde::{Deserialize, Serialize};

/// Content of one position of the padded grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    /// Sentinel ring around the playable area.
    Border,
    /// Safe cell that has not been revealed yet.
    Unrevealed { flagged: bool },
    /// Mined cell. Mines are never revealed, the view exposes them once the
    /// game is over.
    Mine { flagged: bool },
    /// Safe cell with its cached adjacent mine count.
    Revealed(u8),
}

impl BoardCell {
    pub const fn is_border(self) -> bool {
        matches!(self, Self::Border)
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine { .. })
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(
            self,
            Self::Unrevealed { flagged: true } | Self::Mine { flagged: true }
        )
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for BoardCell {
    fn default() -> Self {
        Self::Unrevealed { flagged: false }
    }
}
