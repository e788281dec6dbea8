use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a front-end may know about one cell.
///
/// `mine` stays `None` while the game is running, `adjacent_mines` is only
/// known for revealed cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub revealed: bool,
    pub flagged: bool,
    pub mine: Option<bool>,
    pub adjacent_mines: Option<u8>,
}

impl CellView {
    fn new(cell: BoardCell, game_over: bool) -> Self {
        Self {
            revealed: cell.is_revealed(),
            flagged: cell.is_flagged(),
            mine: game_over.then_some(cell.is_mine()),
            adjacent_mines: cell.adjacent_mines(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub state: GameState,
    pub game_over: bool,
    pub won: bool,
    pub rows: Coord,
    pub cols: Coord,
    pub mine_count: CellCount,
    pub flags: CellCount,
    pub triggered_mine: Option<Coord2>,
}

impl<G> Game<G> {
    /// View of one interior cell.
    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board().validate_coords(coords)?;
        Ok(CellView::new(self.board()[coords], self.is_game_over()))
    }

    pub fn summary(&self) -> GameSummary {
        let (cols, rows) = self.size();
        GameSummary {
            state: self.state(),
            game_over: self.is_game_over(),
            won: self.is_won(),
            rows,
            cols,
            mine_count: self.mine_count(),
            flags: self.flag_count(),
            triggered_mine: self.triggered_mine(),
        }
    }
}

/// Read-only copy of everything a front-end draws.
///
/// `cells` covers the interior only and is indexed `[x - 1, y - 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub summary: GameSummary,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_game<G>(game: &Game<G>) -> Self {
        let summary = game.summary();
        let board = game.board();
        let mut cells = Array2::from_elem(
            (usize::from(summary.cols), usize::from(summary.rows)),
            CellView::default(),
        );

        for (x, y) in board.interior_coords() {
            cells[[usize::from(x - 1), usize::from(y - 1)]] =
                CellView::new(board[(x, y)], summary.game_over);
        }

        Self { summary, cells }
    }

    /// View of the interior cell at padded-grid coordinates.
    pub fn cell(&self, (x, y): Coord2) -> Option<CellView> {
        let x = usize::from(x).checked_sub(1)?;
        let y = usize::from(y).checked_sub(1)?;
        self.cells.get([x, y]).copied()
    }
}
