use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Grid of cells surrounded by a one-cell sentinel ring.
///
/// The storage is `(cols + 2) x (rows + 2)`, indexed `[x, y]`. Every interior
/// cell therefore has all 8 neighbors in storage and adjacency lookups never
/// special-case the edges.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<BoardCell>,
    mine_count: CellCount,
}

impl Board {
    /// Board without mines, every interior cell hidden.
    pub fn empty(config: &GameConfig) -> Self {
        let (cols, rows) = config.size();
        let (cols, rows) = (usize::from(cols), usize::from(rows));
        let cells = Array2::from_shape_fn((cols + 2, rows + 2), |(x, y)| {
            let on_ring = x == 0 || y == 0 || x > cols || y > rows;
            if on_ring {
                BoardCell::Border
            } else {
                BoardCell::default()
            }
        });
        Self {
            cells,
            mine_count: 0,
        }
    }

    /// Board with mines at the given interior coordinates; duplicates count once.
    pub fn from_mine_coords(config: &GameConfig, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(config);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.place_mine(coords);
        }
        Ok(board)
    }

    /// Playable size as `(cols, rows)`.
    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        // built from Coord sides, so the interior always fits
        ((x - 2) as Coord, (y - 2) as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn is_interior(&self, (x, y): Coord2) -> bool {
        let (cols, rows) = self.size();
        (1..=cols).contains(&x) && (1..=rows).contains(&y)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.is_interior(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Interior coordinates in row-major order.
    pub fn interior_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (cols, rows) = self.size();
        (1..=rows).flat_map(move |y| (1..=cols).map(move |x| (x, y)))
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords)
    }

    /// Number of mines around an interior cell.
    ///
    /// Sentinel positions and positions outside storage have no count and
    /// yield `None`.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> Option<u8> {
        if !self.is_interior(coords) {
            return None;
        }
        let count = self
            .neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count();
        // at most 8 neighbors
        Some(count as u8)
    }

    /// True once no safe interior cell is left hidden. Mines may stay hidden.
    pub fn is_cleared(&self) -> bool {
        !self
            .cells
            .iter()
            .any(|cell| matches!(cell, BoardCell::Unrevealed { .. }))
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed()).count() as CellCount
    }

    pub fn flag_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged()).count() as CellCount
    }

    /// Interior cells that are neither mines nor revealed.
    pub(crate) fn hidden_safe_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.interior_coords()
            .filter(|&pos| matches!(self[pos], BoardCell::Unrevealed { .. }))
    }

    /// Turns a hidden safe cell into a mine, keeping its flag. Returns whether
    /// a mine was added.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        match *cell {
            BoardCell::Unrevealed { flagged } => {
                *cell = BoardCell::Mine { flagged };
                self.mine_count += 1;
                true
            }
            _ => false,
        }
    }

    /// Turns a mine back into a hidden safe cell. Returns whether a mine was
    /// removed.
    pub(crate) fn remove_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        match *cell {
            BoardCell::Mine { flagged } => {
                *cell = BoardCell::Unrevealed { flagged };
                self.mine_count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Reveals a hidden safe cell, dropping any flag. Returns the adjacent mine
    /// count if the cell changed.
    pub(crate) fn reveal_cell(&mut self, coords: Coord2) -> Option<u8> {
        if !matches!(self[coords], BoardCell::Unrevealed { .. }) {
            return None;
        }
        let count = self.count_adjacent_mines(coords)?;
        self.cells[coords.to_nd_index()] = BoardCell::Revealed(count);
        Some(count)
    }

    /// Flips the flag of a hidden cell, returns the new flag state.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> Option<bool> {
        let cell = &mut self.cells[coords.to_nd_index()];
        match cell {
            BoardCell::Unrevealed { flagged } | BoardCell::Mine { flagged } => {
                *flagged = !*flagged;
                Some(*flagged)
            }
            BoardCell::Border | BoardCell::Revealed(_) => None,
        }
    }
}

impl Index<Coord2> for Board {
    type Output = BoardCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(rows: Coord, cols: Coord, mines: &[Coord2]) -> Board {
        let config = GameConfig {
            rows,
            cols,
            mines: mines.len() as CellCount,
            first_reveal: FirstReveal::Disarm,
        };
        Board::from_mine_coords(&config, mines).unwrap()
    }

    #[test]
    fn sentinel_ring_surrounds_interior() {
        let board = board(2, 3, &[]);

        assert_eq!(board.size(), (3, 2));
        for x in 0..5 {
            assert_eq!(board[(x, 0)], BoardCell::Border);
            assert_eq!(board[(x, 3)], BoardCell::Border);
        }
        for y in 0..4 {
            assert_eq!(board[(0, y)], BoardCell::Border);
            assert_eq!(board[(4, y)], BoardCell::Border);
        }
        assert_eq!(board.interior_coords().count(), 6);
        assert!(board.interior_coords().all(|pos| !board[pos].is_border()));
    }

    #[test]
    fn sentinel_positions_have_no_count() {
        let board = board(4, 4, &[(1, 1), (4, 4)]);
        let ring: Vec<Coord2> = (0..6)
            .flat_map(|i| [(i, 0), (i, 5), (0, i), (5, i)])
            .collect();

        for pos in ring {
            assert_eq!(board.count_adjacent_mines(pos), None, "{pos:?}");
        }
        assert_eq!(board.count_adjacent_mines((6, 6)), None);
        assert_eq!(board.count_adjacent_mines((200, 1)), None);
    }

    #[test]
    fn counts_all_eight_directions() {
        let mines = [
            (1, 1),
            (2, 1),
            (3, 1),
            (1, 2),
            (3, 2),
            (1, 3),
            (2, 3),
            (3, 3),
        ];
        let board = board(3, 3, &mines);

        assert_eq!(board.count_adjacent_mines((2, 2)), Some(8));
        assert_eq!(board.count_adjacent_mines((1, 1)), Some(2));
    }

    #[test]
    fn corner_cells_ignore_sentinels() {
        let board = board(2, 2, &[(2, 2)]);

        assert_eq!(board.count_adjacent_mines((1, 1)), Some(1));
        assert_eq!(board.count_adjacent_mines((2, 1)), Some(1));
        assert_eq!(board.count_adjacent_mines((2, 2)), Some(0));
    }

    #[test]
    fn wide_boards_address_columns_past_255() {
        let board = board(1, 300, &[(300, 1)]);

        assert_eq!(board.size(), (300, 1));
        assert_eq!(board[(301, 1)], BoardCell::Border);
        assert_eq!(board.count_adjacent_mines((299, 1)), Some(1));
        assert_eq!(board.count_adjacent_mines((256, 1)), Some(0));
        assert_eq!(board.count_adjacent_mines((301, 1)), None);
    }

    #[test]
    fn mine_coords_outside_interior_are_rejected() {
        let config = GameConfig::new(3, 3, 1).unwrap();

        assert_eq!(
            Board::from_mine_coords(&config, &[(0, 1)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Board::from_mine_coords(&config, &[(4, 4)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn duplicate_mines_count_once() {
        let board = board(3, 3, &[(2, 2), (2, 2)]);

        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn cleared_only_when_every_safe_cell_is_revealed() {
        let mut board = board(1, 3, &[(3, 1)]);

        assert!(!board.is_cleared());
        assert_eq!(board.reveal_cell((1, 1)), Some(0));
        assert!(!board.is_cleared());
        assert_eq!(board.reveal_cell((2, 1)), Some(1));
        assert!(board.is_cleared());
        assert_eq!(board[(3, 1)], BoardCell::Mine { flagged: false });
    }

    #[test]
    fn reveal_cell_drops_flag_and_ignores_mines() {
        let mut board = board(2, 2, &[(1, 1)]);

        assert_eq!(board.toggle_flag((2, 2)), Some(true));
        assert_eq!(board.reveal_cell((2, 2)), Some(1));
        assert_eq!(board[(2, 2)], BoardCell::Revealed(1));
        assert_eq!(board.reveal_cell((1, 1)), None);
        assert_eq!(board.reveal_cell((2, 2)), None);
        assert_eq!(board.toggle_flag((2, 2)), None);
        assert_eq!(board.toggle_flag((0, 0)), None);
    }

    #[test]
    fn moving_mines_keeps_count_consistent() {
        let mut board = board(2, 2, &[(1, 1)]);

        assert!(board.remove_mine((1, 1)));
        assert!(!board.remove_mine((1, 1)));
        assert_eq!(board.mine_count(), 0);
        assert!(board.place_mine((2, 1)));
        assert!(!board.place_mine((2, 1)));
        assert!(!board.place_mine((0, 0)));
        assert_eq!(board.mine_count(), 1);
    }
}
