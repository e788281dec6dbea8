/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)` on the padded grid.
///
/// Interior cells live at `1..=cols` by `1..=rows`; column `0`, column
/// `cols + 1`, row `0` and row `rows + 1` form the sentinel border.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the 8 neighbors of a cell.
///
/// Neighbors that would fall off the coordinate type are skipped. For an
/// interior cell of a padded grid every neighbor exists, so edge cells need
/// no special casing.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &(dx, dy) = DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            let (x, y) = self.center;
            if let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                return Some((nx, ny));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&(0, 0)));
        assert!(neighbors.contains(&(2, 2)));
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn origin_skips_negative_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn max_coord_skips_overflowing_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((Coord::MAX, Coord::MAX)).collect();

        assert_eq!(
            neighbors,
            [
                (Coord::MAX - 1, Coord::MAX - 1),
                (Coord::MAX, Coord::MAX - 1),
                (Coord::MAX - 1, Coord::MAX),
            ]
        );
    }
}
