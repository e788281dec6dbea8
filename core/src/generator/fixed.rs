use alloc::vec::Vec;

use super::*;

/// Places mines at a predetermined set of interior cells, on every board.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board> {
        let board = Board::from_mine_coords(config, &self.mines)?;
        if board.mine_count() != config.mines {
            return Err(ConfigError::MineCountMismatch {
                expected: config.mines,
                placed: board.mine_count(),
            }
            .into());
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_is_reproduced() {
        let config = GameConfig::new(3, 3, 2).unwrap();
        let mut generator = FixedMineGenerator::new([(1, 1), (3, 2)]);

        let board = generator.generate(&config).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert!(board[(1, 1)].is_mine());
        assert!(board[(3, 2)].is_mine());
        assert_eq!(board, generator.generate(&config).unwrap());
    }

    #[test]
    fn fixed_layout_rejects_sentinel_coords() {
        let config = GameConfig::new(3, 3, 1).unwrap();

        assert_eq!(
            FixedMineGenerator::new([(0, 2)]).generate(&config),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn layout_must_match_configured_mine_count() {
        let config = GameConfig::new(10, 10, 10).unwrap();
        let crowded: Vec<Coord2> = (1..=10).flat_map(|x| [(x, 1), (x, 2), (x, 3)]).collect();

        assert_eq!(
            FixedMineGenerator::new(crowded).generate(&config),
            Err(GameError::Config(ConfigError::MineCountMismatch {
                expected: 10,
                placed: 30,
            }))
        );
        assert_eq!(
            FixedMineGenerator::new([(1, 1), (1, 1)]).generate(&GameConfig::new(3, 3, 2).unwrap()),
            Err(GameError::Config(ConfigError::MineCountMismatch {
                expected: 2,
                placed: 1,
            }))
        );
    }

    #[test]
    fn default_relocation_is_first_hidden_safe_cell() {
        let config = GameConfig::new(2, 2, 1).unwrap();
        let mut generator = FixedMineGenerator::new([(1, 1)]);
        let board = generator.generate(&config).unwrap();

        assert_eq!(generator.relocation_target(&board), Some((2, 1)));
    }
}
