use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform rejection sampling over the interior: draw coordinates until the
/// requested number of distinct cells hold a mine.
///
/// The generator keeps its RNG between boards, so one seed reproduces a whole
/// sequence of games including resets.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board> {
        let mut board = Board::empty(config);
        let (cols, rows) = config.size();

        let mut mines = config.mines;
        if mines >= config.total_cells() {
            log::warn!(
                "Cannot fit {} mines on {} cells, leaving one cell free",
                mines,
                config.total_cells()
            );
            mines = config.total_cells().saturating_sub(1);
        }

        let mut draws = 0u32;
        while board.mine_count() < mines {
            let coords = (
                self.rng.random_range(1..=cols),
                self.rng.random_range(1..=rows),
            );
            draws += 1;
            if board.place_mine(coords) {
                log::trace!("Placed mine at {:?}", coords);
            }
        }
        log::debug!(
            "Generated {}x{} board with {} mines in {} draws",
            cols,
            rows,
            board.mine_count(),
            draws
        );

        Ok(board)
    }

    fn relocation_target(&mut self, board: &Board) -> Option<Coord2> {
        let candidates: Vec<Coord2> = board.hidden_safe_coords().collect();
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..candidates.len());
        Some(candidates[index])
    }
}
