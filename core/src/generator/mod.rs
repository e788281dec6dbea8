use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts for new games and resets.
pub trait MineGenerator {
    /// Builds a board with mines placed for `config`.
    fn generate(&mut self, config: &GameConfig) -> Result<Board>;

    /// Picks the hidden safe cell that receives a mine moved away by the
    /// first-reveal rule. `None` when no such cell exists.
    fn relocation_target(&mut self, board: &Board) -> Option<Coord2> {
        board.hidden_safe_coords().next()
    }
}
