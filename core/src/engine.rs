use alloc::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Nothing revealed yet, the next reveal is protected from mines.
    #[default]
    Ready,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Opened,
    HitMine,
    AlreadyOpen,
    Blocked,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Toggled,
    Blocked,
}

/// One game session: the board, the generator that built it, and the
/// lifecycle state.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Game<RandomMineGenerator> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMineGenerator::from_seed(seed))
    }
}

impl<G> Game<G> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_first_reveal(&self) -> bool {
        self.state.is_ready()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    /// Whether every safe cell has been revealed.
    pub fn is_game_won(&self) -> bool {
        self.board.is_cleared()
    }

    /// Mine that ended a lost game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    /// Mines currently on the board. Drops by one if the first reveal
    /// disarmed a mine.
    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.board.flag_count()
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flag_count() as isize)
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> Option<u8> {
        self.board.count_adjacent_mines(coords)
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = GameState::InProgress;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("Game ended: {:?}", self.state);
    }
}

impl<G: MineGenerator> Game<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let board = generate_board(&mut generator, &config)?;
        Ok(Self {
            config,
            generator,
            board,
            state: GameState::default(),
            triggered_mine: None,
        })
    }

    /// Replaces the board with a freshly generated one for the same config.
    pub fn reset(&mut self) -> Result<()> {
        self.board = generate_board(&mut self.generator, &self.config)?;
        self.state = GameState::default();
        self.triggered_mine = None;
        log::debug!("Game reset");
        Ok(())
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(FlagOutcome::Blocked);
        }

        Ok(match self.board.toggle_flag(coords) {
            Some(flagged) => {
                log::debug!("Flag at {:?}: {}", coords, flagged);
                FlagOutcome::Toggled
            }
            None => FlagOutcome::Blocked,
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(Blocked);
        }

        let cell = self.board[coords];
        let outcome = match cell {
            BoardCell::Revealed(_) => AlreadyOpen,
            _ if cell.is_flagged() => Blocked,
            BoardCell::Mine { .. } if self.state.is_ready() => {
                self.disarm_first_mine(coords);
                self.open_region(coords)
            }
            BoardCell::Mine { .. } => {
                log::debug!("Hit mine at {:?}", coords);
                self.triggered_mine = Some(coords);
                self.end_game(false);
                HitMine
            }
            BoardCell::Unrevealed { .. } => self.open_region(coords),
            BoardCell::Border => return Err(GameError::InvalidCoords),
        };

        if outcome != Blocked {
            self.mark_started();
        }
        Ok(outcome)
    }

    fn disarm_first_mine(&mut self, coords: Coord2) {
        let target = match self.config.first_reveal {
            FirstReveal::Disarm => None,
            // chosen while `coords` still holds its mine, so it is never picked
            FirstReveal::Relocate => {
                let target = self.generator.relocation_target(&self.board);
                if target.is_none() {
                    log::warn!("No free cell to relocate first mine, disarming instead");
                }
                target
            }
        };

        self.board.remove_mine(coords);
        match target {
            Some(target) => {
                self.board.place_mine(target);
                log::debug!("First reveal at {:?}, mine moved to {:?}", coords, target);
            }
            None => log::debug!("First reveal at {:?}, mine removed", coords),
        }
    }

    /// Reveals a safe cell and flood-fills outward through zero-count cells.
    fn open_region(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(count) = self.board.reveal_cell(coords) else {
            return RevealOutcome::AlreadyOpen;
        };
        log::debug!("Revealed {:?}, adjacent mines: {}", coords, count);

        if count == 0 {
            let mut visited = BTreeSet::from([coords]);
            let mut to_visit: VecDeque<_> = self.board.neighbors(coords).collect();
            log::trace!("Starting flood-fill from {:?}", coords);

            while let Some(visit_coords) = to_visit.pop_front() {
                if !visited.insert(visit_coords) {
                    continue;
                }

                if !self.board.is_interior(visit_coords) {
                    continue;
                }

                // flagged safe cells are opened as well, mines never border a zero
                let Some(visit_count) = self.board.reveal_cell(visit_coords) else {
                    continue;
                };
                log::trace!(
                    "Flood revealed {:?}, adjacent mines: {}",
                    visit_coords,
                    visit_count
                );

                if visit_count == 0 {
                    to_visit.extend(
                        self.board
                            .neighbors(visit_coords)
                            .filter(|pos| !visited.contains(pos)),
                    );
                }
            }
        }

        if self.board.is_cleared() {
            self.end_game(true);
        }
        RevealOutcome::Opened
    }
}

/// Asks the generator for a board and holds it to the configured mine count.
fn generate_board<G: MineGenerator>(generator: &mut G, config: &GameConfig) -> Result<Board> {
    let board = generator.generate(config)?;
    if board.mine_count() != config.mines {
        return Err(ConfigError::MineCountMismatch {
            expected: config.mines,
            placed: board.mine_count(),
        }
        .into());
    }
    Ok(board)
}
