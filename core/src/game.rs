use serde::{Deserialize, Serialize};
use std::fmt;

use crate::*;

/// One-way notifications for whoever tracks elapsed time: counting starts
/// with the first effective reveal and stops when the session reaches a
/// terminal state. The session never reads anything back.
pub trait GameClock {
    fn start_counting(&mut self);
    fn stop_counting(&mut self);
}

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game accepts reveals
    InProgress,
    /// Game ended and player won
    Won,
    /// Game ended and player lost
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        match self {
            Self::InProgress => false,
            Self::Won => true,
            Self::Lost => true,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of revealing a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Exploded => true,
            Won => true,
        }
    }
}

/// Represents a game from deployment to finish. The session exclusively owns
/// its board; collaborators get read-only queries and the one-way clock
/// notifications, nothing else.
pub struct Game {
    board: Board,
    revealed_count: CellCount,
    status: GameStatus,
    clock: Option<Box<dyn GameClock>>,
}

impl Game {
    pub fn new(deployer: impl MineDeployer, config: GameConfig) -> Result<Game> {
        let board = deployer.deploy(config)?;
        Ok(Self {
            board,
            revealed_count: 0,
            status: Default::default(),
            clock: None,
        })
    }

    /// Attaches the timer collaborator. Replacing it mid-session drops the
    /// previous one without further notifications.
    pub fn attach_clock(&mut self, clock: Box<dyn GameClock>) {
        self.clock = Some(clock);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ended(&self) -> bool {
        self.status.is_final()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn mines_deployed(&self) -> CellCount {
        self.board.mines_deployed()
    }

    pub fn safe_cells(&self) -> CellCount {
        self.board.safe_cells()
    }

    pub fn cells_revealed(&self) -> CellCount {
        self.revealed_count
    }

    /// How many cells have not been revealed yet, mined ones included.
    pub fn cells_remaining(&self) -> CellCount {
        self.board.total_cells() - self.revealed_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords]
    }

    pub fn face_at(&self, coords: Coord2) -> CellFace {
        self.board[coords].face()
    }

    /// Reveal a cell. Revealing outside the board is an error; revealing an
    /// already-revealed cell or playing on after the game ended changes
    /// nothing.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if self.status.is_final() || self.board[coords].is_revealed() {
            return Ok(NoChange);
        }

        self.notify_started();

        Ok(if self.board[coords].is_mine() {
            self.board.cell_mut(coords).reveal();
            self.revealed_count += 1;
            log::debug!("Revealed a mine at {:?}", coords);
            self.end_game(false);
            Exploded
        } else {
            self.reveal_safe(coords);
            if self.revealed_count == self.board.safe_cells() {
                self.end_game(true);
                Won
            } else {
                Revealed
            }
        })
    }

    /// Helper to reveal a single safe cell and cascade if its coast is clear.
    fn reveal_safe(&mut self, coords: Coord2) {
        use std::collections::{HashSet, VecDeque};

        self.board.cell_mut(coords).reveal();
        self.revealed_count += 1;
        log::debug!(
            "Revealed cell at {:?}, mine count: {}",
            coords,
            self.board[coords].neighbor_mines()
        );

        if !self.board[coords].coast_is_clear() {
            return;
        }

        let mut visited = HashSet::from([coords]);
        let mut to_visit: VecDeque<_> = self
            .board
            .iter_neighbors(coords)
            .filter(|&pos| !self.board[pos].is_revealed())
            .collect();
        log::trace!(
            "Starting cascade from {:?}, initial neighbors: {:?}",
            coords,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            // skip cells another branch of the cascade already revealed
            if self.board[visit_coords].is_revealed() {
                continue;
            }

            self.board.cell_mut(visit_coords).reveal();
            self.revealed_count += 1;
            log::trace!(
                "Cascade revealed cell at {:?}, mine count: {}",
                visit_coords,
                self.board[visit_coords].neighbor_mines()
            );

            // only zero-count cells extend the frontier, so the cascade can
            // never walk onto a mine
            if self.board[visit_coords].coast_is_clear() {
                to_visit.extend(
                    self.board
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| !self.board[pos].is_revealed())
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    /// Fires the clock start exactly once, right before the first effective
    /// reveal of the session.
    fn notify_started(&mut self) {
        if self.revealed_count == 0 {
            log::debug!("First reveal, clock starts counting");
            if let Some(clock) = self.clock.as_mut() {
                clock.start_counting();
            }
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.status.is_final() {
            return;
        }

        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
        if !won {
            self.board.show_all_mines();
        }
        log::debug!("Game over: {:?}", self.status);
        if let Some(clock) = self.clock.as_mut() {
            clock.stop_counting();
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("revealed_count", &self.revealed_count)
            .field("status", &self.status)
            .field("clock", &self.clock.is_some())
            .finish()
    }
}
