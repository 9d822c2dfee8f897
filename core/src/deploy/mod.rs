use crate::*;
pub use random::*;

mod random;

/// Strategy that places the mines on a fresh board.
pub trait MineDeployer {
    fn deploy(self, config: GameConfig) -> Result<Board>;
}

/// Plants an explicit list of coordinates, for scripted layouts in tests.
/// Duplicate coordinates collapse into a single plant.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedDeployer {
    mines: Vec<Coord2>,
}

impl FixedDeployer {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MineDeployer for FixedDeployer {
    fn deploy(self, config: GameConfig) -> Result<Board> {
        let mut board = Board::new(config.size);
        for coords in self.mines {
            board.plant_mine(coords)?;
        }

        // double check mine count
        if board.mines_deployed() != config.mines {
            log::warn!(
                "Deployed mine count mismatch, actual: {}, requested: {}",
                board.mines_deployed(),
                config.mines
            );
        }
        Ok(board)
    }
}
