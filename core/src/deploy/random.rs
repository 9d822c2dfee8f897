use super::*;

/// Uniform random deployment: draws cells until the requested number of
/// distinct cells holds a mine. A draw that lands on an already-mined cell is
/// discarded entirely, counts included. A quota that would leave no safe cell
/// is refused before the board is built.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeployer {
    seed: u64,
}

impl RandomDeployer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineDeployer for RandomDeployer {
    fn deploy(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        let (rows, cols) = config.size;

        // a quota filling the whole board would keep the draw loop below
        // from ever finishing
        if config.mines >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }

        let mut board = Board::new(config.size);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        while board.mines_deployed() < config.mines {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            if board.plant_mine(coords)? {
                log::trace!("Planted mine at {:?}", coords);
            }
        }

        log::debug!(
            "Deployed {} mines on a {}x{} board with seed {}",
            board.mines_deployed(),
            rows,
            cols,
            self.seed
        );
        Ok(board)
    }
}
