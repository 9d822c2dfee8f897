use serde::{Deserialize, Serialize};

/// Single board cell: mine flag, reveal flag, and the surrounding-mine tally.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    revealed: bool,
    neighbor_mines: u8,
}

/// What a renderer should draw for one cell, derived from its current state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFace {
    Concealed,
    Clear,
    Numbered(u8),
    Mine,
}

impl Cell {
    pub fn plant_mine(&mut self) {
        self.has_mine = true;
    }

    pub fn increment_neighbor_mines(&mut self) {
        self.neighbor_mines += 1;
    }

    pub fn set_neighbor_mines(&mut self, count: u8) {
        self.neighbor_mines = count;
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Reveals the cell only when it actually holds a mine. Used by the
    /// end-of-game sweep so safe cells keep their concealed state.
    pub fn show_mine(&mut self) {
        if self.has_mine {
            self.revealed = true;
        }
    }

    pub const fn is_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn neighbor_mines(self) -> u8 {
        self.neighbor_mines
    }

    /// No mines around this cell: revealing it can fan out to its neighbors.
    pub const fn coast_is_clear(self) -> bool {
        self.neighbor_mines == 0
    }

    pub const fn face(self) -> CellFace {
        if !self.revealed {
            CellFace::Concealed
        } else if self.has_mine {
            CellFace::Mine
        } else if self.neighbor_mines == 0 {
            CellFace::Clear
        } else {
            CellFace::Numbered(self.neighbor_mines)
        }
    }
}
