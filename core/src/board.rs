use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::*;

/// Owns the grid of cells plus the running tally of planted mines. All
/// mutation goes through board methods; callers outside the crate only ever
/// see copies of individual cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mines_deployed: CellCount,
}

impl Board {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            mines_deployed: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines_deployed
    }

    pub fn mines_deployed(&self) -> CellCount {
        self.mines_deployed
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Plants a mine and bumps the neighbor tally of each surrounding
    /// in-bounds cell. Returns whether the cell was newly mined; a repeated
    /// plant leaves the board untouched, tallies included.
    pub fn plant_mine(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;

        if self[coords].is_mine() {
            return Ok(false);
        }

        self.cells[coords.to_nd_index()].plant_mine();
        self.mines_deployed += 1;
        for pos in self.cells.iter_neighbors(coords) {
            self.cells[pos.to_nd_index()].increment_neighbor_mines();
        }
        Ok(true)
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// End-of-game sweep: every mined cell gets revealed, safe cells keep
    /// whatever state they had.
    pub(crate) fn show_all_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.show_mine();
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_counts(board: &Board, expected: &[&[u8]]) {
        for (row, expected_row) in expected.iter().enumerate() {
            for (col, &expected_count) in expected_row.iter().enumerate() {
                let coords = (row as Coord, col as Coord);
                assert_eq!(
                    board[coords].neighbor_mines(),
                    expected_count,
                    "wrong count at {:?}",
                    coords
                );
            }
        }
    }

    #[test]
    fn plant_marks_cell_and_bumps_neighbors() {
        let mut board = Board::new((4, 4));

        assert_eq!(board.plant_mine((1, 1)), Ok(true));

        assert!(board[(1, 1)].is_mine());
        assert_eq!(board.mines_deployed(), 1);
        assert_counts(
            &board,
            &[
                &[1, 1, 1, 0],
                &[1, 0, 1, 0],
                &[1, 1, 1, 0],
                &[0, 0, 0, 0],
            ],
        );
    }

    #[test]
    fn replanting_leaves_counts_untouched() {
        let mut board = Board::new((4, 4));
        board.plant_mine((1, 1)).unwrap();

        assert_eq!(board.plant_mine((1, 1)), Ok(false));

        assert_eq!(board.mines_deployed(), 1);
        assert_counts(
            &board,
            &[
                &[1, 1, 1, 0],
                &[1, 0, 1, 0],
                &[1, 1, 1, 0],
                &[0, 0, 0, 0],
            ],
        );
    }

    #[test]
    fn corner_plant_bumps_three_neighbors() {
        let mut board = Board::new((4, 4));

        board.plant_mine((0, 0)).unwrap();

        assert_counts(
            &board,
            &[
                &[0, 1, 0, 0],
                &[1, 1, 0, 0],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ],
        );
    }

    #[test]
    fn counts_accumulate_across_mines() {
        let mut board = Board::new((3, 3));
        board.plant_mine((0, 0)).unwrap();
        board.plant_mine((1, 1)).unwrap();

        // the two mines sit next to each other, so each counts the other
        assert_eq!(board[(0, 0)].neighbor_mines(), 1);
        assert_eq!(board[(1, 1)].neighbor_mines(), 1);
        assert_eq!(board[(0, 1)].neighbor_mines(), 2);
        assert_eq!(board[(2, 2)].neighbor_mines(), 1);
        assert_eq!(board.mines_deployed(), 2);
        assert_eq!(board.safe_cells(), 7);
    }

    #[test]
    fn plant_outside_board_is_rejected() {
        let mut board = Board::new((4, 4));

        assert_eq!(board.plant_mine((4, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.plant_mine((0, 4)), Err(GameError::OutOfBounds));
        assert_eq!(board.mines_deployed(), 0);
    }

    #[test]
    fn board_state_survives_a_serde_round_trip() {
        let mut board = Board::new((2, 2));
        board.plant_mine((0, 1)).unwrap();
        board.cell_mut((1, 0)).reveal();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
    }

    #[test]
    fn show_all_mines_leaves_safe_cells_concealed() {
        let mut board = Board::new((2, 2));
        board.plant_mine((0, 0)).unwrap();

        board.show_all_mines();

        assert!(board[(0, 0)].is_revealed());
        assert!(!board[(0, 1)].is_revealed());
        assert!(!board[(1, 0)].is_revealed());
        assert!(!board[(1, 1)].is_revealed());
    }
}
