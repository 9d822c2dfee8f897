use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, zero-based.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    fn to_nd_index(self) -> [usize; 2];
}

impl ToNdIndex for Coord2 {
    fn to_nd_index(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        NeighborIter::new(index, (rows.try_into().unwrap(), cols.try_into().unwrap()))
    }
}

/// Walks the 8-connected neighborhood of a cell in row-major order, clipped
/// at the grid edges. Snapshots the bounds instead of borrowing the grid.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    first_col: Coord,
    last: Coord2,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        let (rows, cols) = bounds;
        let first = (center.0.saturating_sub(1), center.1.saturating_sub(1));
        let last = (
            center.0.saturating_add(1).min(rows.saturating_sub(1)),
            center.1.saturating_add(1).min(cols.saturating_sub(1)),
        );
        let window_holds_cells = rows > 0 && cols > 0 && first.0 <= last.0 && first.1 <= last.1;
        Self {
            center,
            first_col: first.1,
            last,
            cursor: window_holds_cells.then_some(first),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(at) = self.cursor {
            self.cursor = if at.1 < self.last.1 {
                Some((at.0, at.1 + 1))
            } else if at.0 < self.last.0 {
                Some((at.0 + 1, self.first_col))
            } else {
                None
            };
            if at != self.center {
                return Some(at);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_neighbors(grid: &Array2<u8>, index: Coord2) -> Vec<Coord2> {
        grid.iter_neighbors(index).collect()
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let grid = Array2::<u8>::zeros((4, 4));
        let neighbors = collect_neighbors(&grid, (2, 2));
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&(1, 1)));
        assert!(neighbors.contains(&(3, 3)));
        assert!(!neighbors.contains(&(2, 2)));
    }

    #[test]
    fn neighbors_walk_in_row_major_order() {
        let grid = Array2::<u8>::zeros((3, 3));
        assert_eq!(
            collect_neighbors(&grid, (1, 1)),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn corner_cells_have_three_neighbors() {
        let grid = Array2::<u8>::zeros((4, 4));
        for corner in [(0, 0), (0, 3), (3, 0), (3, 3)] {
            assert_eq!(collect_neighbors(&grid, corner).len(), 3);
        }
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let grid = Array2::<u8>::zeros((4, 4));
        assert_eq!(collect_neighbors(&grid, (0, 2)).len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = Array2::<u8>::zeros((1, 1));
        assert!(collect_neighbors(&grid, (0, 0)).is_empty());
    }

    #[test]
    fn mult_covers_full_coord_range() {
        assert_eq!(mult(4, 4), 16);
        assert_eq!(mult(255, 255), 65025);
        assert_eq!(mult(0, 200), 0);
    }
}
