use std::iter::FusedIterator;

use super::{arena::{ColId, RowId}, cell::Cell, sparse_grid::SparseGrid};

/// Which end of each chain a traversal starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Front to back along `next` links (ascending keys).
    Forward,
    /// Back to front along `prev` links (descending keys).
    Backward,
}

/// Iterator over the cells of a [`SparseGrid`], walking the row chain and,
/// within each row, its column chain in the same direction.
#[derive(Clone)]
pub struct Cells<'a> {
    grid:      &'a SparseGrid,
    direction: Direction,
    row:       Option<RowId>,
    col:       Option<ColId>,
    remaining: usize,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(grid: &'a SparseGrid, direction: Direction) -> Self {
        let row = match direction {
            Direction::Forward  => grid.front,
            Direction::Backward => grid.back,
        };
        let mut cells = Self { grid, direction, row, col: None, remaining: grid.len() };
        cells.col = row.and_then(|id| cells.first_column(id));
        cells
    }

    #[inline] pub fn direction(&self) -> Direction { self.direction }

    fn first_column(&self, row: RowId) -> Option<ColId> {
        let node = &self.grid.rows[row];
        match self.direction {
            Direction::Forward  => node.front,
            Direction::Backward => node.back,
        }
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let grid = self.grid;
        loop {
            let row = self.row?;
            if let Some(id) = self.col {
                let node = &grid.cols[id];
                self.col = match self.direction {
                    Direction::Forward  => node.next,
                    Direction::Backward => node.prev,
                };
                self.remaining -= 1;
                return Some(Cell::new(node.col, grid.rows[row].row));
            }

            let node = &grid.rows[row];
            self.row = match self.direction {
                Direction::Forward  => node.next,
                Direction::Backward => node.prev,
            };
            self.col = self.row.and_then(|id| self.first_column(id));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseGrid {
        [(3, 2), (1, 2), (0, -1), (8, 9), (5, 9), (6, 9)]
            .into_iter()
            .map(Cell::from)
            .collect()
    }

    #[test]
    fn forward_is_row_major_ascending() {
        let grid = sample();
        let cells = grid.iter().map(|c| (c.col, c.row)).collect::<Vec<_>>();
        assert_eq!(cells, vec![(0, -1), (1, 2), (3, 2), (5, 9), (6, 9), (8, 9)]);
    }

    #[test]
    fn backward_is_full_reversal() {
        let grid = sample();
        let mut forward = grid.iter().collect::<Vec<_>>();
        forward.reverse();
        assert_eq!(grid.iter_rev().collect::<Vec<_>>(), forward);
        assert_eq!(grid.iter_rev().direction(), Direction::Backward);
    }

    #[test]
    fn empty_grid_yields_nothing() {
        let grid = SparseGrid::new();
        assert_eq!(grid.iter().next(), None);
        assert_eq!(grid.iter_rev().next(), None);
    }

    #[test]
    fn exact_size() {
        let grid = sample();
        let mut iter = grid.iter_rev();
        assert_eq!(iter.len(), 6);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.by_ref().count(), 4);
        assert_eq!(iter.next(), None);
    }
}
