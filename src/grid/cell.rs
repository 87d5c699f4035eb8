use std::fmt;

/// An occupied grid position. Carries no payload; a cell either exists or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i64,
    pub row: i64,
}

impl Cell {
    #[inline] pub const fn new(col: i64, row: i64) -> Self { Self { col, row } }
}

impl From<(i64, i64)> for Cell {
    /// Builds a cell from a `(col, row)` pair, the order commands take them in.
    #[inline] fn from((col, row): (i64, i64)) -> Self { Self::new(col, row) }
}

/// Row-major ordering: by row, then by column. This is the order of a
/// front-to-back traversal of the grid.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn display_is_col_then_row() {
        assert_eq!(Cell::new(5, 6).to_string(), "(5,6)");
        assert_eq!(Cell::new(-1, 0).to_string(), "(-1,0)");
    }

    #[test]
    fn from_pair_keeps_command_order() {
        assert_eq!(Cell::from((2, 7)), Cell { col: 2, row: 7 });
    }

    #[test]
    fn orders_by_row_first() {
        let mut cells = vec![Cell::new(9, 1), Cell::new(0, 2), Cell::new(3, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(3, 1), Cell::new(9, 1), Cell::new(0, 2)]);
    }
}
