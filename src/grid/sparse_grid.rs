use std::{fmt, io::{self, Write}};

use anyhow::{ensure, Result};
use smallvec::SmallVec;

use super::{
    arena::{Arena, ColId, RowId},
    cell::Cell,
    iter::{Cells, Direction},
    node::{ColumnNode, RowNode},
};

/// Cells removed by a single bomb: the target and its four orthogonal neighbours.
pub type Blast = SmallVec<[Cell; 5]>;

/// A sparse grid of occupied cells, stored as a doubly linked chain of rows in
/// ascending order, each owning a doubly linked chain of columns in ascending
/// order.
///
/// Both chains expose their front and back in O(1); there is no index beyond
/// the links, so locating a row or column is a linear scan from the front.
#[derive(Clone, Default)]
pub struct SparseGrid {
    pub(crate) rows: Arena<RowId, RowNode>,
    pub(crate) cols: Arena<ColId, ColumnNode>,
    pub(crate) front: Option<RowId>,
    pub(crate) back:  Option<RowId>,
    len: usize,
}

impl SparseGrid {
    /// Create an empty grid.
    pub fn new() -> Self { Self::default() }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of occupied cells.
    #[inline] pub fn len(&self) -> usize { self.len }

    #[inline] pub fn is_empty(&self) -> bool { self.front.is_none() }

    /// Number of rows holding at least one cell.
    #[inline] pub fn num_rows(&self) -> usize { self.rows.len() }

    /// Returns true if `cell` is occupied.
    pub fn contains(&self, cell: Cell) -> bool {
        let Some(row) = self.find_row(cell.row) else { return false };
        let mut cursor = self.rows[row].front;
        while let Some(id) = cursor {
            let node = &self.cols[id];
            if node.col >= cell.col { return node.col == cell.col }
            cursor = node.next;
        }
        false
    }

    /// Number of cells in `row`, or `None` if the row holds none.
    pub fn row_len(&self, row: i64) -> Option<usize> {
        self.find_row(row).map(|id| self.rows[id].count)
    }

    /// Iterator over `(row, count)` pairs in ascending row order.
    pub fn rows(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        std::iter::successors(self.front, |&id| self.rows[id].next)
            .map(|id| (self.rows[id].row, self.rows[id].count))
    }

    /// Cells front to back: rows ascending, columns ascending within a row.
    pub fn iter(&self) -> Cells<'_> { Cells::new(self, Direction::Forward) }

    /// Cells back to front, following the `prev` links of both chains.
    pub fn iter_rev(&self) -> Cells<'_> { Cells::new(self, Direction::Backward) }

    fn find_row(&self, row: i64) -> Option<RowId> {
        let mut cursor = self.front;
        while let Some(id) = cursor {
            let node = &self.rows[id];
            if node.row >= row { return (node.row == row).then_some(id) }
            cursor = node.next;
        }
        None
    }

    // -----------------------------------------------------------------------
    // House
    // -----------------------------------------------------------------------

    /// Occupy `cell`. Returns false if it was already occupied, in which case
    /// the grid is unchanged.
    pub fn house(&mut self, cell: Cell) -> bool {
        let Cell { col, row } = cell;

        // First row at or past the target; `None` means append after back.
        let mut cursor = self.front;
        while let Some(id) = cursor {
            if self.rows[id].row >= row { break }
            cursor = self.rows[id].next;
        }

        match cursor {
            Some(id) if self.rows[id].row == row => {
                if !self.insert_column(id, col) { return false }
            }
            succ => {
                let first = self.cols.alloc(ColumnNode::new(col));
                let id = self.rows.alloc(RowNode::with_column(row, first));
                self.link_row_before(id, succ);
            }
        }

        self.len += 1;
        true
    }

    /// Insert `col` into the chain of `row`, keeping it ascending.
    fn insert_column(&mut self, row: RowId, col: i64) -> bool {
        let mut cursor = self.rows[row].front;
        while let Some(id) = cursor {
            let node = &self.cols[id];
            if node.col == col { return false }
            if node.col > col { break }
            cursor = node.next;
        }

        let id = self.cols.alloc(ColumnNode::new(col));
        self.link_column_before(row, id, cursor);
        self.rows[row].count += 1;
        true
    }

    // -----------------------------------------------------------------------
    // Bomb
    // -----------------------------------------------------------------------

    /// Clear `cell` and its four orthogonal neighbours. Unoccupied targets are
    /// skipped; diagonal neighbours are never touched.
    ///
    /// Returns the removed cells in front-to-back order.
    pub fn bomb(&mut self, cell: Cell) -> Blast {
        let Cell { col, row } = cell;
        let mut blast = Blast::new();

        // Neighbours outside the i64 range cannot hold cells, so saturating
        // folds them onto a coordinate that the same-row case already covers.
        let (above, below) = (row.saturating_sub(1), row.saturating_add(1));
        let (left, right) = (col.saturating_sub(1), col.saturating_add(1));

        let mut cursor = self.front;
        while let Some(id) = cursor {
            let current = self.rows[id].row;
            if current > below { break }
            cursor = self.rows[id].next;

            if current == row {
                self.remove_columns(id, left, right, &mut blast);
            } else if current == above || current == below {
                self.remove_columns(id, col, col, &mut blast);
            } else {
                continue;
            }

            if self.rows[id].count == 0 {
                self.unlink_row(id);
            }
        }

        self.len -= blast.len();
        blast
    }

    /// Unlink every column of `row` within `lo..=hi`.
    fn remove_columns(&mut self, row: RowId, lo: i64, hi: i64, blast: &mut Blast) {
        let row_key = self.rows[row].row;
        let mut cursor = self.rows[row].front;
        while let Some(id) = cursor {
            let col = self.cols[id].col;
            if col > hi { break }
            cursor = self.cols[id].next;

            if col >= lo {
                self.unlink_column(row, id);
                self.rows[row].count -= 1;
                blast.push(Cell::new(col, row_key));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Printing
    // -----------------------------------------------------------------------

    /// Write the `PrintFront` header followed by every cell front to back.
    pub fn print_front<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "PrintFront")?;
        self.iter().try_for_each(|cell| writeln!(out, "{cell}"))
    }

    /// Write the `PrintEnd` header followed by every cell back to front.
    pub fn print_end<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "PrintEnd")?;
        self.iter_rev().try_for_each(|cell| writeln!(out, "{cell}"))
    }

    /// Release every row and column.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.cols.clear();
        self.front = None;
        self.back = None;
        self.len = 0;
    }

    // -----------------------------------------------------------------------
    // Linking
    // -----------------------------------------------------------------------

    /// Splice detached row `id` in front of `succ`, or after the back if `succ` is `None`.
    fn link_row_before(&mut self, id: RowId, succ: Option<RowId>) {
        let prev = match succ {
            Some(next) => self.rows[next].prev,
            None => self.back,
        };
        self.rows[id].prev = prev;
        self.rows[id].next = succ;

        match prev {
            Some(p) => self.rows[p].next = Some(id),
            None => self.front = Some(id),
        }
        match succ {
            Some(n) => self.rows[n].prev = Some(id),
            None => self.back = Some(id),
        }
    }

    /// Unlink row `id` and release its record. Its column chain must already be empty.
    fn unlink_row(&mut self, id: RowId) {
        let node = self.rows.release(id);
        debug_assert!(node.front.is_none() && node.count == 0, "released a non-empty row");

        match node.prev {
            Some(p) => self.rows[p].next = node.next,
            None => self.front = node.next,
        }
        match node.next {
            Some(n) => self.rows[n].prev = node.prev,
            None => self.back = node.prev,
        }
    }

    /// Splice detached column `id` into `row` in front of `succ`, or after the row's back.
    fn link_column_before(&mut self, row: RowId, id: ColId, succ: Option<ColId>) {
        let prev = match succ {
            Some(next) => self.cols[next].prev,
            None => self.rows[row].back,
        };
        self.cols[id].prev = prev;
        self.cols[id].next = succ;

        match prev {
            Some(p) => self.cols[p].next = Some(id),
            None => self.rows[row].front = Some(id),
        }
        match succ {
            Some(n) => self.cols[n].prev = Some(id),
            None => self.rows[row].back = Some(id),
        }
    }

    /// Unlink column `id` from `row` and release its record. Does not touch `count`.
    fn unlink_column(&mut self, row: RowId, id: ColId) {
        let node = self.cols.release(id);

        match node.prev {
            Some(p) => self.cols[p].next = node.next,
            None => self.rows[row].front = node.next,
        }
        match node.next {
            Some(n) => self.cols[n].prev = node.prev,
            None => self.rows[row].back = node.prev,
        }
    }

    // -----------------------------------------------------------------------
    // Audit
    // -----------------------------------------------------------------------

    /// Walk both chains and verify ordering, link symmetry, endpoint pointers,
    /// row counts, and that every live arena record is linked exactly once.
    pub fn check_invariants(&self) -> Result<()> {
        ensure!(self.front.is_none() == self.back.is_none(), "grid front and back disagree on emptiness");

        let (mut num_rows, mut num_cells) = (0, 0);
        let mut prev: Option<RowId> = None;
        let mut cursor = self.front;
        while let Some(id) = cursor {
            ensure!(self.rows.contains(id), "row link {id} points at a released slot");
            ensure!(num_rows < self.rows.len(), "row chain is longer than the live row records");
            let node = &self.rows[id];

            ensure!(node.prev == prev, "row {} has a broken prev link", node.row);
            if let Some(p) = prev {
                let before = self.rows[p].row;
                ensure!(before < node.row, "rows {before} and {} are out of order", node.row);
            }
            ensure!(node.count > 0, "row {} is linked with a zero count", node.row);

            let linked = self.check_columns(id)?;
            ensure!(linked == node.count, "row {} counts {} columns but links {linked}", node.row, node.count);

            num_rows += 1;
            num_cells += linked;
            prev = cursor;
            cursor = node.next;
        }

        ensure!(self.back == prev, "grid back does not point at the last row");
        ensure!(num_rows == self.rows.len(), "{} row records live but {num_rows} linked", self.rows.len());
        ensure!(num_cells == self.cols.len(), "{} column records live but {num_cells} linked", self.cols.len());
        ensure!(num_cells == self.len, "grid reports {} cells but links {num_cells}", self.len);
        Ok(())
    }

    fn check_columns(&self, row: RowId) -> Result<usize> {
        let node = &self.rows[row];
        ensure!(node.front.is_none() == node.back.is_none(), "row {} front and back disagree", node.row);

        let mut linked = 0;
        let mut prev: Option<ColId> = None;
        let mut cursor = node.front;
        while let Some(id) = cursor {
            ensure!(self.cols.contains(id), "row {} links released column slot {id}", node.row);
            ensure!(linked < self.cols.len(), "column chain of row {} is cyclic", node.row);
            let col = &self.cols[id];

            ensure!(col.prev == prev, "column {} of row {} has a broken prev link", col.col, node.row);
            if let Some(p) = prev {
                let before = self.cols[p].col;
                ensure!(before < col.col, "columns {before} and {} of row {} are out of order", col.col, node.row);
            }

            linked += 1;
            prev = cursor;
            cursor = col.next;
        }

        ensure!(node.back == prev, "row {} back does not point at its last column", node.row);
        Ok(linked)
    }
}

impl PartialEq for SparseGrid {
    /// Grids are equal when they hold the same cells, regardless of slot layout.
    fn eq(&self, other: &Self) -> bool { self.len == other.len && self.iter().eq(other.iter()) }
}

impl Eq for SparseGrid {}

impl fmt::Debug for SparseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Cell> for SparseGrid {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        for cell in iter { self.house(cell); }
    }
}

impl FromIterator<Cell> for SparseGrid {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut grid = Self::new();
        grid.extend(iter);
        grid
    }
}

impl<'a> IntoIterator for &'a SparseGrid {
    type Item = Cell;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Cells<'a> { self.iter() }
}
