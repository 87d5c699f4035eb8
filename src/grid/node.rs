use super::arena::{ColId, RowId};

/// One occupied column within a row.
#[derive(Clone, Debug)]
pub(crate) struct ColumnNode {
    pub(crate) col:  i64,
    /// Next column in ascending order.
    pub(crate) next: Option<ColId>,
    /// Previous column in ascending order.
    pub(crate) prev: Option<ColId>,
}

impl ColumnNode {
    #[inline]
    pub(crate) fn new(col: i64) -> Self { Self { col, next: None, prev: None } }
}

/// One row holding at least one occupied column.
///
/// `front`/`back` are the lowest/highest columns of the row; `count` is the
/// length of that chain and never reaches zero while the node is linked.
#[derive(Clone, Debug)]
pub(crate) struct RowNode {
    pub(crate) row:   i64,
    pub(crate) count: usize,
    pub(crate) front: Option<ColId>,
    pub(crate) back:  Option<ColId>,
    pub(crate) next:  Option<RowId>,
    pub(crate) prev:  Option<RowId>,
}

impl RowNode {
    /// A detached row whose only column is `col`.
    #[inline]
    pub(crate) fn with_column(row: i64, col: ColId) -> Self {
        Self { row, count: 1, front: Some(col), back: Some(col), next: None, prev: None }
    }
}
