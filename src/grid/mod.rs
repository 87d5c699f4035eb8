mod arena;
mod cell;
mod iter;
mod node;
mod sparse_grid;

pub use cell::Cell;
pub use iter::{Cells, Direction};
pub use sparse_grid::{Blast, SparseGrid};
