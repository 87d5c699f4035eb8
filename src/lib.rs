#![doc = "Sparse grid of houses and bombs: public API"]
mod grid;
mod script;

#[doc(inline)]
pub use grid::{Blast, Cell, Cells, Direction, SparseGrid};

#[doc(inline)]
pub use script::{execute, parse_script, render, Command, CommandTally, RunOptions, Script, ScriptError};
