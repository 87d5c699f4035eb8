use std::io::Write;

use anyhow::{Context, Result};

use crate::grid::SparseGrid;
use super::command::Command;

/// Options for [`execute`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// Log verbosity on stderr: 1 for a summary, 2 for every command.
    pub verbose: u8,
    /// Verify the grid's structural invariants after every command.
    pub audit: bool,
}

/// Apply `commands` to `grid` in order, writing print output to `out`.
pub fn execute<W: Write>(grid: &mut SparseGrid, commands: &[Command], out: &mut W, options: RunOptions) -> Result<()> {
    let verbose = options.verbose;
    if verbose > 0 { eprintln!("[run] executing {} commands", commands.len()); }

    for (index, command) in commands.iter().enumerate() {
        match *command {
            Command::House(cell) => {
                let inserted = grid.house(cell);
                if verbose > 1 { eprintln!("[house] {cell} {}", if inserted { "inserted" } else { "already present" }); }
            }
            Command::Bomb(cell) => {
                let blast = grid.bomb(cell);
                if verbose > 1 { eprintln!("[bomb] {cell} removed {}", blast.len()); }
            }
            Command::PrintFront => grid.print_front(out).context("failed to write PrintFront output")?,
            Command::PrintEnd => grid.print_end(out).context("failed to write PrintEnd output")?,
        }

        if options.audit {
            grid.check_invariants()
                .with_context(|| format!("grid invariant broken after command #{} ({command})", index + 1))?;
        }
    }

    out.flush().context("failed to flush output")?;
    if verbose > 0 { eprintln!("[run] done: {} cells in {} rows", grid.len(), grid.num_rows()); }
    Ok(())
}

/// Run `commands` against a fresh grid and return everything they print.
pub fn render(commands: &[Command]) -> Result<String> {
    let mut out = Vec::new();
    execute(&mut SparseGrid::new(), commands, &mut out, RunOptions::default())?;
    Ok(String::from_utf8(out)?)
}
