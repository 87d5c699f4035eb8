mod command;
mod parse;
mod run;

pub use command::{Command, CommandTally};
pub use parse::{parse_script, Script, ScriptError};
pub use run::{execute, render, RunOptions};
