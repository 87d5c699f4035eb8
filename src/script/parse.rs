use std::{fmt, str::FromStr};

use crate::grid::Cell;
use super::command::Command;

/// Errors from parsing a grid script. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The input holds no tokens at all.
    MissingCount,
    /// The leading command count is not a non-negative integer.
    InvalidCount { line: usize, token: String },
    /// A command keyword is not one of `House`, `Bomb`, `PrintFront`, `PrintEnd`.
    UnknownCommand { line: usize, token: String },
    /// A coordinate argument is not a 64-bit signed integer.
    InvalidInteger { line: usize, token: String },
    /// The input ended while command number `index` still expected `expected`.
    UnexpectedEnd { index: usize, expected: &'static str },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::MissingCount => write!(f, "missing command count"),
            ScriptError::InvalidCount { line, token } =>
                write!(f, "line {line}: invalid command count {token:?}"),
            ScriptError::UnknownCommand { line, token } =>
                write!(f, "line {line}: unknown command {token:?}"),
            ScriptError::InvalidInteger { line, token } =>
                write!(f, "line {line}: expected an integer coordinate, found {token:?}"),
            ScriptError::UnexpectedEnd { index, expected } =>
                write!(f, "input ended before {expected} of command #{index}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// A fully parsed script: the declared number of commands, nothing more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub commands: Vec<Command>,
    /// Tokens left over after the last declared command. They are not executed.
    pub trailing: usize,
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(input: &str) -> Result<Self, ScriptError> { parse_script(input) }
}

/// Parse a whitespace-separated script: a command count `N`, then `N` commands.
///
/// Line breaks carry no meaning beyond error positions; a command and its
/// arguments may be split across lines.
pub fn parse_script(input: &str) -> Result<Script, ScriptError> {
    let mut tokens = input
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)));

    let (line, token) = tokens.next().ok_or(ScriptError::MissingCount)?;
    let count = token
        .parse::<usize>()
        .map_err(|_| ScriptError::InvalidCount { line, token: token.to_owned() })?;

    let mut commands = Vec::with_capacity(count.min(1 << 16));
    for index in 1..=count {
        let (line, keyword) = tokens
            .next()
            .ok_or(ScriptError::UnexpectedEnd { index, expected: "a command" })?;

        let command = match keyword {
            "House" => Command::House(read_cell(&mut tokens, index)?),
            "Bomb" => Command::Bomb(read_cell(&mut tokens, index)?),
            "PrintFront" => Command::PrintFront,
            "PrintEnd" => Command::PrintEnd,
            _ => return Err(ScriptError::UnknownCommand { line, token: keyword.to_owned() }),
        };
        commands.push(command);
    }

    Ok(Script { commands, trailing: tokens.count() })
}

/// Read the `col row` arguments of a `House` or `Bomb` command.
fn read_cell<'a, I>(tokens: &mut I, index: usize) -> Result<Cell, ScriptError>
where I: Iterator<Item = (usize, &'a str)>,
{
    let col = read_integer(tokens, index, "a column")?;
    let row = read_integer(tokens, index, "a row")?;
    Ok(Cell::new(col, row))
}

fn read_integer<'a, I>(tokens: &mut I, index: usize, expected: &'static str) -> Result<i64, ScriptError>
where I: Iterator<Item = (usize, &'a str)>,
{
    let (line, token) = tokens.next().ok_or(ScriptError::UnexpectedEnd { index, expected })?;
    token.parse().map_err(|_| ScriptError::InvalidInteger { line, token: token.to_owned() })
}
