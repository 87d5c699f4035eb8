use std::fmt;

use crate::grid::Cell;

/// One parsed command of a grid script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    House(Cell),
    Bomb(Cell),
    PrintFront,
    PrintEnd,
}

impl Command {
    /// Keyword that introduces this command in a script.
    pub fn name(&self) -> &'static str {
        match self {
            Command::House(_)   => "House",
            Command::Bomb(_)    => "Bomb",
            Command::PrintFront => "PrintFront",
            Command::PrintEnd   => "PrintEnd",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::House(cell) | Command::Bomb(cell) => write!(f, "{} {} {}", self.name(), cell.col, cell.row),
            Command::PrintFront | Command::PrintEnd => f.write_str(self.name()),
        }
    }
}

/// Number of commands of each kind in a script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandTally {
    pub house:       usize,
    pub bomb:        usize,
    pub print_front: usize,
    pub print_end:   usize,
}

impl CommandTally {
    pub fn total(&self) -> usize { self.house + self.bomb + self.print_front + self.print_end }
}

impl<'a> FromIterator<&'a Command> for CommandTally {
    fn from_iter<T: IntoIterator<Item = &'a Command>>(iter: T) -> Self {
        let mut tally = Self::default();
        for command in iter {
            match command {
                Command::House(_)   => tally.house += 1,
                Command::Bomb(_)    => tally.bomb += 1,
                Command::PrintFront => tally.print_front += 1,
                Command::PrintEnd   => tally.print_end += 1,
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_script_syntax() {
        assert_eq!(Command::House(Cell::new(5, -6)).to_string(), "House 5 -6");
        assert_eq!(Command::Bomb(Cell::new(0, 1)).to_string(), "Bomb 0 1");
        assert_eq!(Command::PrintEnd.to_string(), "PrintEnd");
    }

    #[test]
    fn tally_counts_each_kind() {
        let commands = [
            Command::House(Cell::new(0, 0)),
            Command::House(Cell::new(1, 0)),
            Command::Bomb(Cell::new(0, 0)),
            Command::PrintFront,
        ];
        let tally = commands.iter().collect::<CommandTally>();
        assert_eq!(tally, CommandTally { house: 2, bomb: 1, print_front: 1, print_end: 0 });
        assert_eq!(tally.total(), 4);
    }
}
