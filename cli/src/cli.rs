use std::path::PathBuf;

/// Sparse grid script runner (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "sparsegrid", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase stderr verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    // No subcommand: read the script from stdin and print to stdout.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Execute a script of House/Bomb/PrintFront/PrintEnd commands
    Run(RunArgs),

    /// Parse a script and report its commands without executing it
    Check(CheckArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Script file, "-" for stdin (default)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Verify grid invariants after every command
    #[arg(long)]
    pub audit: bool,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Script file, "-" for stdin (default)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn schema_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["sparsegrid"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn run_with_output_and_audit() {
        let cli = Cli::try_parse_from(["sparsegrid", "-vv", "run", "in.txt", "-o", "out.txt", "--audit"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Run(args)) = cli.command else { panic!("expected run") };
        assert_eq!(args.input, Some(PathBuf::from("in.txt")));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.audit);
    }

    #[test]
    fn check_accepts_stdin_marker() {
        let cli = Cli::try_parse_from(["sparsegrid", "check", "-"]).unwrap();
        let Some(Commands::Check(args)) = cli.command else { panic!("expected check") };
        assert_eq!(args.input, Some(PathBuf::from("-")));
    }
}
