mod cli;
mod commands;

use cli::{Cli, Commands, RunArgs};
use commands::{check, run};

pub fn dispatch() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Run(args)) => run::run(&cli, args),
        Some(Commands::Check(args)) => check::run(&cli, args),
        None => run::run(&cli, &RunArgs::default()),
    }
}

fn main() -> anyhow::Result<()> { dispatch() }
