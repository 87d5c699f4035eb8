use anyhow::{Context, Result};
use sparsegrid::{parse_script, CommandTally};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::CheckArgs) -> Result<()> {
    let text = super::read_input(args.input.as_deref(), cli.verbose)?;
    let script = parse_script(&text).context("malformed script")?;

    let tally = script.commands.iter().collect::<CommandTally>();
    eprintln!(
        "[check] {} commands: House={} Bomb={} PrintFront={} PrintEnd={}",
        tally.total(), tally.house, tally.bomb, tally.print_front, tally.print_end,
    );
    if script.trailing > 0 {
        eprintln!("[check] {} tokens after the last declared command would be ignored", script.trailing);
    }

    Ok(())
}
