use std::{fs::File, io::{self, BufWriter, Write}};

use anyhow::{Context, Result};
use sparsegrid::{execute, parse_script, RunOptions, SparseGrid};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RunArgs) -> Result<()> {
    let text = super::read_input(args.input.as_deref(), cli.verbose)?;
    let script = parse_script(&text).context("malformed script")?;

    if script.trailing > 0 && cli.verbose > 0 {
        eprintln!("[run] ignoring {} tokens after the last declared command", script.trailing);
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            if cli.verbose > 0 { eprintln!("[run] writing output to {}", path.display()); }
            let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let options = RunOptions { verbose: cli.verbose, audit: args.audit };
    execute(&mut SparseGrid::new(), &script.commands, &mut out, options)
}
