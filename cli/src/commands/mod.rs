pub mod check;
pub mod run;

use std::{fs, io::{self, Read}, path::Path};

use anyhow::{Context, Result};

/// Read the whole script from `input`, or from stdin when it is absent or "-".
pub(crate) fn read_input(input: Option<&Path>, verbose: u8) -> Result<String> {
    match input.filter(|path| *path != Path::new("-")) {
        Some(path) => {
            if verbose > 0 { eprintln!("[input] reading script from {}", path.display()); }
            fs::read_to_string(path).with_context(|| format!("failed to read script {}", path.display()))
        }
        None => {
            if verbose > 0 { eprintln!("[input] reading script from stdin"); }
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text).context("failed to read script from stdin")?;
            Ok(text)
        }
    }
}
