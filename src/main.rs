#[macro_use]
extern crate log;

mod cli;

use std::io::{self, Write};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli()?;
    debug!("Options read in - counting {:?}", cfg.input());

    let counts = fqcount::count_path(Some(cfg.input()))
        .with_context(|| format!("Error counting reads in {:?}", cfg.input()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", counts)?;
    out.flush()?;
    Ok(())
}
