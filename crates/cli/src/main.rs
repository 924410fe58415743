//! Realloc CLI - simulate vault reallocation across lending pools.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::run_simulation;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            run_simulation(&args, cli.format)?;
        }
    }

    Ok(())
}
