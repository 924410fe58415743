//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Realloc CLI - what-if reallocation calculator for lending pools
#[derive(Parser, Debug)]
#[command(name = "realloc")]
#[command(
    about = "Simulate vault reallocation across kinked-rate lending pools",
    long_about = None
)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the reallocation pipeline over a fleet snapshot
    Run(RunArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the fleet snapshot JSON (idle allocation plus pool records)
    pub snapshot: PathBuf,

    /// Path to the reallocation parameters JSON
    #[arg(long, env = "REALLOC_PARAMS")]
    pub params: PathBuf,

    /// Pool-key prefix for the cohort share statistic
    #[arg(long, default_value = "sUSDe")]
    pub cohort: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
