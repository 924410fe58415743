//! Run command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use realloc_rs_sim::{
    fleet_overview, simulate, FleetOverview, FleetSnapshot, ReallocationParameters,
    SimulationOutcome,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::cli::{OutputFormat, RunArgs};
use crate::output::{format_failures, format_overview_table, format_pools_table};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn run_simulation(args: &RunArgs, format: OutputFormat) -> Result<()> {
    let snapshot: FleetSnapshot = read_json(&args.snapshot)?;
    let params: ReallocationParameters = read_json(&args.params)?;

    let outcome = simulate(&snapshot, &params)?;
    let overview = fleet_overview(&outcome.reports, &args.cohort);

    match format {
        OutputFormat::Table => {
            println!("{}", format_pools_table(&outcome.reports));
            if !outcome.failures.is_empty() {
                println!("\n{}", format_failures(&outcome.failures));
            }
            println!("\nTotal vault size: {}", outcome.total_vault_size);
            println!("{}", format_overview_table(&overview));
        }
        OutputFormat::Json => {
            let payload = json_payload(&outcome, &overview);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

fn json_payload(outcome: &SimulationOutcome, overview: &FleetOverview) -> serde_json::Value {
    json!({
        "total_vault_size": outcome.total_vault_size,
        "pools": outcome.reports,
        "failures": outcome
            .failures
            .iter()
            .map(|f| json!({ "pool_key": f.pool_key, "error": f.error.to_string() }))
            .collect::<Vec<_>>(),
        "overview": overview,
    })
}
