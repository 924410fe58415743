//! Fleet-level driving: vault-total precomputation and per-pool runs.

use serde::{Deserialize, Serialize};

use crate::engine::AdjustmentEngine;
use crate::error::ReallocError;
use crate::params::ReallocationParameters;
use crate::pool::{PoolReport, PoolSnapshot};

/// One run's worth of input: the undeployed vault capital plus every pool's
/// market snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    /// Undeployed capital sitting in the vault.
    #[serde(default)]
    pub idle_allocation: u64,
    pub pools: Vec<PoolSnapshot>,
}

/// A pool that could not be adjusted; siblings are unaffected.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolFailure {
    pub pool_key: String,
    pub error: ReallocError,
}

/// Result of one simulation pass over the fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// The one fleet-wide aggregate shared by every pool's pipeline.
    pub total_vault_size: u64,
    pub reports: Vec<PoolReport>,
    pub failures: Vec<PoolFailure>,
}

/// Idle (undeployed) capital plus every pool's current stake.
pub fn total_vault_size(idle_allocation: u64, pools: &[PoolSnapshot]) -> u64 {
    idle_allocation + pools.iter().map(|p| p.maker_allocation).sum::<u64>()
}

/// Run the adjustment pipeline over every pool in the fleet.
///
/// The vault total is computed once before the pass and held constant, so
/// pools only interact through that scalar and processing order cannot
/// affect any result. A failing pool is collected as a [`PoolFailure`] and
/// does not disturb sibling results; unusable parameters fail the whole run
/// up front.
pub fn simulate(
    snapshot: &FleetSnapshot,
    params: &ReallocationParameters,
) -> Result<SimulationOutcome, ReallocError> {
    params.validate()?;
    let vault = total_vault_size(snapshot.idle_allocation, &snapshot.pools);
    let engine = AdjustmentEngine::new(params, vault);

    let mut reports = Vec::with_capacity(snapshot.pools.len());
    let mut failures = Vec::new();
    for pool in &snapshot.pools {
        match engine.adjust(pool) {
            Ok(report) => reports.push(report),
            Err(error) => failures.push(PoolFailure {
                pool_key: pool.pool_key.clone(),
                error,
            }),
        }
    }

    Ok(SimulationOutcome {
        total_vault_size: vault,
        reports,
        failures,
    })
}
