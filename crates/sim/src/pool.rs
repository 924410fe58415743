//! Pool records: market snapshots in, annotated reports out.

use serde::{Deserialize, Serialize};

/// Policy classification controlling which adjustment rules apply to a
/// pool. Supplied externally, set once per run, never mutated mid-pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolStatus {
    Active,
    Inactive,
}

/// Per-pool parameters of the dynamic target-rate model.
///
/// All zero by default, which is what the static variant feeds through.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTargetParams {
    pub fixed_spread: f64,
    pub fixed_slope: f64,
    pub proportional_spread: f64,
    pub proportional_slope: f64,
    pub low_target_threshold: f64,
    pub high_target_threshold: f64,
}

/// Market snapshot for one lending pool. Inputs are immutable during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Pool identifier, e.g. "sUSDe 86.5%". The trailing percentage token
    /// encodes the liquidation loan-to-value.
    pub pool_key: String,
    /// Externally supplied policy classification.
    pub status: PoolStatus,
    /// Total assets supplied to the pool.
    pub total_supply: u64,
    /// The vault's own stake within the pool's total supply.
    pub maker_allocation: u64,
    /// Fraction of total supply currently borrowed, in [0, 1].
    pub utilization: f64,
    /// Current borrow APY as a fraction.
    pub borrow_rate: f64,
    /// Supply cap, if the pool has one.
    #[serde(default)]
    pub supply_cap: Option<u64>,
    /// External dynamic reference rate; only read by the dynamic rate model.
    #[serde(default)]
    pub dsr: f64,
    /// Dynamic target-rate model parameters.
    #[serde(default)]
    pub rate_target: RateTargetParams,
    /// Override hook for an externally decided adjustment; 0 in the
    /// automated pipeline.
    #[serde(default)]
    pub manual_adjustment: i64,
}

impl PoolSnapshot {
    /// Liquidation loan-to-value parsed from the pool key.
    pub fn lltv(&self) -> f64 {
        extract_lltv(&self.pool_key)
    }
}

/// Parse the LLTV fraction from the trailing `"NN%"` token of a pool key.
///
/// A single-token key, a missing `%` suffix or an unparsable number all
/// degrade to 0.0 rather than failing the run.
pub fn extract_lltv(pool_key: &str) -> f64 {
    let mut tokens = pool_key.split_whitespace();
    let _name = tokens.next();
    let Some(token) = tokens.last() else {
        return 0.0;
    };
    let Some(percent) = token.strip_suffix('%') else {
        return 0.0;
    };
    match percent.parse::<f64>() {
        Ok(p) => p / 100.0,
        Err(_) => 0.0,
    }
}

/// Rate-band figures produced by the dynamic target-rate model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateBand {
    /// Desired borrow rate for the pool given the reference rate and the
    /// fleet-wide vault size.
    pub target_rate: f64,
    /// Lower edge of the acceptable rate band.
    pub min_rate: f64,
    /// Upper edge of the acceptable rate band.
    pub max_rate: f64,
    /// Utilization at which the curve would yield the reference rate.
    pub utilization_at_dsr: f64,
}

/// Fully annotated result for one pool: the snapshot inputs plus every
/// derived and final column of the adjustment pipeline.
///
/// Fields are computed in strict dependency order; each is read-only input
/// to the ones after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolReport {
    pub pool_key: String,
    pub status: PoolStatus,
    pub lltv: f64,
    pub total_supply: u64,
    pub maker_allocation: u64,
    pub utilization: f64,
    pub borrow_rate: f64,

    /// Assets currently borrowed from the pool.
    pub total_borrow: i64,
    /// The vault's pro-rata share of the borrow.
    pub maker_borrow: i64,
    /// Calibrated kink-curve parameter reproducing the observed state.
    pub optimal_rate: f64,
    /// Observed rate capped at the optimal rate.
    pub capped_rate: f64,
    /// Dynamic-variant rate band; `None` when the static model ran.
    pub rate_band: Option<RateBand>,

    /// Reference-rate withdrawal (dynamic variant; always <= 0).
    pub dsr_adjustment: i64,
    pub supply_after_dsr: i64,
    pub maker_after_dsr: i64,
    pub utilization_after_dsr: f64,

    /// Inactive-pool withdrawal (always <= 0).
    pub inactive_withdrawal: i64,
    /// Active-pool withdrawal (always <= 0).
    pub active_withdrawal: i64,
    /// Active-pool deposit (always >= 0).
    pub active_deposit: i64,
    /// Externally supplied override, passed through unchanged.
    pub manual_adjustment: i64,
    /// Net of the five signed terms, zeroed inside the dead zone.
    pub total_change: i64,

    pub final_allocation: i64,
    pub final_supply: i64,
    pub final_utilization: f64,
    pub final_rate: f64,
    pub final_capped_rate: f64,
    /// Sanity cross-check: the vault's borrow share had utilization stayed
    /// at its pre-adjustment level.
    pub maker_borrow_at_old_utilization: i64,
    pub rate_change: f64,
}
