//! Vault Reallocation Simulation Library
//!
//! Models how capital should be rebalanced across a fleet of lending pools
//! that share one idle-capital vault. Each pool sits on a kinked
//! borrow-rate curve; given the pool's market snapshot and the run's
//! reallocation parameters, the engine derives a constraint-clamped target
//! allocation (liquidity floors, withdrawal caps, supply caps, target-rate
//! bands) and the fleet-wide statistics that follow.
//!
//! # Overview
//!
//! - Calibrate the kinked rate curve from an observed (utilization, rate)
//!   pair and evaluate it forward and inverse ([`curve`])
//! - Run the multi-stage adjustment pipeline for one pool ([`engine`])
//! - Drive the whole fleet off a single precomputed vault total, isolating
//!   per-pool failures ([`fleet`])
//! - Summarize the fleet before and after reallocation ([`overview`])
//!
//! This is a what-if calculator, not an execution engine: everything is
//! pure, sequential and deterministic. Fetching pool data and rendering
//! reports belong to the surrounding layers.
//!
//! # Example
//!
//! ```rust
//! use realloc_rs_sim::{
//!     simulate, FleetSnapshot, PoolPolicy, PoolSnapshot, PoolStatus,
//!     RateTargetParams, ReallocationParameters,
//! };
//!
//! let snapshot = FleetSnapshot {
//!     idle_allocation: 500_000,
//!     pools: vec![PoolSnapshot {
//!         pool_key: "sUSDe 86.5%".to_string(),
//!         status: PoolStatus::Active,
//!         total_supply: 1_000_000,
//!         maker_allocation: 200_000,
//!         utilization: 0.85,
//!         borrow_rate: 0.08,
//!         supply_cap: None,
//!         dsr: 0.0,
//!         rate_target: RateTargetParams::default(),
//!         manual_adjustment: 0,
//!     }],
//! };
//!
//! let params = ReallocationParameters {
//!     active: PoolPolicy {
//!         min_balance: 100_000,
//!         max_utilization: 0.9,
//!         max_portion_to_withdraw: 0.3,
//!     },
//!     inactive: PoolPolicy {
//!         min_balance: 50_000,
//!         max_utilization: 0.95,
//!         max_portion_to_withdraw: 0.5,
//!     },
//!     withdrawals_enabled: true,
//!     dynamic_rate_model: false,
//!     allocation_significance_threshold: None,
//! };
//!
//! let outcome = simulate(&snapshot, &params).unwrap();
//! let report = &outcome.reports[0];
//! assert_eq!(outcome.total_vault_size, 700_000);
//! assert_eq!(report.total_borrow, 850_000);
//! assert_eq!(report.optimal_rate, 0.0835);
//! assert_eq!(report.final_utilization, 0.9);
//! ```

pub mod curve;
pub mod engine;
pub mod error;
pub mod fleet;
pub mod overview;
pub mod params;
pub mod pool;
pub mod rounding;

// Re-export commonly used types
pub use error::ReallocError;

// Curve exports
pub use curve::{
    borrow_rate, calibrate, capped_rate, utilization_at_rate, BASE_RATE_FACTOR, KINK_UTILIZATION,
    LOWER_SLOPE, UPPER_OFFSET, UPPER_SLOPE,
};

// Pool exports
pub use pool::{extract_lltv, PoolReport, PoolSnapshot, PoolStatus, RateBand, RateTargetParams};

// Parameter exports
pub use params::{PoolPolicy, ReallocationParameters, DEAD_ZONE};

// Engine exports
pub use engine::AdjustmentEngine;

// Fleet exports
pub use fleet::{simulate, total_vault_size, FleetSnapshot, PoolFailure, SimulationOutcome};

// Overview exports
pub use overview::{fleet_overview, FleetOverview, OverviewStat};

// Rounding exports
pub use rounding::{round_rate, to_units};
