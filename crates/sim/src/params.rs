//! Reallocation parameters: per-status policies and run-level flags.

use serde::{Deserialize, Serialize};

use crate::error::ReallocError;
use crate::pool::PoolStatus;

/// Net changes at or below this many money units are suppressed to avoid
/// churn.
pub const DEAD_ZONE: i64 = 10_000;

/// Liquidity floor, utilization ceiling and per-pass withdrawal cap for one
/// status class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolPolicy {
    /// Floor on a pool's total supply.
    pub min_balance: u64,
    /// Ceiling on utilization after a withdrawal.
    pub max_utilization: f64,
    /// Largest fraction of total supply withdrawable in one pass.
    pub max_portion_to_withdraw: f64,
}

/// Run-level reallocation configuration: one policy per status class plus
/// the global flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReallocationParameters {
    pub active: PoolPolicy,
    pub inactive: PoolPolicy,
    /// Gates active-pool withdrawals for the whole run.
    #[serde(default = "default_true")]
    pub withdrawals_enabled: bool,
    /// Selects the dynamic target-rate model; false runs the static
    /// variant with the reference-rate stages skipped.
    #[serde(default)]
    pub dynamic_rate_model: bool,
    /// Inherited configuration field, read for input compatibility but
    /// consumed by no formula.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_significance_threshold: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl ReallocationParameters {
    /// Check both policies are usable before any pool is processed.
    ///
    /// The pipeline divides by the utilization ceilings, so degenerate
    /// values are fatal for the run rather than a per-pool failure.
    pub fn validate(&self) -> Result<(), ReallocError> {
        validate_policy(PoolStatus::Active, &self.active)?;
        validate_policy(PoolStatus::Inactive, &self.inactive)
    }
}

fn validate_policy(status: PoolStatus, policy: &PoolPolicy) -> Result<(), ReallocError> {
    if policy.max_utilization <= 0.0 || policy.max_utilization > 1.0 {
        return Err(ReallocError::InvalidPolicy {
            status,
            reason: "max_utilization must be in (0, 1]",
        });
    }
    if !(0.0..=1.0).contains(&policy.max_portion_to_withdraw) {
        return Err(ReallocError::InvalidPolicy {
            status,
            reason: "max_portion_to_withdraw must be in [0, 1]",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ReallocationParameters {
        ReallocationParameters {
            active: PoolPolicy {
                min_balance: 100_000,
                max_utilization: 0.9,
                max_portion_to_withdraw: 0.3,
            },
            inactive: PoolPolicy {
                min_balance: 50_000,
                max_utilization: 0.95,
                max_portion_to_withdraw: 0.5,
            },
            withdrawals_enabled: true,
            dynamic_rate_model: false,
            allocation_significance_threshold: None,
        }
    }

    #[test]
    fn test_validate_accepts_sane_policies() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_max_utilization() {
        let mut p = params();
        p.inactive.max_utilization = 0.0;
        assert_eq!(
            p.validate(),
            Err(ReallocError::InvalidPolicy {
                status: PoolStatus::Inactive,
                reason: "max_utilization must be in (0, 1]",
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_withdrawal_portion() {
        let mut p = params();
        p.active.max_portion_to_withdraw = 1.5;
        assert!(matches!(
            p.validate(),
            Err(ReallocError::InvalidPolicy {
                status: PoolStatus::Active,
                ..
            })
        ));
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: ReallocationParameters = serde_json::from_str(
            r#"{
                "active": {"min_balance": 0, "max_utilization": 0.9, "max_portion_to_withdraw": 0.3},
                "inactive": {"min_balance": 0, "max_utilization": 0.95, "max_portion_to_withdraw": 0.5}
            }"#,
        )
        .unwrap();
        assert!(p.withdrawals_enabled);
        assert!(!p.dynamic_rate_model);
        assert_eq!(p.allocation_significance_threshold, None);
    }
}
