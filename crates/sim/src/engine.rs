//! The per-pool allocation adjustment pipeline.
//!
//! [`AdjustmentEngine::adjust`] maps one [`PoolSnapshot`] to a fully
//! annotated [`PoolReport`] through a strict sequence of stages. Each stage
//! reads only fields computed before it, so the whole pipeline is a pure
//! function of the snapshot, the run parameters and the precomputed
//! fleet-wide vault size:
//!
//! 1. Borrow figures and curve calibration.
//! 2. Dynamic variant only: the target-rate band and a reference-rate
//!    withdrawal that lets utilization rise until the curve yields the
//!    reference rate.
//! 3. Status-gated withdrawal clamps (inactive, then active) and the
//!    active-pool deposit toward the top of the rate band.
//! 4. Dead-zone suppression of the net change and the final columns.
//!
//! The withdrawal clamps combine several candidate bounds through nested
//! min/max. Each candidate is the most negative adjustment one constraint
//! permits, so the maximum over candidates is the binding constraint and
//! the outer `min(.., 0)` keeps the stage withdraw-only. The candidate sets
//! are inherited business logic and are preserved as given, not re-derived.
//!
//! The static variant is the same pipeline with the reference-rate stages
//! skipped and the rate-band candidates omitted; it is a degenerate
//! configuration, not a separate algorithm.

use crate::curve;
use crate::error::ReallocError;
use crate::params::{ReallocationParameters, DEAD_ZONE};
use crate::pool::{PoolReport, PoolSnapshot, PoolStatus, RateBand};
use crate::rounding::{round_rate, to_units};

/// Applies the multi-stage adjustment pipeline to one pool at a time.
///
/// Stateless apart from the run parameters and the fleet-wide vault total;
/// pools do not interact through the engine.
#[derive(Debug, Clone)]
pub struct AdjustmentEngine<'a> {
    params: &'a ReallocationParameters,
    total_vault_size: u64,
}

impl<'a> AdjustmentEngine<'a> {
    /// `total_vault_size` is the idle allocation plus every pool's current
    /// stake, computed once before the pass and held constant.
    pub fn new(params: &'a ReallocationParameters, total_vault_size: u64) -> Self {
        Self {
            params,
            total_vault_size,
        }
    }

    /// Run the full pipeline for one pool.
    pub fn adjust(&self, pool: &PoolSnapshot) -> Result<PoolReport, ReallocError> {
        if pool.total_supply == 0 {
            return Err(ReallocError::ZeroTotalSupply);
        }
        if pool.maker_allocation == 0 {
            return Err(ReallocError::ZeroMakerAllocation);
        }

        let total_supply = pool.total_supply as f64;
        let maker_allocation = pool.maker_allocation as f64;

        let total_borrow = to_units(total_supply * pool.utilization);
        let maker_borrow = to_units(total_borrow as f64 * maker_allocation / total_supply);

        let optimal_rate = curve::calibrate(pool.utilization, pool.borrow_rate)?;
        let capped_rate = curve::capped_rate(pool.borrow_rate, optimal_rate);

        let (rate_band, dsr_adjustment) = if self.params.dynamic_rate_model {
            let band = self.rate_band(pool, optimal_rate)?;
            let adjustment = self.dsr_adjustment(pool, total_borrow, &band)?;
            (Some(band), adjustment)
        } else {
            (None, 0)
        };

        let supply_after_dsr = pool.total_supply as i64 + dsr_adjustment;
        let maker_after_dsr = pool.maker_allocation as i64 + dsr_adjustment;
        if supply_after_dsr <= 0 {
            return Err(ReallocError::DegenerateDenominator {
                what: "supply after reference-rate adjustment",
            });
        }
        let utilization_after_dsr = round_rate(total_borrow as f64 / supply_after_dsr as f64);

        let inactive_withdrawal =
            self.inactive_withdrawal(pool, total_borrow, supply_after_dsr, maker_after_dsr);
        let active_withdrawal = self.active_withdrawal(
            pool,
            total_borrow,
            supply_after_dsr,
            maker_after_dsr,
            optimal_rate,
            rate_band.as_ref(),
        )?;
        let active_deposit = self.active_deposit(
            pool,
            total_borrow,
            supply_after_dsr,
            optimal_rate,
            rate_band.as_ref(),
        )?;
        let manual_adjustment = pool.manual_adjustment;

        let mut total_change = dsr_adjustment
            + inactive_withdrawal
            + active_withdrawal
            + active_deposit
            + manual_adjustment;
        if total_change.abs() <= DEAD_ZONE {
            total_change = 0;
        }

        let final_allocation = pool.maker_allocation as i64 + total_change;
        let final_supply = pool.total_supply as i64 + total_change;
        if final_supply <= 0 {
            return Err(ReallocError::DegenerateDenominator {
                what: "final supply",
            });
        }
        let final_utilization = round_rate(total_borrow as f64 / final_supply as f64);
        let final_rate = curve::borrow_rate(final_utilization, optimal_rate);
        let final_capped_rate = curve::capped_rate(final_rate, optimal_rate);
        let maker_borrow_at_old_utilization = to_units(final_allocation as f64 * pool.utilization);
        let rate_change = final_rate - pool.borrow_rate;

        Ok(PoolReport {
            pool_key: pool.pool_key.clone(),
            status: pool.status,
            lltv: pool.lltv(),
            total_supply: pool.total_supply,
            maker_allocation: pool.maker_allocation,
            utilization: pool.utilization,
            borrow_rate: pool.borrow_rate,
            total_borrow,
            maker_borrow,
            optimal_rate,
            capped_rate,
            rate_band,
            dsr_adjustment,
            supply_after_dsr,
            maker_after_dsr,
            utilization_after_dsr,
            inactive_withdrawal,
            active_withdrawal,
            active_deposit,
            manual_adjustment,
            total_change,
            final_allocation,
            final_supply,
            final_utilization,
            final_rate,
            final_capped_rate,
            maker_borrow_at_old_utilization,
            rate_change,
        })
    }

    /// The target rate is the larger of a fixed-spread leg and a
    /// proportional-spread leg, both anchored on the reference rate and
    /// scaled by the fleet-wide vault size.
    fn rate_band(&self, pool: &PoolSnapshot, optimal_rate: f64) -> Result<RateBand, ReallocError> {
        let p = &pool.rate_target;
        let vault = self.total_vault_size as f64;
        let fixed_leg = pool.dsr + p.fixed_spread + vault * p.fixed_slope;
        let proportional_leg =
            pool.dsr * (1.0 + p.proportional_spread) * (1.0 + p.proportional_slope * vault);
        let target_rate = round_rate(fixed_leg.max(proportional_leg));
        Ok(RateBand {
            target_rate,
            min_rate: round_rate(target_rate * p.low_target_threshold),
            max_rate: round_rate(target_rate * p.high_target_threshold),
            utilization_at_dsr: round_rate(curve::utilization_at_rate(pool.dsr, optimal_rate)?),
        })
    }

    /// Withdraw-only move that lets utilization rise to the level whose
    /// curve rate equals the reference rate, bounded by the vault's stake
    /// and the inactive liquidity floor. Runs for every pool regardless of
    /// status.
    fn dsr_adjustment(
        &self,
        pool: &PoolSnapshot,
        total_borrow: i64,
        band: &RateBand,
    ) -> Result<i64, ReallocError> {
        if band.utilization_at_dsr <= 0.0 {
            return Err(ReallocError::DegenerateDenominator {
                what: "utilization at reference rate",
            });
        }
        let total_supply = pool.total_supply as f64;
        let desired = total_borrow as f64 / band.utilization_at_dsr - total_supply;
        let stake_bound = -(pool.maker_allocation as f64);
        let floor_bound = self.params.inactive.min_balance as f64 - total_supply;
        Ok(to_units(desired.max(stake_bound).max(floor_bound).min(0.0)))
    }

    /// Inactive pools give capital back: the least negative of the four
    /// bounds wins, and a positive bound (supply already under the floor)
    /// suppresses the withdrawal entirely.
    fn inactive_withdrawal(
        &self,
        pool: &PoolSnapshot,
        total_borrow: i64,
        supply_after_dsr: i64,
        maker_after_dsr: i64,
    ) -> i64 {
        if pool.status != PoolStatus::Inactive {
            return 0;
        }
        let policy = &self.params.inactive;
        let supply_after = supply_after_dsr as f64;
        let floor_restore = policy.min_balance as f64 - supply_after;
        let utilization_ceiling = total_borrow as f64 / policy.max_utilization - supply_after;
        let stake_bound = -(maker_after_dsr as f64);
        let portion_cap = -(pool.total_supply as f64 * policy.max_portion_to_withdraw);
        to_units(
            floor_restore
                .max(utilization_ceiling)
                .max(stake_bound)
                .max(portion_cap)
                .min(0.0),
        )
    }

    /// Active-pool withdrawal: the four inactive-style bounds plus, in the
    /// dynamic variant, the utilization implied by the bottom of the rate
    /// band. Globally gated by `withdrawals_enabled`.
    fn active_withdrawal(
        &self,
        pool: &PoolSnapshot,
        total_borrow: i64,
        supply_after_dsr: i64,
        maker_after_dsr: i64,
        optimal_rate: f64,
        band: Option<&RateBand>,
    ) -> Result<i64, ReallocError> {
        if pool.status != PoolStatus::Active || !self.params.withdrawals_enabled {
            return Ok(0);
        }
        let policy = &self.params.active;
        let supply_after = supply_after_dsr as f64;
        let utilization_ceiling = total_borrow as f64 / policy.max_utilization - supply_after;
        let stake_bound = -(maker_after_dsr as f64);
        let portion_cap = -(pool.total_supply as f64 * policy.max_portion_to_withdraw);
        let floor_restore = policy.min_balance as f64 - supply_after;
        let mut bound = utilization_ceiling
            .max(stake_bound)
            .max(portion_cap)
            .max(floor_restore);
        if let Some(band) = band {
            let u_min = round_rate(curve::utilization_at_rate(band.min_rate, optimal_rate)?);
            if u_min <= 0.0 {
                return Err(ReallocError::DegenerateDenominator {
                    what: "utilization at minimum band rate",
                });
            }
            bound = bound.max(total_borrow as f64 / u_min - supply_after);
        }
        Ok(to_units(bound.min(0.0)))
    }

    /// Deposit-only move that brings utilization back down to the top of
    /// the rate band, limited by the pool's supply-cap headroom. The static
    /// variant has no band to deposit toward and yields 0.
    fn active_deposit(
        &self,
        pool: &PoolSnapshot,
        total_borrow: i64,
        supply_after_dsr: i64,
        optimal_rate: f64,
        band: Option<&RateBand>,
    ) -> Result<i64, ReallocError> {
        if pool.status != PoolStatus::Active {
            return Ok(0);
        }
        let Some(band) = band else {
            return Ok(0);
        };
        let u_max = round_rate(curve::utilization_at_rate(band.max_rate, optimal_rate)?);
        if u_max <= 0.0 {
            return Err(ReallocError::DegenerateDenominator {
                what: "utilization at maximum band rate",
            });
        }
        let supply_after = supply_after_dsr as f64;
        let needed = total_borrow as f64 / u_max - supply_after;
        let deposit = match pool.supply_cap {
            Some(cap) => needed.min(cap as f64 - supply_after),
            None => needed,
        };
        Ok(to_units(deposit.max(0.0)))
    }
}
