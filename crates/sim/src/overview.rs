//! Current/Future/Change summary statistics over an adjusted fleet.

use serde::Serialize;

use crate::pool::PoolReport;

/// One summary statistic, before and after reallocation.
///
/// `None` marks an undefined value: a zero weighting denominator, or a zero
/// current value for the relative change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewStat {
    pub current: Option<f64>,
    pub future: Option<f64>,
    /// `(future - current) / current`.
    pub change: Option<f64>,
}

impl OverviewStat {
    fn new(current: Option<f64>, future: Option<f64>) -> Self {
        let change = match (current, future) {
            (Some(c), Some(f)) if c != 0.0 => Some((f - c) / c),
            _ => None,
        };
        Self {
            current,
            future,
            change,
        }
    }
}

/// Weighted-average summary of the fleet, current versus future.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetOverview {
    /// Sum of the vault's non-idle stakes.
    pub total_allocation: OverviewStat,
    /// Allocation-weighted average LLTV.
    pub weighted_lltv: OverviewStat,
    /// Allocation share of the pool-key cohort.
    pub cohort_share: OverviewStat,
    /// Maker-borrow-weighted average borrow rate.
    pub avg_borrow_rate: OverviewStat,
    /// Maker-borrow-weighted average capped rate.
    pub avg_capped_rate: OverviewStat,
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Aggregate the annotated fleet into the Current/Future/Change table.
///
/// `cohort_prefix` selects the pool-key cohort whose allocation share is
/// reported (e.g. "sUSDe"). Future averages are weighted with the current
/// maker-borrow figures.
pub fn fleet_overview(reports: &[PoolReport], cohort_prefix: &str) -> FleetOverview {
    let allocation: f64 = reports.iter().map(|r| r.maker_allocation as f64).sum();
    let final_allocation: f64 = reports.iter().map(|r| r.final_allocation as f64).sum();
    let borrow: f64 = reports.iter().map(|r| r.maker_borrow as f64).sum();

    let weighted = |f: &dyn Fn(&PoolReport) -> (f64, f64)| -> (f64, f64) {
        reports.iter().fold((0.0, 0.0), |(a, b), r| {
            let (x, y) = f(r);
            (a + x, b + y)
        })
    };

    let (lltv_now, lltv_later) = weighted(&|r| {
        (
            r.maker_allocation as f64 * r.lltv,
            r.final_allocation as f64 * r.lltv,
        )
    });
    let (cohort_now, cohort_later) = weighted(&|r| {
        if r.pool_key.starts_with(cohort_prefix) {
            (r.maker_allocation as f64, r.final_allocation as f64)
        } else {
            (0.0, 0.0)
        }
    });
    let (rate_now, rate_later) = weighted(&|r| {
        (
            r.maker_borrow as f64 * r.borrow_rate,
            r.maker_borrow as f64 * r.final_rate,
        )
    });
    let (capped_now, capped_later) = weighted(&|r| {
        (
            r.maker_borrow as f64 * r.capped_rate,
            r.maker_borrow as f64 * r.final_capped_rate,
        )
    });

    FleetOverview {
        total_allocation: OverviewStat::new(Some(allocation), Some(final_allocation)),
        weighted_lltv: OverviewStat::new(
            ratio(lltv_now, allocation),
            ratio(lltv_later, final_allocation),
        ),
        cohort_share: OverviewStat::new(
            ratio(cohort_now, allocation),
            ratio(cohort_later, final_allocation),
        ),
        avg_borrow_rate: OverviewStat::new(ratio(rate_now, borrow), ratio(rate_later, borrow)),
        avg_capped_rate: OverviewStat::new(ratio(capped_now, borrow), ratio(capped_later, borrow)),
    }
}
