//! Kinked borrow-rate curve: forward, calibration and inverse evaluation.
//!
//! The borrow rate is piecewise linear in utilization with a kink at 90%,
//! parameterized by a single per-pool `optimal_rate`:
//!
//! ```text
//! rate(u) = 0.25 * r_opt + (5/6) * u * r_opt    if u <= 0.9
//!         = 30 * r_opt * u - 26 * r_opt          if u >  0.9
//! ```
//!
//! Both branches yield `r_opt` at the kink, so the curve is continuous and
//! steep above 90% utilization. `optimal_rate` is not configured; it is
//! calibrated from an observed `(utilization, rate)` pair so the curve
//! reproduces the pool's current market state.
//!
//! The inverse direction ([`utilization_at_rate`]) answers "what utilization
//! would produce this rate" and is reused with several different target
//! rates (the reference rate and both edges of the target-rate band), so it
//! is one parameterized function rather than per-target copies.

use crate::error::ReallocError;
use crate::rounding::round_rate;

/// Utilization at the kink between the shallow and steep curve segments.
pub const KINK_UTILIZATION: f64 = 0.9;

/// Intercept of the shallow segment, as a fraction of the optimal rate.
pub const BASE_RATE_FACTOR: f64 = 0.25;

/// Slope of the shallow segment, as a fraction of the optimal rate.
pub const LOWER_SLOPE: f64 = 5.0 / 6.0;

/// Slope of the steep segment, as a fraction of the optimal rate.
pub const UPPER_SLOPE: f64 = 30.0;

/// Offset of the steep segment, as a fraction of the optimal rate.
pub const UPPER_OFFSET: f64 = 26.0;

/// Forward curve evaluation: borrow rate at the given utilization.
pub fn borrow_rate(utilization: f64, optimal_rate: f64) -> f64 {
    let rate = if utilization > KINK_UTILIZATION {
        UPPER_SLOPE * optimal_rate * utilization - UPPER_OFFSET * optimal_rate
    } else {
        BASE_RATE_FACTOR * optimal_rate + LOWER_SLOPE * utilization * optimal_rate
    };
    round_rate(rate)
}

/// Solve the forward formula for the optimal rate, given an observed
/// `(utilization, rate)` pair.
pub fn calibrate(utilization: f64, observed_rate: f64) -> Result<f64, ReallocError> {
    let denominator = if utilization > KINK_UTILIZATION {
        UPPER_SLOPE * utilization - UPPER_OFFSET
    } else {
        BASE_RATE_FACTOR + LOWER_SLOPE * utilization
    };
    if denominator == 0.0 {
        return Err(ReallocError::CalibrationDenominatorZero { utilization });
    }
    Ok(round_rate(observed_rate / denominator))
}

/// The observed rate capped at the calibrated optimal rate.
pub fn capped_rate(rate: f64, optimal_rate: f64) -> f64 {
    round_rate(rate.min(optimal_rate))
}

/// Inverse curve evaluation: the utilization that would produce
/// `target_rate`, clamped to at most 100%.
pub fn utilization_at_rate(target_rate: f64, optimal_rate: f64) -> Result<f64, ReallocError> {
    if optimal_rate <= 0.0 {
        return Err(ReallocError::NonPositiveOptimalRate { optimal_rate });
    }
    let utilization = if optimal_rate < target_rate {
        (target_rate / optimal_rate + UPPER_OFFSET) / UPPER_SLOPE
    } else {
        (target_rate / optimal_rate - BASE_RATE_FACTOR) / LOWER_SLOPE
    };
    Ok(utilization.min(1.0))
}
