//! Error types for the reallocation library.

use thiserror::Error;

use crate::pool::PoolStatus;

/// Errors that can occur while adjusting a pool or validating a run.
///
/// Pool-scoped errors are collected per pool by the fleet simulator and
/// never disturb sibling pools; policy errors are fatal for the whole run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReallocError {
    /// Utilization-derived figures are undefined without supply
    #[error("total supply is zero")]
    ZeroTotalSupply,

    /// The vault holds no stake in the pool, so there is nothing to adjust
    #[error("maker allocation is zero")]
    ZeroMakerAllocation,

    /// Rate-curve calibration hit a zero denominator
    #[error("curve calibration denominator is zero at utilization {utilization}")]
    CalibrationDenominatorZero { utilization: f64 },

    /// Inverse curve evaluation needs a positive optimal rate
    #[error("optimal rate must be positive to invert the rate curve, got {optimal_rate}")]
    NonPositiveOptimalRate { optimal_rate: f64 },

    /// A derived utilization or supply figure collapsed to a non-positive
    /// value, so later divisions would be meaningless
    #[error("derived {what} is not positive")]
    DegenerateDenominator { what: &'static str },

    /// Reallocation parameters for a status class are unusable
    #[error("invalid policy for {status:?} pools: {reason}")]
    InvalidPolicy {
        status: PoolStatus,
        reason: &'static str,
    },
}
