//! Shared rounding discipline for derived columns.
//!
//! Every derived rate is rounded half-to-even to 4 decimal places and every
//! derived money amount is rounded half-to-even to whole units. All derived
//! columns go through these two helpers so results stay reproducible across
//! implementations.

/// Round a rate or utilization to 4 decimal places, ties to even.
pub fn round_rate(x: f64) -> f64 {
    (x * 10_000.0).round_ties_even() / 10_000.0
}

/// Round a money amount to whole units, ties to even.
pub fn to_units(x: f64) -> i64 {
    x.round_ties_even() as i64
}
