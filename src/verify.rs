//! Correctness self-check for the two kernels.
//!
//! Confirms the divide and multiply formulations computed the same values.
//! This is a numeric sanity check on the experiment, never a performance
//! metric.

/// Maximum allowed per-element difference between the two result rows.
pub const TOLERANCE: f64 = 1e-7;

/// Element-wise `|a[j] - b[j]| < TOLERANCE`, folded over every index (no
/// short-circuit, mirroring a full reduction). Vacuously true for empty rows.
pub fn rows_match(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(true, |ok, (x, y)| ok & ((x - y).abs() < TOLERANCE))
}
