//! One full trial: setup, precompute, disturb, time both kernels, verify.
//!
//! Phase order per trial:
//! INIT -> PRECOMPUTE -> DISTURB -> COMPUTE_TIMED -> DISTURB -> ACCESS_TIMED
//! -> VERIFY -> REPORT. Everything a trial touches (dataset, reciprocal
//! table, scratch buffer) is created fresh here and dropped at the end, so
//! the 40 trials of a full run are independent.

use crate::cache::CacheScrubber;
use crate::dataset::Dataset;
use crate::kernels::{access_kernel, compute_kernel, precompute_reciprocals};
use crate::timing::time_section;
use crate::transform::TransformKind;
use crate::verify::rows_match;

/// Outer driver iterations; each iteration runs one trial per transform.
pub const TRIAL_ITERATIONS: usize = 20;

/// Measurements and verdict from a single trial.
#[derive(Debug, Clone)]
pub struct TrialReport {
    pub kind: TransformKind,
    /// Wall-clock seconds for the compute (inline divide) kernel.
    pub compute_secs: f64,
    /// Wall-clock seconds for the access (precomputed multiply) kernel.
    pub access_secs: f64,
    /// Whether the two result rows agree within tolerance.
    pub verified: bool,
}

impl TrialReport {
    /// Print the four report lines for this trial. Spacing in the access line
    /// keeps the two elapsed values column-aligned.
    pub fn print(&self) {
        println!("{}", self.kind.label());
        println!("elapsed time compute: {}", self.compute_secs);
        println!("elapsed time access:  {}", self.access_secs);
        println!("{}", if self.verified { "SUCCESS" } else { "FAILURE" });
    }
}

/// Run one trial for the given shape and transform.
pub fn run_trial(n_arrays: usize, length: usize, kind: TransformKind) -> TrialReport {
    let fun = kind.function();

    let mut data = Dataset::new(n_arrays, length);
    let precomputed = precompute_reciprocals(data.field(), fun);
    let mut scrubber = CacheScrubber::new();

    scrubber.scrub();
    let ((), compute_secs) = time_section(|| compute_kernel(&mut data, fun));

    scrubber.scrub();
    let ((), access_secs) = time_section(|| access_kernel(&mut data, &precomputed));

    let verified = rows_match(data.compute_result(), data.access_result());

    TrialReport {
        kind,
        compute_secs,
        access_secs,
        verified,
    }
}
