//! Experiment driver: 20 iterations, each running one trial per transform.
//!
//! Exit status is 0 whenever the run completes, regardless of
//! SUCCESS/FAILURE verdicts; only argument errors (clap) exit nonzero.

use clap::Parser;

use precompute_experiments::transform::TransformKind;
use precompute_experiments::trial::{run_trial, TRIAL_ITERATIONS};

/// Measure precomputed-reciprocal lookup vs inline recompute under cache
/// pollution.
///
/// Runs 20 iterations; each iteration times both kernels once with the
/// identity transform and once with the exponential, printing elapsed
/// seconds and a SUCCESS/FAILURE verification line per trial.
#[derive(Parser, Debug)]
#[command(name = "precompute-experiments", version, about)]
struct CliArgs {
    /// Number of extra addend rows summed by both kernels.
    #[arg(value_name = "N_ARRAYS")]
    n_arrays: usize,

    /// Elements per row.
    #[arg(value_name = "LENGTH")]
    length: usize,
}

fn main() {
    let args = CliArgs::parse();

    for _ in 0..TRIAL_ITERATIONS {
        for kind in TransformKind::ALL {
            run_trial(args.n_arrays, args.length, kind).print();
        }
    }
}
