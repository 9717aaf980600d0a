//! Precompute-vs-recompute cache experiment.
//!
//! Measures whether caching a per-element reciprocal in an auxiliary array
//! ("access" kernel: one multiply per element, one extra stream from memory)
//! beats recomputing the transform inline ("compute" kernel: one divide per
//! element, no extra stream), with a large scratch-buffer walk before each
//! timed phase to put both kernels on an equally cold cache.
//!
//! The two kernels perform an identical summation so the measured difference
//! isolates exactly one operation: divide-by-recomputed vs
//! multiply-by-fetched.

pub mod cache;
pub mod dataset;
pub mod kernels;
pub mod timing;
pub mod transform;
pub mod trial;
pub mod verify;
