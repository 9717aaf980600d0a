//! Wall-clock timing for the measured kernels.
//!
//! One monotonic start/end pair immediately around each kernel call. The
//! cache disturbance runs before the window opens, so only the kernel itself
//! is inside the measurement.

use std::time::Instant;

/// Run `f` and return its output together with the elapsed wall-clock time in
/// seconds. Single clock reading per side, no retries.
pub fn time_section<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64())
}
