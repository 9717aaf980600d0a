//! Cache disturbance between trial setup and each timed phase.
//!
//! Walking a buffer much larger than the last-level cache evicts most of the
//! dataset, so both timed kernels start from a comparably cold cache. This is
//! a best-effort, platform-dependent heuristic, not a guarantee: it reduces
//! residency of prior data, nothing more.

use std::hint::black_box;

/// Scratch buffer length in `i32` elements (32 MiB). Sized to exceed typical
/// last-level caches by a wide margin.
pub const SCRUB_LEN: usize = 1 << 23;

/// Owns the scratch buffer and walks it on demand. The buffer carries no
/// semantic data; it exists only to be touched.
pub struct CacheScrubber {
    trash: Vec<i32>,
}

impl CacheScrubber {
    /// Scrubber with the default [`SCRUB_LEN`] buffer.
    pub fn new() -> Self {
        Self::with_len(SCRUB_LEN)
    }

    /// Scrubber with a custom buffer length (tests use small ones).
    pub fn with_len(len: usize) -> Self {
        Self {
            trash: vec![0; len],
        }
    }

    /// Increment every element in place. No output, no data dependency on the
    /// trial dataset. `black_box` keeps the optimizer from deleting the walk,
    /// which would defeat the eviction.
    pub fn scrub(&mut self) {
        for v in &mut self.trash {
            *v = black_box(v.wrapping_add(1));
        }
    }

    /// Print-based variant, kept only as a reference alternative. Never call
    /// this around a timed section: formatting and I/O per element dwarf the
    /// memory traffic the disturbance is supposed to generate.
    pub fn scrub_with_output(&mut self) {
        for v in &mut self.trash {
            print!("{v}");
        }
    }
}

impl Default for CacheScrubber {
    fn default() -> Self {
        Self::new()
    }
}
