//! The unary transform whose cost is the variable under test.
//!
//! Kernels, precompute, and the trial driver all take the transform as an
//! explicit function value; there is no global transform state.

/// A unary numeric transform.
pub type Transform = fn(f64) -> f64;

/// The trivial transform: `f(v) = v`.
pub fn identity(v: f64) -> f64 {
    v
}

/// The expensive transform: `f(v) = e^v`.
pub fn exponential(v: f64) -> f64 {
    v.exp()
}

/// Transform selection for the driver and the per-trial report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Identity,
    Exponential,
}

impl TransformKind {
    /// Both transforms, in the order the driver runs them within an
    /// iteration.
    pub const ALL: [TransformKind; 2] = [TransformKind::Identity, TransformKind::Exponential];

    /// Short name for benchmark/report grouping.
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Identity => "identity",
            TransformKind::Exponential => "exponential",
        }
    }

    /// Header line printed before each trial's measurements.
    pub fn label(self) -> &'static str {
        match self {
            TransformKind::Identity => "Try the inverse",
            TransformKind::Exponential => "Try the inverse of the exponential",
        }
    }

    /// The transform as a first-class function value.
    pub fn function(self) -> Transform {
        match self {
            TransformKind::Identity => identity,
            TransformKind::Exponential => exponential,
        }
    }
}
