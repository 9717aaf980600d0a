//! The two measured kernels and the precompute step.
//!
//! Both kernels perform the same summation over the same rows; they differ in
//! exactly one operation per element. `compute` divides by a freshly
//! evaluated transform, `access` multiplies by a reciprocal fetched from the
//! precomputed table. That single divide-vs-fetched-multiply is the quantity
//! the experiment measures, so neither kernel may borrow the other's final
//! step.

use crate::dataset::Dataset;

/// Build the auxiliary table: `precomputed[j] = 1 / fun(field[j])`.
///
/// Plain IEEE division; a transform that evaluates to zero yields infinity,
/// which is propagated, not trapped. Must run before either kernel and before
/// the cache disturbance that precedes the timed phases.
pub fn precompute_reciprocals<F: Fn(f64) -> f64>(field: &[f64], fun: F) -> Vec<f64> {
    field.iter().map(|&v| 1.0 / fun(v)).collect()
}

/// Inline-recompute kernel. For each element:
/// `row1[j] = (row0[j] + Σ extras[i][j]) / fun(row0[j])`
///
/// The accumulator starts from the field value, adds each extra row in index
/// order, then divides once at the end. Writes row 1 only.
pub fn compute_kernel<F: Fn(f64) -> f64>(data: &mut Dataset, fun: F) {
    let (field, result, extras) = data.split_compute_mut();
    for j in 0..field.len() {
        let mut acc = field[j];
        for row in extras {
            acc += row[j];
        }
        result[j] = acc / fun(field[j]);
    }
}

/// Precomputed-table kernel. Same accumulation as [`compute_kernel`], but the
/// final operation is a multiply by the cached reciprocal:
/// `row2[j] = (row0[j] + Σ extras[i][j]) * precomputed[j]`
///
/// Writes row 2 only. `precomputed` must come from
/// [`precompute_reciprocals`] over the same field and transform.
pub fn access_kernel(data: &mut Dataset, precomputed: &[f64]) {
    let (field, result, extras) = data.split_access_mut();
    debug_assert_eq!(precomputed.len(), field.len());
    for j in 0..field.len() {
        let mut acc = field[j];
        for row in extras {
            acc += row[j];
        }
        result[j] = acc * precomputed[j];
    }
}
