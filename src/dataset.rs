//! Trial dataset: a block of equally sized `f64` rows.
//!
//! Row layout is positional and fixed:
//! - row 0 is the shared input field,
//! - row 1 receives the compute kernel's result,
//! - row 2 receives the access kernel's result,
//! - rows 3.. are extra addends summed by both kernels.

/// Initial value for every element of every row.
pub const FILL_VALUE: f64 = 10.0;

/// Index of the shared input field row.
pub const FIELD_ROW: usize = 0;
/// Index of the compute kernel's result row.
pub const COMPUTE_ROW: usize = 1;
/// Index of the access kernel's result row.
pub const ACCESS_ROW: usize = 2;
/// Index of the first extra addend row.
pub const FIRST_EXTRA_ROW: usize = 3;

/// `n_arrays + 3` rows of `length` elements each, all starting at
/// [`FILL_VALUE`]. Rows 1 and 2 are written by exactly one kernel each;
/// everything else is read-only once constructed (tests may inject custom
/// field values via [`Dataset::field_mut`]).
pub struct Dataset {
    rows: Vec<Vec<f64>>,
}

impl Dataset {
    /// Allocate the row block. `n_arrays` and `length` of zero are legal and
    /// give degenerate (but well-defined) trials.
    pub fn new(n_arrays: usize, length: usize) -> Self {
        Self {
            rows: vec![vec![FILL_VALUE; length]; n_arrays + FIRST_EXTRA_ROW],
        }
    }

    /// Elements per row.
    pub fn length(&self) -> usize {
        self.rows[FIELD_ROW].len()
    }

    /// Total row count (`n_arrays + 3`).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Shared input field (row 0).
    pub fn field(&self) -> &[f64] {
        &self.rows[FIELD_ROW]
    }

    /// Mutable input field, for injecting non-constant inputs in tests and
    /// benchmarks. The kernels themselves never write this row.
    pub fn field_mut(&mut self) -> &mut [f64] {
        &mut self.rows[FIELD_ROW]
    }

    /// Compute kernel's result row (row 1).
    pub fn compute_result(&self) -> &[f64] {
        &self.rows[COMPUTE_ROW]
    }

    /// Access kernel's result row (row 2).
    pub fn access_result(&self) -> &[f64] {
        &self.rows[ACCESS_ROW]
    }

    /// Extra addend rows (rows 3..).
    pub fn extra_rows(&self) -> &[Vec<f64>] {
        &self.rows[FIRST_EXTRA_ROW..]
    }

    /// Field + mutable compute-result row + extras, borrowed disjointly so a
    /// kernel can read and write in one pass.
    pub(crate) fn split_compute_mut(&mut self) -> (&[f64], &mut [f64], &[Vec<f64>]) {
        self.split_result_mut(COMPUTE_ROW)
    }

    /// Field + mutable access-result row + extras.
    pub(crate) fn split_access_mut(&mut self) -> (&[f64], &mut [f64], &[Vec<f64>]) {
        self.split_result_mut(ACCESS_ROW)
    }

    fn split_result_mut(&mut self, result_row: usize) -> (&[f64], &mut [f64], &[Vec<f64>]) {
        debug_assert!(result_row == COMPUTE_ROW || result_row == ACCESS_ROW);
        let (head, extras) = self.rows.split_at_mut(FIRST_EXTRA_ROW);
        let (field, results) = head.split_at_mut(COMPUTE_ROW);
        (
            field[FIELD_ROW].as_slice(),
            results[result_row - COMPUTE_ROW].as_mut_slice(),
            &*extras,
        )
    }
}
