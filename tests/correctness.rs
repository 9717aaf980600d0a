//! Kernel equivalence across shapes and transforms.
//!
//! The central invariant: for any valid shape, the compute kernel (inline
//! divide) and access kernel (precomputed multiply) agree element-wise
//! within 1e-7.

use rand::Rng;

use precompute_experiments::dataset::Dataset;
use precompute_experiments::kernels::{access_kernel, compute_kernel, precompute_reciprocals};
use precompute_experiments::transform::{Transform, TransformKind};
use precompute_experiments::verify::{rows_match, TOLERANCE};

fn run_both(data: &mut Dataset, fun: Transform) {
    let precomputed = precompute_reciprocals(data.field(), fun);
    compute_kernel(data, fun);
    access_kernel(data, &precomputed);
}

fn assert_kernels_agree(n_arrays: usize, length: usize, kind: TransformKind) {
    let mut data = Dataset::new(n_arrays, length);
    run_both(&mut data, kind.function());
    assert!(
        rows_match(data.compute_result(), data.access_result()),
        "kernel mismatch at n_arrays={}, length={}, {:?}. First diff at index {:?}",
        n_arrays,
        length,
        kind,
        data.compute_result()
            .iter()
            .zip(data.access_result())
            .position(|(a, b)| (a - b).abs() >= TOLERANCE)
    );
}

fn agree_all_transforms(n_arrays: usize, length: usize) {
    for kind in TransformKind::ALL {
        assert_kernels_agree(n_arrays, length, kind);
    }
}

// Shape grid
#[test] fn test_agree_1x3()      { agree_all_transforms(1, 3); }
#[test] fn test_agree_0x1()      { agree_all_transforms(0, 1); }
#[test] fn test_agree_0x1k()     { agree_all_transforms(0, 1_000); }
#[test] fn test_agree_4x1k()     { agree_all_transforms(4, 1_000); }
#[test] fn test_agree_16x256()   { agree_all_transforms(16, 256); }
#[test] fn test_agree_1x100k()   { agree_all_transforms(1, 100_000); }
#[test] fn test_agree_8x1m()     { agree_all_transforms(8, 1_000_000); }

// Degenerate shapes
#[test] fn test_agree_0x0()      { agree_all_transforms(0, 0); }
#[test] fn test_agree_7x0()      { agree_all_transforms(7, 0); }

#[test]
fn test_concrete_identity_scenario() {
    // n_arrays=1, length=3, all 10s, identity:
    // precomputed = [0.1, 0.1, 0.1], both kernels (10+10)/10 = 2
    let mut data = Dataset::new(1, 3);
    let precomputed = precompute_reciprocals(data.field(), TransformKind::Identity.function());
    assert_eq!(precomputed, vec![0.1, 0.1, 0.1]);

    compute_kernel(&mut data, TransformKind::Identity.function());
    access_kernel(&mut data, &precomputed);
    assert_eq!(data.compute_result(), &[2.0, 2.0, 2.0]);
    assert_eq!(data.access_result(), &[2.0, 2.0, 2.0]);
}

#[test]
fn test_concrete_exponential_scenario() {
    // Same shape, exponential: both kernels 20 / e^10 ~= 9.08e-4
    let mut data = Dataset::new(1, 3);
    run_both(&mut data, TransformKind::Exponential.function());

    let expected = 20.0 / 10.0f64.exp();
    assert!((expected - 9.08e-4).abs() < 1e-5);
    for (&c, &a) in data.compute_result().iter().zip(data.access_result()) {
        assert!((c - expected).abs() < TOLERANCE);
        assert!((a - expected).abs() < TOLERANCE);
    }
}

#[test]
fn test_agree_on_randomized_field() {
    let mut rng = rand::thread_rng();
    for kind in TransformKind::ALL {
        let mut data = Dataset::new(3, 10_000);
        for v in data.field_mut() {
            // Keep exp() well away from overflow and reciprocals away from 0
            *v = rng.gen_range(0.5..20.0);
        }
        run_both(&mut data, kind.function());
        assert!(
            rows_match(data.compute_result(), data.access_result()),
            "randomized field mismatch for {:?}",
            kind
        );
    }
}

#[test]
fn test_precomputed_table_is_exact() {
    // precomputed[j] == 1 / f(field[j]) bitwise, for every j
    let mut data = Dataset::new(0, 100);
    let mut rng = rand::thread_rng();
    for v in data.field_mut() {
        *v = rng.gen_range(0.1..50.0);
    }
    for kind in TransformKind::ALL {
        let fun = kind.function();
        let table = precompute_reciprocals(data.field(), fun);
        for (j, (&v, &p)) in data.field().iter().zip(&table).enumerate() {
            assert_eq!(p, 1.0 / fun(v), "index {j} for {:?}", kind);
        }
    }
}
