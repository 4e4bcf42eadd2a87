#![cfg(feature = "dev")]
//! Tests for the nalgebra-backed least-squares solver.
//!
//! These tests exercise the `FloatLstsq` bridge directly: minimum-norm SVD
//! solves, rank determination under an rcond cutoff, and normal-matrix
//! inversion.

use approx::assert_relative_eq;

use poly1d_rs::internals::math::linalg::FloatLstsq;
use poly1d_rs::internals::math::vandermonde::{column_norms, scale_columns, vandermonde};

// ============================================================================
// Least-Squares Solve Tests
// ============================================================================

/// Square full-rank system: the solve is exact.
#[test]
fn test_lstsq_square_system() {
    // Identity matrix, column-major.
    let a = [1.0, 0.0, 0.0, 1.0];
    let b = [3.0, 4.0];
    let out = f64::lstsq(&a, 2, 2, &b, 1, 1e-12).unwrap();

    assert_eq!(out.rank, 2);
    assert_relative_eq!(out.solution[0], 3.0, epsilon = 1e-12);
    assert_relative_eq!(out.solution[1], 4.0, epsilon = 1e-12);
}

/// Overdetermined consistent system: least squares recovers the exact line.
#[test]
fn test_lstsq_overdetermined() {
    // Design for y = 2x + 1 at x = 0, 1, 2: columns [x, 1], column-major.
    let a = [0.0, 1.0, 2.0, 1.0, 1.0, 1.0];
    let b = [1.0, 3.0, 5.0];
    let out = f64::lstsq(&a, 3, 2, &b, 1, 1e-12).unwrap();

    assert_eq!(out.rank, 2);
    assert_eq!(out.singular_values.len(), 2);
    assert_relative_eq!(out.solution[0], 2.0, epsilon = 1e-8);
    assert_relative_eq!(out.solution[1], 1.0, epsilon = 1e-8);
}

/// A large cutoff collapses the rank but the solve still succeeds.
#[test]
fn test_lstsq_rank_truncation() {
    let a = [0.0, 1.0, 2.0, 1.0, 1.0, 1.0];
    let b = [1.0, 3.0, 5.0];
    let out = f64::lstsq(&a, 3, 2, &b, 1, 0.9).unwrap();

    assert!(out.rank < 2);
    assert_eq!(out.solution.len(), 2);
}

/// The f32 bridge follows the same contract at lower precision.
#[test]
fn test_lstsq_f32() {
    let a = [0.0f32, 1.0, 2.0, 1.0, 1.0, 1.0];
    let b = [1.0f32, 3.0, 5.0];
    let out = f32::lstsq(&a, 3, 2, &b, 1, 1e-6).unwrap();

    assert_eq!(out.rank, 2);
    assert_relative_eq!(out.solution[0], 2.0, epsilon = 1e-4);
    assert_relative_eq!(out.solution[1], 1.0, epsilon = 1e-4);
}

// ============================================================================
// Normal-Matrix Inversion Tests
// ============================================================================

/// Inverse of a diagonal normal matrix.
#[test]
fn test_invert_normal_diagonal() {
    // diag(2, 0.5), column-major.
    let n = [2.0, 0.0, 0.0, 0.5];
    let inv = f64::invert_normal(&n, 2).unwrap();

    assert_relative_eq!(inv[0], 0.5, epsilon = 1e-12);
    assert_relative_eq!(inv[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(inv[2], 0.0, epsilon = 1e-12);
    assert_relative_eq!(inv[3], 2.0, epsilon = 1e-12);
}

/// Inverse times the original is the identity.
#[test]
fn test_invert_normal_round_trip() {
    // Symmetric positive definite 2x2, column-major.
    let n = [5.0, 2.0, 2.0, 3.0];
    let inv = f64::invert_normal(&n, 2).unwrap();

    // n * inv, column-major product.
    let mut prod = [0.0; 4];
    for c in 0..2 {
        for r in 0..2 {
            prod[c * 2 + r] = (0..2).map(|k| n[k * 2 + r] * inv[c * 2 + k]).sum();
        }
    }
    assert_relative_eq!(prod[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(prod[1], 0.0, epsilon = 1e-10);
    assert_relative_eq!(prod[2], 0.0, epsilon = 1e-10);
    assert_relative_eq!(prod[3], 1.0, epsilon = 1e-10);
}

// ============================================================================
// Vandermonde and Equilibration Tests
// ============================================================================

/// Columns hold descending powers of the samples, column-major.
#[test]
fn test_vandermonde_descending_powers() {
    let v = vandermonde(&[1.0, 2.0, 3.0], 2);
    // Columns: x^2, x^1, x^0.
    assert_eq!(v, vec![1.0, 4.0, 9.0, 1.0, 2.0, 3.0, 1.0, 1.0, 1.0]);
}

/// Degree 0 is a single all-ones column.
#[test]
fn test_vandermonde_degree_zero() {
    assert_eq!(vandermonde(&[5.0, -3.0], 0), vec![1.0, 1.0]);
}

/// Column norms, with the zero-column guard mapping 0 to 1.
#[test]
fn test_column_norms_zero_guard() {
    let a = [3.0, 4.0, 0.0, 0.0];
    let norms = column_norms(&a, 2, 2);
    assert_relative_eq!(norms[0], 5.0, epsilon = 1e-12);
    assert_relative_eq!(norms[1], 1.0, epsilon = 1e-12);
}

/// Scaling by the computed norms yields unit-norm columns.
#[test]
fn test_scale_columns_unit_norm() {
    let mut a = [3.0, 4.0, 1.0, 1.0];
    let norms = column_norms(&a, 2, 2);
    scale_columns(&mut a, 2, &norms);

    for j in 0..2 {
        let sumsq: f64 = (0..2).map(|i| a[j * 2 + i] * a[j * 2 + i]).sum();
        assert_relative_eq!(sumsq.sqrt(), 1.0, epsilon = 1e-12);
    }
}
