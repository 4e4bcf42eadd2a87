//! Linear algebra backend abstraction for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the linear algebra
//! operations polyfit needs, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Uses SVD for the minimum-norm least-squares solve so singular values,
//!   effective rank, and the rcond truncation cutoff fall out of one
//!   decomposition.
//! * Normal-matrix inversion (for covariance) uses QR (Householder
//!   reflections), with a fallback to the SVD pseudo-inverse for
//!   ill-conditioned systems.
//! * Generic over `FloatLstsq` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::scalar::Coefficient;

// ============================================================================
// Solver Output
// ============================================================================

/// Output of a minimum-norm least-squares solve.
#[derive(Debug, Clone)]
pub struct LstsqOutcome<T> {
    /// Solution matrix, column-major `(ncols, nrhs)`.
    pub solution: Vec<T>,
    /// Effective rank of the design matrix under the cutoff.
    pub rank: usize,
    /// Singular values of the design matrix, descending.
    pub singular_values: Vec<T>,
}

// ============================================================================
// FloatLstsq Trait
// ============================================================================

/// Helper trait to bridge generic `Float` types to the nalgebra backend.
pub trait FloatLstsq: Float + Coefficient {
    /// Solve the minimum-norm least-squares problem `A X = B` by SVD.
    ///
    /// `a` is column-major `(nrows, ncols)`, `b` column-major
    /// `(nrows, nrhs)`. Singular values at or below `rcond * s_max` are
    /// treated as zero.
    fn lstsq(
        a: &[Self],
        nrows: usize,
        ncols: usize,
        b: &[Self],
        nrhs: usize,
        rcond: Self,
    ) -> Option<LstsqOutcome<Self>>;

    /// Invert the symmetric normal matrix `AᵗA` (column-major, `n x n`).
    fn invert_normal(a: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLstsq for f64 {
    #[inline]
    fn lstsq(
        a: &[Self],
        nrows: usize,
        ncols: usize,
        b: &[Self],
        nrhs: usize,
        rcond: Self,
    ) -> Option<LstsqOutcome<Self>> {
        nalgebra_backend::lstsq_f64(a, nrows, ncols, b, nrhs, rcond)
    }

    #[inline]
    fn invert_normal(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert_normal_matrix_f64(a, n)
    }
}

impl FloatLstsq for f32 {
    #[inline]
    fn lstsq(
        a: &[Self],
        nrows: usize,
        ncols: usize,
        b: &[Self],
        nrhs: usize,
        rcond: Self,
    ) -> Option<LstsqOutcome<Self>> {
        nalgebra_backend::lstsq_f32(a, nrows, ncols, b, nrhs, rcond)
    }

    #[inline]
    fn invert_normal(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert_normal_matrix_f32(a, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::DMatrix;

    /// SVD minimum-norm least squares using f64 precision.
    pub fn lstsq_f64(
        a: &[f64],
        nrows: usize,
        ncols: usize,
        b: &[f64],
        nrhs: usize,
        rcond: f64,
    ) -> Option<LstsqOutcome<f64>> {
        let matrix = DMatrix::from_column_slice(nrows, ncols, a);
        let rhs = DMatrix::from_column_slice(nrows, nrhs, b);

        let svd = matrix.svd(true, true);
        let s_max = svd
            .singular_values
            .iter()
            .copied()
            .fold(0.0_f64, f64::max);
        let cutoff = rcond * s_max;

        let rank = svd.rank(cutoff);
        let singular_values = svd.singular_values.as_slice().to_vec();
        let solution = svd.solve(&rhs, cutoff).ok()?;

        Some(LstsqOutcome {
            solution: solution.as_slice().to_vec(),
            rank,
            singular_values,
        })
    }

    /// SVD minimum-norm least squares using f32 precision.
    pub fn lstsq_f32(
        a: &[f32],
        nrows: usize,
        ncols: usize,
        b: &[f32],
        nrhs: usize,
        rcond: f32,
    ) -> Option<LstsqOutcome<f32>> {
        let matrix = DMatrix::from_column_slice(nrows, ncols, a);
        let rhs = DMatrix::from_column_slice(nrows, nrhs, b);

        let svd = matrix.svd(true, true);
        let s_max = svd
            .singular_values
            .iter()
            .copied()
            .fold(0.0_f32, f32::max);
        let cutoff = rcond * s_max;

        let rank = svd.rank(cutoff);
        let singular_values = svd.singular_values.as_slice().to_vec();
        let solution = svd.solve(&rhs, cutoff).ok()?;

        Some(LstsqOutcome {
            solution: solution.as_slice().to_vec(),
            rank,
            singular_values,
        })
    }

    /// Invert the normal matrix `AᵗA` using f64 precision.
    pub fn invert_normal_matrix_f64(a: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let qr = matrix.clone().qr();
        let identity = DMatrix::identity(n, n);

        if let Some(inv) = qr.solve(&identity) {
            return Some(inv.as_slice().to_vec());
        }

        matrix
            .pseudo_inverse(f64::EPSILON * 100.0)
            .ok()
            .map(|inv: DMatrix<f64>| inv.as_slice().to_vec())
    }

    /// Invert the normal matrix `AᵗA` using f32 precision.
    pub fn invert_normal_matrix_f32(a: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let qr = matrix.clone().qr();
        let identity = DMatrix::identity(n, n);

        if let Some(inv) = qr.solve(&identity) {
            return Some(inv.as_slice().to_vec());
        }

        matrix
            .pseudo_inverse(f32::EPSILON * 100.0)
            .ok()
            .map(|inv: DMatrix<f32>| inv.as_slice().to_vec())
    }
}
