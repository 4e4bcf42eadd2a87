//! Vandermonde design matrix construction and column norms.
//!
//! ## Purpose
//!
//! Least-squares polynomial fitting solves `V c ≈ y` where `V` is the
//! Vandermonde matrix of the sample points. This module builds `V` in the
//! descending-power column order that matches highest-degree-first
//! coefficient storage, and computes the column 2-norms used for
//! equilibration.
//!
//! ## Design notes
//!
//! * **Layout**: column-major, matching the linear algebra backend's
//!   `from_column_slice` constructors.
//! * **Equilibration guard**: a zero-norm column (every sample equal to zero)
//!   reports a norm of 1 so the scaling division is a no-op instead of
//!   producing NaNs.

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
// Vandermonde Matrix
// ============================================================================

/// Build the `(n, degree + 1)` Vandermonde matrix in column-major layout.
///
/// Column `j` holds `x^(degree - j)`: descending powers, so the solution
/// vector comes out highest degree first.
pub fn vandermonde<T: Float + Coefficient>(x: &[T], degree: usize) -> Vec<T> {
    let n = x.len();
    let terms = degree + 1;

    let mut out = Vec::with_capacity(n * terms);
    for j in 0..terms {
        let power = (degree - j) as i32;
        for &xi in x {
            out.push(xi.powi(power));
        }
    }
    out
}

// ============================================================================
// Column Norms
// ============================================================================

/// Column 2-norms of a column-major matrix, with zero norms mapped to 1.
pub fn column_norms<T: Float + Coefficient>(a: &[T], nrows: usize, ncols: usize) -> Vec<T> {
    debug_assert_eq!(a.len(), nrows * ncols);

    (0..ncols)
        .map(|j| {
            let col = &a[j * nrows..(j + 1) * nrows];
            let sumsq = col.iter().fold(T::zero(), |acc, &v| acc + v * v);
            let norm = sumsq.sqrt();
            if norm.is_zero() {
                T::one()
            } else {
                norm
            }
        })
        .collect()
}

/// Divide each column of a column-major matrix by its scale factor, in place.
pub fn scale_columns<T: Float + Coefficient>(a: &mut [T], nrows: usize, scale: &[T]) {
    for (j, &s) in scale.iter().enumerate() {
        for v in &mut a[j * nrows..(j + 1) * nrows] {
            *v = *v / s;
        }
    }
}
