//! Leading-zero trimming and right-aligned padding of coefficient sequences.
//!
//! ## Purpose
//!
//! Coefficient sequences are stored highest degree first, so the "leading"
//! zeros are the high-order ones. This module provides the trim applied at
//! polynomial construction and the right-aligned elementwise combination used
//! by addition and subtraction.
//!
//! ## Invariants
//!
//! * A trimmed sequence is never empty: the constant term survives, and an
//!   empty or all-zero input trims to the single coefficient 0.
//! * Padding aligns constant terms (sequence tails), never heads.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::scalar::Coefficient;

// ============================================================================
// Trimming
// ============================================================================

/// Strip leading (high-degree) zero coefficients, retaining at least the
/// constant term.
pub fn trim_leading_zeros<T: Coefficient>(coeffs: &[T]) -> Vec<T> {
    let first_nonzero = coeffs.iter().position(|c| !c.is_zero());
    match first_nonzero {
        Some(start) => coeffs[start..].to_vec(),
        // Empty or all zeros: a polynomial still has one coefficient.
        None => vec![T::zero()],
    }
}

// ============================================================================
// Right-Aligned Combination
// ============================================================================

/// Elementwise sum after right-aligned zero-padding to the longer length.
pub fn add_padded<T: Coefficient>(a: &[T], b: &[T]) -> Vec<T> {
    combine_padded(a, b, |x, y| x + y)
}

/// Elementwise difference (`a - b`) after right-aligned zero-padding.
pub fn sub_padded<T: Coefficient>(a: &[T], b: &[T]) -> Vec<T> {
    combine_padded(a, b, |x, y| x - y)
}

/// Shared right-aligned combination kernel.
///
/// The shorter sequence is treated as if zero-extended on its high-order
/// side; constant terms stay aligned.
fn combine_padded<T: Coefficient>(a: &[T], b: &[T], op: impl Fn(T, T) -> T) -> Vec<T> {
    let n = a.len().max(b.len());
    let a_offset = n - a.len();
    let b_offset = n - b.len();

    (0..n)
        .map(|i| {
            let av = if i >= a_offset { a[i - a_offset] } else { T::zero() };
            let bv = if i >= b_offset { b[i - b_offset] } else { T::zero() };
            op(av, bv)
        })
        .collect()
}
