//! Discrete (full) convolution of coefficient sequences.
//!
//! ## Purpose
//!
//! Polynomial multiplication is the discrete convolution of the two
//! coefficient sequences; the result degree is the sum of the operand
//! degrees.
//!
//! ## Design notes
//!
//! * **Algorithm**: direct O(n*m) accumulation. Operands here are polynomial
//!   coefficient vectors, which are short; an FFT path would not pay for
//!   itself.
//!
//! ## Invariants
//!
//! * For nonempty inputs the output length is `a.len() + b.len() - 1`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::scalar::Coefficient;

// ============================================================================
// Convolution
// ============================================================================

/// Full discrete convolution of two nonempty coefficient sequences.
pub fn convolve<T: Coefficient>(a: &[T], b: &[T]) -> Vec<T> {
    debug_assert!(!a.is_empty() && !b.is_empty());

    let mut out = vec![T::zero(); a.len() + b.len() - 1];
    for (i, &av) in a.iter().enumerate() {
        for (j, &bv) in b.iter().enumerate() {
            out[i + j] = out[i + j] + av * bv;
        }
    }
    out
}
