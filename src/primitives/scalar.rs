//! Coefficient scalar trait and the numeric promotion lattice.
//!
//! ## Purpose
//!
//! This module defines which scalar types may serve as polynomial
//! coefficients, and how two different coefficient dtypes combine into a
//! common result dtype.
//!
//! ## Design notes
//!
//! * **Blanket trait**: `Coefficient` is a bound alias over the `num-traits`
//!   capabilities the crate needs (ring arithmetic, casting, signedness for
//!   display, ordering for trimming comparisons).
//! * **Compile-time promotion**: `Promote` encodes the standard numeric
//!   promotion table as an associated-type lattice, so mixed-dtype arithmetic
//!   resolves its result type at compile time instead of through a runtime
//!   dtype tag.
//! * **Supported scalars**: `i32`, `i64`, `f32`, `f64`. Integer/float pairs
//!   promote to `f64` (an `f32` cannot represent every `i32`/`i64` exactly).
//!
//! ## Invariants
//!
//! * Promotion is symmetric: `<A as Promote<B>>::Output` equals
//!   `<B as Promote<A>>::Output` for every supported pair.
//! * Promotion conversions are value-preserving over the supported lattice.
//!
//! ## Non-goals
//!
//! * Complex and boolean coefficient dtypes (see DESIGN.md).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::{Num, NumCast, Signed};

// ============================================================================
// Coefficient Trait
// ============================================================================

/// Scalar types usable as polynomial coefficients.
///
/// Implemented for every type satisfying the bounds; in practice the crate's
/// promotion lattice covers `i32`, `i64`, `f32`, and `f64`.
pub trait Coefficient:
    Num + NumCast + Signed + PartialOrd + Copy + Debug + Display + 'static
{
}

impl<T> Coefficient for T where
    T: Num + NumCast + Signed + PartialOrd + Copy + Debug + Display + 'static
{
}

// ============================================================================
// Promote Lattice
// ============================================================================

/// Compile-time numeric promotion between two coefficient dtypes.
///
/// `<Lhs as Promote<Rhs>>::Output` is the common dtype both operands convert
/// to before elementwise arithmetic, following the standard numeric promotion
/// rules restricted to the supported scalar set.
pub trait Promote<Rhs: Coefficient>: Coefficient {
    /// The common result dtype of the pair.
    type Output: Coefficient;

    // The fully qualified form disambiguates from the `Output` types that
    // the `Num` arithmetic supertraits carry.
    /// Convert a left-hand value into the common dtype.
    fn promote_lhs(lhs: Self) -> <Self as Promote<Rhs>>::Output;

    /// Convert a right-hand value into the common dtype.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

macro_rules! promote_impl {
    ($($lhs:ty, $rhs:ty => $out:ty);* $(;)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote_lhs(lhs: $lhs) -> $out {
                    lhs as $out
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

promote_impl! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f64;
    i32, f64 => f64;
    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f64;
    i64, f64 => f64;
    f32, i32 => f64;
    f32, i64 => f64;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

// ============================================================================
// Helpers
// ============================================================================

/// Promote a coefficient slice into the common dtype of a pair, left side.
#[inline]
pub fn promote_slice_lhs<T, U>(coeffs: &[T]) -> Vec<<T as Promote<U>>::Output>
where
    T: Promote<U>,
    U: Coefficient,
{
    coeffs.iter().map(|&c| T::promote_lhs(c)).collect()
}

/// Promote a coefficient slice into the common dtype of a pair, right side.
#[inline]
pub fn promote_slice_rhs<T, U>(coeffs: &[U]) -> Vec<<T as Promote<U>>::Output>
where
    T: Promote<U>,
    U: Coefficient,
{
    coeffs.iter().map(|&c| T::promote_rhs(c)).collect()
}
