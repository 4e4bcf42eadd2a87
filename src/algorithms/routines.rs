//! Free arithmetic routines over coefficient operands.
//!
//! ## Purpose
//!
//! This module provides `polyadd`, `polysub`, and `polymul` as free functions
//! accepting any mix of scalars, slices, arrays, host arrays, and polynomial
//! values, together with the [`PolyOperand`] trait that abstracts over those
//! input forms.
//!
//! ## Design notes
//!
//! * **Promotion at the seam**: the two operands may use different coefficient
//!   dtypes; the result dtype comes from the `Promote` lattice and all
//!   arithmetic runs in the promoted dtype.
//! * **Result form follows input form**: the result is a [`Polynomial`] only
//!   when both operands are polynomials (the variable follows the standard
//!   rule); any other combination yields a plain coefficient vector.
//! * **Raw results stay raw**: `polyadd`/`polysub` over plain sequences do
//!   not trim their output, matching elementwise array semantics. `polymul`
//!   trims its inputs first so the convolution length law holds.
//! * **Residency**: `DeviceArray` deliberately does not implement
//!   [`PolyOperand`]; a device-resident operand is rejected at compile time.
//!
//! ## Edge cases
//!
//! * Shapes `()`, `(0,)`, and `(n,)` are all accepted; `ndim >= 2` is a shape
//!   error. Adding two empty sequences yields an empty sequence; multiplying
//!   two empty or scalar operands yields a single coefficient.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::dispatch::PolyOp;
use crate::algorithms::polynomial::{resolve_variable, Polynomial};
use crate::math::convolve::convolve;
use crate::math::trim::{add_padded, sub_padded, trim_leading_zeros};
use crate::primitives::array::HostArray;
use crate::primitives::errors::PolyError;
use crate::primitives::scalar::{promote_slice_lhs, promote_slice_rhs, Coefficient, Promote};

// ============================================================================
// PolyOperand
// ============================================================================

/// An input form accepted by the polynomial routines.
///
/// Implemented for the supported scalar types (0-d operands), coefficient
/// slices, fixed-size arrays, vectors, 0-d/1-D [`HostArray`]s, and
/// [`Polynomial`] references. Device-resident arrays are intentionally
/// excluded; materialize them explicitly first.
pub trait PolyOperand<T: Coefficient> {
    /// Number of dimensions of the operand (0 for scalars).
    fn ndim(&self) -> usize;

    /// The operand's coefficients, highest degree first.
    fn coefficients(&self) -> Vec<T>;

    /// The operand's display variable, if it carries one.
    fn variable(&self) -> Option<&str> {
        None
    }

    /// Whether the operand is a polynomial value.
    fn is_polynomial(&self) -> bool {
        false
    }
}

macro_rules! scalar_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl PolyOperand<$t> for $t {
                #[inline]
                fn ndim(&self) -> usize {
                    0
                }

                #[inline]
                fn coefficients(&self) -> Vec<$t> {
                    vec![*self]
                }
            }
        )*
    };
}

scalar_operand!(i32, i64, f32, f64);

impl<'a, T: Coefficient> PolyOperand<T> for &'a [T] {
    #[inline]
    fn ndim(&self) -> usize {
        1
    }

    #[inline]
    fn coefficients(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Coefficient, const N: usize> PolyOperand<T> for [T; N] {
    #[inline]
    fn ndim(&self) -> usize {
        1
    }

    #[inline]
    fn coefficients(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<'a, T: Coefficient> PolyOperand<T> for &'a Vec<T> {
    #[inline]
    fn ndim(&self) -> usize {
        1
    }

    #[inline]
    fn coefficients(&self) -> Vec<T> {
        (*self).clone()
    }
}

impl<'a, T: Coefficient> PolyOperand<T> for &'a HostArray<T> {
    #[inline]
    fn ndim(&self) -> usize {
        HostArray::ndim(self)
    }

    #[inline]
    fn coefficients(&self) -> Vec<T> {
        self.data().to_vec()
    }
}

impl<'a, T: Coefficient> PolyOperand<T> for &'a Polynomial<T> {
    #[inline]
    fn ndim(&self) -> usize {
        1
    }

    #[inline]
    fn coefficients(&self) -> Vec<T> {
        self.coeffs().to_vec()
    }

    #[inline]
    fn variable(&self) -> Option<&str> {
        Some(Polynomial::variable(self))
    }

    #[inline]
    fn is_polynomial(&self) -> bool {
        true
    }
}

// ============================================================================
// PolyValue
// ============================================================================

/// Result of a polynomial routine.
///
/// Carries a full [`Polynomial`] when both inputs were polynomials, and a
/// plain coefficient vector otherwise.
#[derive(Debug, Clone)]
pub enum PolyValue<T: Coefficient> {
    /// Both inputs were polynomial values.
    Polynomial(Polynomial<T>),
    /// At least one input was a plain sequence or scalar.
    Coeffs(Vec<T>),
}

impl<T: Coefficient> PolyValue<T> {
    /// The result coefficients, highest degree first.
    pub fn coeffs(&self) -> &[T] {
        match self {
            PolyValue::Polynomial(p) => p.coeffs(),
            PolyValue::Coeffs(c) => c,
        }
    }

    /// The polynomial form of the result, if both inputs were polynomials.
    pub fn as_polynomial(&self) -> Option<&Polynomial<T>> {
        match self {
            PolyValue::Polynomial(p) => Some(p),
            PolyValue::Coeffs(_) => None,
        }
    }
}

// ============================================================================
// Routines
// ============================================================================

/// Add two coefficient operands.
///
/// Right-aligned elementwise sum after zero-padding to the longer length.
pub fn polyadd<T, U, A, B>(a: A, b: B) -> Result<PolyValue<<T as Promote<U>>::Output>, PolyError>
where
    T: Promote<U>,
    U: Coefficient,
    A: PolyOperand<T>,
    B: PolyOperand<U>,
{
    binary_routine(a, b, PolyOp::Add)
}

/// Subtract the second coefficient operand from the first.
pub fn polysub<T, U, A, B>(a: A, b: B) -> Result<PolyValue<<T as Promote<U>>::Output>, PolyError>
where
    T: Promote<U>,
    U: Coefficient,
    A: PolyOperand<T>,
    B: PolyOperand<U>,
{
    binary_routine(a, b, PolyOp::Sub)
}

/// Multiply two coefficient operands by discrete convolution.
///
/// Inputs are trimmed first, so the output length is
/// `len(trim(a)) + len(trim(b)) - 1` (length 1 for two empty or scalar
/// operands).
pub fn polymul<T, U, A, B>(a: A, b: B) -> Result<PolyValue<<T as Promote<U>>::Output>, PolyError>
where
    T: Promote<U>,
    U: Coefficient,
    A: PolyOperand<T>,
    B: PolyOperand<U>,
{
    binary_routine(a, b, PolyOp::Mul)
}

/// Shared routine kernel: validate shapes, promote, combine.
fn binary_routine<T, U, A, B>(
    a: A,
    b: B,
    op: PolyOp,
) -> Result<PolyValue<<T as Promote<U>>::Output>, PolyError>
where
    T: Promote<U>,
    U: Coefficient,
    A: PolyOperand<T>,
    B: PolyOperand<U>,
{
    if a.ndim() >= 2 {
        return Err(PolyError::TooManyDimensions { ndim: a.ndim() });
    }
    if b.ndim() >= 2 {
        return Err(PolyError::TooManyDimensions { ndim: b.ndim() });
    }

    let ac = promote_slice_lhs::<T, U>(&a.coefficients());
    let bc = promote_slice_rhs::<T, U>(&b.coefficients());
    let raw = combine_coeffs(&ac, &bc, op);

    if a.is_polynomial() && b.is_polynomial() {
        let variable = resolve_variable(a.variable(), b.variable());
        Ok(PolyValue::Polynomial(Polynomial::from_parts(raw, variable)))
    } else {
        Ok(PolyValue::Coeffs(raw))
    }
}

/// Combine two promoted coefficient sequences under `op`.
///
/// Addition and subtraction keep the raw padded length; multiplication trims
/// both inputs (an empty input behaves as the single coefficient 0) before
/// the full convolution.
pub(crate) fn combine_coeffs<T: Coefficient>(a: &[T], b: &[T], op: PolyOp) -> Vec<T> {
    match op {
        PolyOp::Add => add_padded(a, b),
        PolyOp::Sub => sub_padded(a, b),
        PolyOp::Mul => {
            let at = trim_leading_zeros(a);
            let bt = trim_leading_zeros(b);
            convolve(&at, &bt)
        }
    }
}
