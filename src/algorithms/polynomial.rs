//! The 1-D polynomial value type.
//!
//! ## Purpose
//!
//! This module defines [`Polynomial`], an owned coefficient sequence (highest
//! degree first) paired with a display variable symbol, together with its
//! indexed accessors, arithmetic operators, equality, and pretty-printing.
//!
//! ## Design notes
//!
//! * **Copy-on-construct**: coefficient storage is always an owned `Vec`,
//!   never aliased with the caller's buffer. Mutating the source after
//!   construction does not affect the polynomial, and vice versa.
//! * **Trim at construction**: the leading-zero invariant is established when
//!   the value is built (and after arithmetic), never re-checked on reads.
//! * **Permissive reads, strict writes**: `get` returns 0 for any power
//!   outside the stored range, including negative powers; `set` rejects a
//!   negative power before touching storage and grows the buffer for powers
//!   beyond the current order.
//! * **Mixed-dtype operators**: binary operators accept a polynomial or plain
//!   scalar of a different coefficient dtype and resolve the result dtype
//!   through the `Promote` lattice at compile time.
//!
//! ## Invariants
//!
//! * `coeffs` is nonempty and carries no leading zeros beyond the constant
//!   term (the zero polynomial stores the single coefficient 0).
//! * `order() == coeffs.len() - 1` at all times; `set` can only increase it.
//!
//! ## Key concepts
//!
//! * **Variable rule**: a binary result takes the left operand's variable,
//!   unless the left side is a plain scalar (then the right's); two
//!   polynomials with different variables fall back to the default `"x"`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

// Internal dependencies
use crate::algorithms::dispatch::PolyOp;
use crate::algorithms::routines::{combine_coeffs, PolyOperand};
use crate::math::trim::trim_leading_zeros;
use crate::primitives::array::DeviceArray;
use crate::primitives::errors::PolyError;
use crate::primitives::scalar::{promote_slice_lhs, promote_slice_rhs, Coefficient, Promote};

/// Default display variable for polynomials.
pub(crate) const DEFAULT_VARIABLE: &str = "x";

// ============================================================================
// Polynomial
// ============================================================================

/// A 1-D polynomial: owned coefficients, highest degree first, plus a display
/// variable symbol.
#[derive(Debug, Clone)]
pub struct Polynomial<T: Coefficient> {
    coeffs: Vec<T>,
    variable: String,
}

impl<T: Coefficient> Polynomial<T> {
    /// Build a polynomial from a coefficient operand.
    ///
    /// Accepts scalars, slices, arrays, 0-d or 1-D [`HostArray`]s, and other
    /// polynomials (see [`PolyOperand`]). Leading zero coefficients are
    /// trimmed; an empty or all-zero operand yields the zero polynomial.
    ///
    /// When `data` is itself a polynomial its variable is copied; an explicit
    /// `variable` argument overrides the copied (or default) symbol.
    ///
    /// [`HostArray`]: crate::primitives::array::HostArray
    pub fn new<D>(data: D, variable: Option<&str>) -> Result<Self, PolyError>
    where
        D: PolyOperand<T>,
    {
        let ndim = data.ndim();
        if ndim >= 2 {
            return Err(PolyError::TooManyDimensions { ndim });
        }

        let variable = variable
            .or_else(|| data.variable())
            .unwrap_or(DEFAULT_VARIABLE)
            .to_string();
        let coeffs = trim_leading_zeros(&data.coefficients());

        Ok(Self { coeffs, variable })
    }

    /// Materialize a device-resident array as a polynomial.
    ///
    /// This is the explicit device-to-host path; the operator dispatcher
    /// never performs this transfer on its own.
    pub fn from_device(array: &DeviceArray<T>, variable: Option<&str>) -> Result<Self, PolyError> {
        Self::new(&array.to_host(), variable)
    }

    /// Crate-internal constructor from a raw coefficient vector.
    pub(crate) fn from_parts(coeffs: Vec<T>, variable: String) -> Self {
        Self {
            coeffs: trim_leading_zeros(&coeffs),
            variable,
        }
    }

    /// The trimmed coefficients, highest degree first.
    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// The display variable symbol.
    #[inline]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Polynomial order (degree): `coeffs().len() - 1`.
    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient for `power`, with implicit zeros outside the stored range.
    ///
    /// Any power outside `[0, order]`, including a negative one, reads as 0.
    pub fn get(&self, power: isize) -> T {
        if power < 0 {
            return T::zero();
        }
        let power = power as usize;
        if power > self.order() {
            return T::zero();
        }
        self.coeffs[self.order() - power]
    }

    /// Write the coefficient for `power`, growing the polynomial if needed.
    ///
    /// A negative power is rejected before any mutation. A power beyond the
    /// current order grows the buffer with zero-filled high-order slots, so
    /// the write increases the polynomial's order.
    pub fn set(&mut self, power: isize, value: T) -> Result<(), PolyError> {
        if power < 0 {
            return Err(PolyError::NegativePower { power });
        }
        let power = power as usize;
        if power > self.order() {
            let grow = power - self.order();
            let mut grown = vec![T::zero(); grow];
            grown.extend_from_slice(&self.coeffs);
            self.coeffs = grown;
        }
        let index = self.order() - power;
        self.coeffs[index] = value;
        Ok(())
    }

    /// In-place copy of another polynomial's coefficients and variable.
    pub fn assign(&mut self, other: &Polynomial<T>) {
        self.coeffs.clear();
        self.coeffs.extend_from_slice(&other.coeffs);
        self.variable.clear();
        self.variable.push_str(&other.variable);
    }

    // ========================================================================
    // Operator kernels
    // ========================================================================

    /// Binary operation with a scalar on the right side.
    fn scalar_rhs<S>(&self, rhs: S, op: PolyOp) -> Polynomial<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
        S: Coefficient,
    {
        let a = promote_slice_lhs::<T, S>(&self.coeffs);
        let b = [T::promote_rhs(rhs)];
        Polynomial::from_parts(combine_coeffs(&a, &b, op), self.variable.clone())
    }

    /// Binary operation with a scalar on the left side.
    ///
    /// The scalar carries no variable, so the result keeps the polynomial's.
    fn scalar_lhs<S>(&self, lhs: S, op: PolyOp) -> Polynomial<<S as Promote<T>>::Output>
    where
        S: Promote<T>,
    {
        let a = [S::promote_lhs(lhs)];
        let b = promote_slice_rhs::<S, T>(&self.coeffs);
        Polynomial::from_parts(combine_coeffs(&a, &b, op), self.variable.clone())
    }
}

/// Variable symbol of a binary result.
///
/// Left operand's symbol wins; a missing left symbol (plain scalar or array
/// operand) yields to the right's; two present but different symbols fall
/// back to the default.
pub(crate) fn resolve_variable(lhs: Option<&str>, rhs: Option<&str>) -> String {
    match (lhs, rhs) {
        (Some(l), Some(r)) if l == r => l.to_string(),
        (Some(_), Some(_)) => DEFAULT_VARIABLE.to_string(),
        (Some(l), None) => l.to_string(),
        (None, Some(r)) => r.to_string(),
        (None, None) => DEFAULT_VARIABLE.to_string(),
    }
}

// ============================================================================
// Equality
// ============================================================================

impl<T, U> PartialEq<Polynomial<U>> for Polynomial<T>
where
    T: Promote<U>,
    U: Coefficient,
{
    /// Trimmed coefficient sequences compared elementwise in the promoted
    /// dtype; the variable symbol is not part of equality.
    fn eq(&self, other: &Polynomial<U>) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(&a, &b)| T::promote_lhs(a) == T::promote_rhs(b))
    }
}

// ============================================================================
// Binary Operators
// ============================================================================

impl<'a, 'b, T, U> Add<&'b Polynomial<U>> for &'a Polynomial<T>
where
    T: Promote<U>,
    U: Coefficient,
{
    type Output = Polynomial<<T as Promote<U>>::Output>;

    fn add(self, rhs: &'b Polynomial<U>) -> Self::Output {
        poly_binary(self, rhs, PolyOp::Add)
    }
}

impl<'a, 'b, T, U> Sub<&'b Polynomial<U>> for &'a Polynomial<T>
where
    T: Promote<U>,
    U: Coefficient,
{
    type Output = Polynomial<<T as Promote<U>>::Output>;

    fn sub(self, rhs: &'b Polynomial<U>) -> Self::Output {
        poly_binary(self, rhs, PolyOp::Sub)
    }
}

impl<'a, 'b, T, U> Mul<&'b Polynomial<U>> for &'a Polynomial<T>
where
    T: Promote<U>,
    U: Coefficient,
{
    type Output = Polynomial<<T as Promote<U>>::Output>;

    fn mul(self, rhs: &'b Polynomial<U>) -> Self::Output {
        poly_binary(self, rhs, PolyOp::Mul)
    }
}

/// Shared polynomial-by-polynomial operator kernel.
fn poly_binary<T, U>(
    lhs: &Polynomial<T>,
    rhs: &Polynomial<U>,
    op: PolyOp,
) -> Polynomial<<T as Promote<U>>::Output>
where
    T: Promote<U>,
    U: Coefficient,
{
    let a = promote_slice_lhs::<T, U>(lhs.coeffs());
    let b = promote_slice_rhs::<T, U>(rhs.coeffs());
    let variable = resolve_variable(Some(lhs.variable()), Some(rhs.variable()));
    Polynomial::from_parts(combine_coeffs(&a, &b, op), variable)
}

impl<'a, T: Coefficient> Neg for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        // Negation cannot introduce leading zeros, so no re-trim is needed.
        Polynomial {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
            variable: self.variable.clone(),
        }
    }
}

// ============================================================================
// Scalar Operators
// ============================================================================

macro_rules! poly_scalar_ops {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl<'a, T> Add<$scalar> for &'a Polynomial<T>
            where
                T: Promote<$scalar>,
            {
                type Output = Polynomial<<T as Promote<$scalar>>::Output>;

                fn add(self, rhs: $scalar) -> Self::Output {
                    self.scalar_rhs(rhs, PolyOp::Add)
                }
            }

            impl<'a, T> Sub<$scalar> for &'a Polynomial<T>
            where
                T: Promote<$scalar>,
            {
                type Output = Polynomial<<T as Promote<$scalar>>::Output>;

                fn sub(self, rhs: $scalar) -> Self::Output {
                    self.scalar_rhs(rhs, PolyOp::Sub)
                }
            }

            impl<'a, T> Mul<$scalar> for &'a Polynomial<T>
            where
                T: Promote<$scalar>,
            {
                type Output = Polynomial<<T as Promote<$scalar>>::Output>;

                fn mul(self, rhs: $scalar) -> Self::Output {
                    self.scalar_rhs(rhs, PolyOp::Mul)
                }
            }

            impl<'a, T> Add<&'a Polynomial<T>> for $scalar
            where
                $scalar: Promote<T>,
                T: Coefficient,
            {
                type Output = Polynomial<<$scalar as Promote<T>>::Output>;

                fn add(self, rhs: &'a Polynomial<T>) -> Self::Output {
                    rhs.scalar_lhs(self, PolyOp::Add)
                }
            }

            impl<'a, T> Sub<&'a Polynomial<T>> for $scalar
            where
                $scalar: Promote<T>,
                T: Coefficient,
            {
                type Output = Polynomial<<$scalar as Promote<T>>::Output>;

                fn sub(self, rhs: &'a Polynomial<T>) -> Self::Output {
                    rhs.scalar_lhs(self, PolyOp::Sub)
                }
            }

            impl<'a, T> Mul<&'a Polynomial<T>> for $scalar
            where
                $scalar: Promote<T>,
                T: Coefficient,
            {
                type Output = Polynomial<<$scalar as Promote<T>>::Output>;

                fn mul(self, rhs: &'a Polynomial<T>) -> Self::Output {
                    rhs.scalar_lhs(self, PolyOp::Mul)
                }
            }
        )*
    };
}

poly_scalar_ops!(i32, i64, f32, f64);

// ============================================================================
// Display
// ============================================================================

impl<T: Coefficient> fmt::Display for Polynomial<T> {
    /// Conventional polynomial rendering: `3*x^2 + 2*x + 1`.
    ///
    /// Zero terms are omitted, `^1`/`^0` suffixes are dropped, unit
    /// coefficients of non-constant terms are elided, and the zero
    /// polynomial prints `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.order();
        let mut first = true;

        for (idx, &c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let power = order - idx;
            let negative = c < T::zero();
            let magnitude = c.abs();

            if first {
                if negative {
                    write!(f, "-")?;
                }
                first = false;
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let unit = magnitude == T::one();
            match power {
                0 => write!(f, "{}", magnitude)?,
                1 if unit => write!(f, "{}", self.variable)?,
                1 => write!(f, "{}*{}", magnitude, self.variable)?,
                p if unit => write!(f, "{}^{}", self.variable, p)?,
                p => write!(f, "{}*{}^{}", magnitude, self.variable, p)?,
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
