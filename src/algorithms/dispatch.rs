//! Priority-based operator dispatch and the residency guard.
//!
//! ## Purpose
//!
//! This module resolves binary operators over heterogeneous operands: plain
//! scalars, host arrays, device arrays, polynomials, and user-defined types.
//! It implements the capability-priority protocol and the policy that device
//! residency is never crossed implicitly.
//!
//! ## Design notes
//!
//! * **Explicit priority protocol**: instead of a reflected-operator
//!   convention, every user-defined operand exposes a comparable priority
//!   value. The dispatcher compares it against [`POLYNOMIAL_PRIORITY`] and
//!   hands the operator to the higher side; the polynomial side declines by
//!   reporting [`Combined::Deferred`].
//! * **Residency guard**: a device-resident operand on either side fails fast
//!   with `ImplicitTransfer`. Producing a host-side result from device data
//!   would require a hidden blocking copy; the caller must materialize the
//!   array explicitly instead.
//! * **Result form**: polynomial-with-scalar (or 0-d host) combinations keep
//!   polynomial semantics; a multi-element host array on either side
//!   demotes the result to a plain coefficient array.
//!
//! ## Invariants
//!
//! * No path in this module copies device data to the host.
//! * A custom operand with priority less than or equal to
//!   [`POLYNOMIAL_PRIORITY`] is never invoked.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::ToString;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::polynomial::{resolve_variable, Polynomial};
use crate::algorithms::routines::combine_coeffs;
use crate::primitives::array::{DeviceArray, HostArray};
use crate::primitives::errors::PolyError;
use crate::primitives::scalar::Coefficient;

// ============================================================================
// Operator Selector
// ============================================================================

/// Binary operator selector shared by the dispatcher and operand handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
}

impl PolyOp {
    /// The operator's display symbol, used in error reports.
    pub fn symbol(self) -> &'static str {
        match self {
            PolyOp::Add => "+",
            PolyOp::Sub => "-",
            PolyOp::Mul => "*",
        }
    }
}

// ============================================================================
// Capability Priority
// ============================================================================

/// Capability priority of the built-in polynomial handlers.
pub const POLYNOMIAL_PRIORITY: i64 = 100;

/// A user-defined operand participating in operator dispatch.
///
/// Types implementing this trait declare a capability priority; when it is
/// strictly greater than [`POLYNOMIAL_PRIORITY`] the dispatcher invokes
/// [`UserOperand::try_combine`] and the polynomial side declines.
pub trait UserOperand<T: Coefficient> {
    /// The operand's capability priority.
    fn priority(&self) -> i64;

    /// Handle `op` against a polynomial operand.
    ///
    /// `reflected` is true when this operand sits on the right-hand side.
    /// Returning `false` declines the operation.
    fn try_combine(&self, other: &Polynomial<T>, op: PolyOp, reflected: bool) -> bool;
}

// ============================================================================
// Operands and Results
// ============================================================================

/// One side of a dispatched binary operation.
pub enum Operand<'a, T: Coefficient> {
    /// A plain host scalar.
    Scalar(T),
    /// A host-resident array.
    Host(&'a HostArray<T>),
    /// A device-resident array.
    Device(&'a DeviceArray<T>),
    /// A polynomial value.
    Polynomial(&'a Polynomial<T>),
    /// A user-defined operand with its own capability priority.
    Custom(&'a dyn UserOperand<T>),
}

/// Result of a dispatched binary operation.
#[derive(Debug, Clone)]
pub enum Combined<T: Coefficient> {
    /// The result keeps polynomial semantics.
    Polynomial(Polynomial<T>),
    /// The result is a plain host-side coefficient array.
    Host(Vec<T>),
    /// A higher-priority custom operand handled the operation; the
    /// polynomial side declined.
    Deferred,
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Resolve a binary operator over two operands.
///
/// Dispatch rules, in order:
///
/// 1. A custom operand with priority strictly above [`POLYNOMIAL_PRIORITY`]
///    gets the operator (reflected when it sits on the right); success is
///    reported as [`Combined::Deferred`]. Any other custom combination is
///    `UnsupportedOperands`.
/// 2. A device array on either side is `ImplicitTransfer`.
/// 3. Polynomial with polynomial, scalar, or 0-d host array keeps polynomial
///    semantics.
/// 4. Any combination involving a multi-element host array produces a plain
///    coefficient array.
pub fn combine<T: Coefficient>(
    lhs: Operand<'_, T>,
    rhs: Operand<'_, T>,
    op: PolyOp,
) -> Result<Combined<T>, PolyError> {
    // Variants stay path-qualified so the `Polynomial` type name remains
    // usable inside the arms.
    match (lhs, rhs) {
        // Custom operands: priority decides, the polynomial side declines.
        (Operand::Custom(c), Operand::Polynomial(p)) => dispatch_custom(c, p, op, false),
        (Operand::Polynomial(p), Operand::Custom(c)) => dispatch_custom(c, p, op, true),
        (Operand::Custom(_), _) | (_, Operand::Custom(_)) => {
            Err(PolyError::UnsupportedOperands { op: op.symbol() })
        }

        // Device residency is never crossed implicitly.
        (Operand::Device(_), _) | (_, Operand::Device(_)) => Err(PolyError::ImplicitTransfer {
            op: op.symbol(),
        }),

        (Operand::Polynomial(a), Operand::Polynomial(b)) => {
            let variable = resolve_variable(Some(a.variable()), Some(b.variable()));
            Ok(Combined::Polynomial(Polynomial::from_parts(
                combine_coeffs(a.coeffs(), b.coeffs(), op),
                variable,
            )))
        }

        (Operand::Polynomial(p), Operand::Scalar(s)) => Ok(poly_with_coeffs(p, &[s], op, false)),
        (Operand::Scalar(s), Operand::Polynomial(p)) => Ok(poly_with_coeffs(p, &[s], op, true)),

        (Operand::Polynomial(p), Operand::Host(h)) => {
            check_host(h)?;
            if h.ndim() == 0 {
                Ok(poly_with_coeffs(p, h.data(), op, false))
            } else {
                Ok(Combined::Host(combine_coeffs(p.coeffs(), h.data(), op)))
            }
        }
        (Operand::Host(h), Operand::Polynomial(p)) => {
            check_host(h)?;
            if h.ndim() == 0 {
                Ok(poly_with_coeffs(p, h.data(), op, true))
            } else {
                Ok(Combined::Host(combine_coeffs(h.data(), p.coeffs(), op)))
            }
        }

        // Array-only combinations stay plain arrays.
        (Operand::Scalar(a), Operand::Scalar(b)) => {
            Ok(Combined::Host(combine_coeffs(&[a], &[b], op)))
        }
        (Operand::Scalar(a), Operand::Host(h)) => {
            check_host(h)?;
            Ok(Combined::Host(combine_coeffs(&[a], h.data(), op)))
        }
        (Operand::Host(h), Operand::Scalar(b)) => {
            check_host(h)?;
            Ok(Combined::Host(combine_coeffs(h.data(), &[b], op)))
        }
        (Operand::Host(a), Operand::Host(b)) => {
            check_host(a)?;
            check_host(b)?;
            Ok(Combined::Host(combine_coeffs(a.data(), b.data(), op)))
        }
    }
}

/// Invoke a higher-priority custom operand's handler.
fn dispatch_custom<T: Coefficient>(
    custom: &dyn UserOperand<T>,
    poly: &Polynomial<T>,
    op: PolyOp,
    reflected: bool,
) -> Result<Combined<T>, PolyError> {
    if custom.priority() > POLYNOMIAL_PRIORITY && custom.try_combine(poly, op, reflected) {
        Ok(Combined::Deferred)
    } else {
        Err(PolyError::UnsupportedOperands { op: op.symbol() })
    }
}

/// Combine a polynomial with a variable-less coefficient operand.
///
/// The scalar side carries no variable, so the polynomial's symbol survives
/// regardless of operand order; `reflected` only flips the operand order for
/// the non-commutative case.
fn poly_with_coeffs<T: Coefficient>(
    poly: &Polynomial<T>,
    other: &[T],
    op: PolyOp,
    reflected: bool,
) -> Combined<T> {
    let raw = if reflected {
        combine_coeffs(other, poly.coeffs(), op)
    } else {
        combine_coeffs(poly.coeffs(), other, op)
    };
    Combined::Polynomial(Polynomial::from_parts(raw, poly.variable().to_string()))
}

/// Shape check for host-array operands.
fn check_host<T: Coefficient>(h: &HostArray<T>) -> Result<(), PolyError> {
    if h.ndim() >= 2 {
        return Err(PolyError::TooManyDimensions { ndim: h.ndim() });
    }
    Ok(())
}
