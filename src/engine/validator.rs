//! Eager input validation for the fitting pipeline.
//!
//! ## Purpose
//!
//! This module checks sample arrays, weights, and the requested degree before
//! the fit touches any storage or starts any computation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first error encountered.
//! * **Efficiency**: checks are ordered from cheap to expensive.
//! * **Degree forms**: the degree may arrive as an integer or as a float; a
//!   float with an integral value truncates, a non-integral float is a type
//!   error, and a negative degree of either form is a value error.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the fit itself.

// External dependencies
use core::cmp::Ordering;
use num_traits::ToPrimitive;

// Internal dependencies
use crate::engine::polyfit::Degree;
use crate::primitives::errors::PolyError;
use crate::primitives::scalar::Coefficient;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and input data.
///
/// Provides static methods returning `Result<_, PolyError>`; each fails fast
/// on the first violation.
pub struct Validator;

impl Validator {
    /// Validate the sample array `x`.
    pub fn check_samples<T: Coefficient>(x: &[T]) -> Result<(), PolyError> {
        if x.is_empty() {
            return Err(PolyError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that `y` has one row per sample point.
    pub fn check_lengths(x_len: usize, y_len: usize) -> Result<(), PolyError> {
        if x_len != y_len {
            return Err(PolyError::MismatchedLengths { x_len, y_len });
        }
        Ok(())
    }

    /// Validate that the weight vector has one entry per sample point.
    pub fn check_weights(w_len: usize, x_len: usize) -> Result<(), PolyError> {
        if w_len != x_len {
            return Err(PolyError::MismatchedWeights { w_len, x_len });
        }
        Ok(())
    }

    /// Validate an explicit singular-value cutoff ratio.
    ///
    /// The cutoff scales `s_max` into a threshold, so it must be a
    /// non-negative number; a negative or NaN value is rejected before it
    /// reaches the solver.
    pub fn check_rcond<T: Coefficient>(rcond: T) -> Result<(), PolyError> {
        match rcond.partial_cmp(&T::zero()) {
            Some(Ordering::Less) | None => Err(PolyError::InvalidRcond {
                rcond: rcond.to_f64().unwrap_or(f64::NAN),
            }),
            _ => Ok(()),
        }
    }

    /// Validate the requested degree and reduce it to a term count basis.
    ///
    /// Integrality is checked before sign so that a value like `-1.5` reports
    /// the type error rather than the value error.
    pub fn check_degree(degree: Degree) -> Result<usize, PolyError> {
        match degree {
            Degree::Int(d) => {
                if d < 0 {
                    return Err(PolyError::NegativeDegree { degree: d });
                }
                Ok(d as usize)
            }
            Degree::Float(d) => {
                if d.fract() != 0.0 {
                    return Err(PolyError::NonIntegralDegree { degree: d });
                }
                if d < 0.0 {
                    return Err(PolyError::NegativeDegree { degree: d as i64 });
                }
                Ok(d as usize)
            }
        }
    }
}
