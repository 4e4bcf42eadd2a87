//! Error types for polynomial construction, arithmetic, and fitting.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate, together with its display formatting.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors are produced by eager validation before any
//!   storage is touched or any computation starts.
//! * **no_std**: `Display` is hand-rolled on `core::fmt`; `std::error::Error`
//!   is implemented only when the `std` feature is enabled.
//! * **Taxonomy**: Shape/dimensionality errors, value errors (invalid power or
//!   degree), and operand-policy errors (device residency, unsupported
//!   combinations) share one enum so callers match on a single type.
//!
//! ## Non-goals
//!
//! * Non-fatal fit conditions are not errors; see `engine::polyfit::FitWarning`.

use core::fmt;

// ============================================================================
// PolyError
// ============================================================================

/// Errors produced by polynomial construction, arithmetic, and fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    /// The sample array `x` (or a coefficient input that must be nonempty)
    /// is empty.
    EmptyInput,

    /// An input had more than one dimension where a scalar or 1-D sequence
    /// was required.
    TooManyDimensions {
        /// Number of dimensions of the offending input.
        ndim: usize,
    },

    /// `x` and `y` sample lengths disagree.
    MismatchedLengths {
        /// Number of sample points in `x`.
        x_len: usize,
        /// Number of rows in `y`.
        y_len: usize,
    },

    /// The weight vector length does not match the sample length.
    MismatchedWeights {
        /// Number of weights supplied.
        w_len: usize,
        /// Number of sample points in `x`.
        x_len: usize,
    },

    /// A coefficient write targeted a negative power.
    NegativePower {
        /// The offending power.
        power: isize,
    },

    /// The fit builder was finalized without a degree.
    MissingDegree,

    /// The requested fit degree is negative.
    NegativeDegree {
        /// The offending degree, truncated to an integer.
        degree: i64,
    },

    /// The requested fit degree is a float without an integral value.
    NonIntegralDegree {
        /// The offending degree.
        degree: f64,
    },

    /// The explicit singular-value cutoff ratio is negative or NaN.
    InvalidRcond {
        /// The offending cutoff, widened to f64.
        rcond: f64,
    },

    /// Covariance estimation was requested for a rank-deficient fit.
    RankDeficientCovariance {
        /// Effective rank of the design matrix.
        rank: usize,
        /// Number of coefficient terms (`deg + 1`).
        terms: usize,
    },

    /// The operation would require an implicit device-to-host transfer.
    ImplicitTransfer {
        /// Symbol of the operator that was attempted.
        op: &'static str,
    },

    /// The operand combination is not supported by any handler.
    UnsupportedOperands {
        /// Symbol of the operator that was attempted.
        op: &'static str,
    },

    /// A shape specification does not match the data it describes.
    InvalidShape {
        /// Number of elements the shape spans.
        size: usize,
        /// Number of elements actually provided.
        len: usize,
    },

    /// The least-squares backend failed to produce a solution.
    SolverFailure,
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::EmptyInput => write!(f, "Input arrays are empty"),
            PolyError::TooManyDimensions { ndim } => write!(
                f,
                "Too many dimensions: expected a scalar or 1-D input, got {}-D",
                ndim
            ),
            PolyError::MismatchedLengths { x_len, y_len } => write!(
                f,
                "Length mismatch: x has {} points, y has {}",
                x_len, y_len
            ),
            PolyError::MismatchedWeights { w_len, x_len } => write!(
                f,
                "Weight mismatch: w has {} entries, x has {}",
                w_len, x_len
            ),
            PolyError::NegativePower { power } => write!(
                f,
                "Invalid power: {} (coefficient powers must be non-negative)",
                power
            ),
            PolyError::MissingDegree => {
                write!(f, "Missing required parameter: degree")
            }
            PolyError::NegativeDegree { degree } => {
                write!(f, "Invalid degree: {} (must be non-negative)", degree)
            }
            PolyError::NonIntegralDegree { degree } => {
                write!(f, "Invalid degree: {} (must have an integral value)", degree)
            }
            PolyError::InvalidRcond { rcond } => {
                write!(f, "Invalid rcond: {} (must be non-negative)", rcond)
            }
            PolyError::RankDeficientCovariance { rank, terms } => write!(
                f,
                "Covariance is unavailable for a rank-deficient fit: rank {} < {} terms",
                rank, terms
            ),
            PolyError::ImplicitTransfer { op } => write!(
                f,
                "Operator '{}' would require an implicit device-to-host transfer; \
                 materialize the device array explicitly first",
                op
            ),
            PolyError::UnsupportedOperands { op } => {
                write!(f, "Unsupported operand combination for '{}'", op)
            }
            PolyError::InvalidShape { size, len } => write!(
                f,
                "Shape mismatch: shape spans {} elements, data holds {}",
                size, len
            ),
            PolyError::SolverFailure => write!(f, "Least-squares solver failed to converge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolyError {}
