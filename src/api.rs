//! High-level API for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the
//! [`PolyfitBuilder`] fluent configuration type, the [`PolyfitModel`] it
//! produces, the `polyfit` convenience function, and the crate's public
//! re-export surface.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with sensible defaults for every optional
//!   parameter; only the degree is required.
//! * **Validated**: parameters are validated when `.build()` is called, never
//!   during configuration.
//! * **Type-Safe**: generic over the floating dtypes supported by the linear
//!   algebra backend.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyfitBuilder`] via `Polyfit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.weights()`, `.rcond()`,
//!    `.full()`, `.covariance()`).
//! 3. Call `.build()` to validate and obtain a [`PolyfitModel`], then
//!    `.fit(&x, &y)` or `.fit_matrix(&x, &y, ncols)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::polyfit::{fit_polynomial, FitConfig};
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLstsq;

// Publicly re-exported types
pub use crate::algorithms::dispatch::{
    combine, Combined, Operand, PolyOp, UserOperand, POLYNOMIAL_PRIORITY,
};
pub use crate::algorithms::polynomial::Polynomial;
pub use crate::algorithms::routines::{polyadd, polymul, polysub, PolyOperand, PolyValue};
pub use crate::engine::polyfit::{CovMode, Degree, FitDiagnostics, FitResult, FitWarning};
pub use crate::primitives::array::{DeviceArray, HostArray};
pub use crate::primitives::errors::PolyError;
pub use crate::primitives::scalar::{Coefficient, Promote};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a polynomial fit.
#[derive(Debug, Clone)]
pub struct PolyfitBuilder<T: FloatLstsq> {
    /// Polynomial degree to fit (required).
    pub degree: Option<Degree>,

    /// Singular-value cutoff ratio (default: `n * epsilon`).
    pub rcond: Option<T>,

    /// Per-sample weights applied by row scaling.
    pub weights: Option<Vec<T>>,

    /// Attach solver diagnostics to the result.
    pub full: bool,

    /// Attach covariance matrices to the result.
    pub cov: Option<CovMode>,
}

impl<T: FloatLstsq> Default for PolyfitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLstsq> PolyfitBuilder<T> {
    /// Create a builder with no parameters set.
    pub fn new() -> Self {
        Self {
            degree: None,
            rcond: None,
            weights: None,
            full: false,
            cov: None,
        }
    }

    /// Set the polynomial degree (integer, or float with an integral value).
    pub fn degree(mut self, degree: impl Into<Degree>) -> Self {
        self.degree = Some(degree.into());
        self
    }

    /// Override the default singular-value cutoff ratio.
    ///
    /// The value must be non-negative; `build()` rejects anything else with
    /// [`PolyError::InvalidRcond`].
    pub fn rcond(mut self, rcond: T) -> Self {
        self.rcond = Some(rcond);
        self
    }

    /// Supply per-sample weights; each weight scales one row of the system.
    pub fn weights(mut self, weights: &[T]) -> Self {
        self.weights = Some(weights.to_vec());
        self
    }

    /// Request solver diagnostics (residuals, rank, singular values, rcond).
    ///
    /// Diagnostics take precedence over a covariance request.
    pub fn full(mut self) -> Self {
        self.full = true;
        self
    }

    /// Request covariance matrices with the given scaling mode.
    pub fn covariance(mut self, mode: CovMode) -> Self {
        self.cov = Some(mode);
        self
    }

    /// Validate the configuration and produce a fit model.
    pub fn build(self) -> Result<PolyfitModel<T>, PolyError> {
        let degree = Validator::check_degree(self.degree.ok_or(PolyError::MissingDegree)?)?;
        if let Some(rcond) = self.rcond {
            Validator::check_rcond(rcond)?;
        }

        Ok(PolyfitModel {
            config: FitConfig {
                degree,
                rcond: self.rcond,
                weights: self.weights,
                full: self.full,
                cov: self.cov,
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated fit configuration ready to run.
#[derive(Debug, Clone)]
pub struct PolyfitModel<T: FloatLstsq> {
    config: FitConfig<T>,
}

impl<T: FloatLstsq> PolyfitModel<T> {
    /// Fit a single observation column.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, PolyError> {
        fit_polynomial(x, y, 1, &self.config)
    }

    /// Fit several observation columns given column-major `y` data with
    /// `x.len()` rows.
    pub fn fit_matrix(&self, x: &[T], y: &[T], ncols: usize) -> Result<FitResult<T>, PolyError> {
        fit_polynomial(x, y, ncols, &self.config)
    }

    /// The configured polynomial degree.
    pub fn degree(&self) -> usize {
        self.config.degree
    }
}

// ============================================================================
// Convenience Function
// ============================================================================

/// Fit a polynomial of `degree` to the samples and return its coefficients,
/// highest degree first.
///
/// Equivalent to building a default-configured model and extracting the
/// single coefficient vector; warnings and diagnostics are discarded.
pub fn polyfit<T: FloatLstsq>(x: &[T], y: &[T], degree: usize) -> Result<Vec<T>, PolyError> {
    let model = PolyfitBuilder::new().degree(degree).build()?;
    let mut result = model.fit(x, y)?;
    Ok(result.coefficients.remove(0))
}
