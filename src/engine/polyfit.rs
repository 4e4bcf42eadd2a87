//! The least-squares polynomial fitting pipeline.
//!
//! ## Purpose
//!
//! This module runs the single-shot fit: Vandermonde design matrix, optional
//! row weighting, column equilibration, SVD minimum-norm solve with an rcond
//! cutoff, and the optional diagnostics or covariance output modes.
//!
//! ## Design notes
//!
//! * **Single-shot**: no state machine; one call validates, solves, and
//!   assembles the result.
//! * **Row weighting vs column equilibration**: weights scale rows of both
//!   sides of the system (never a normal-equation reformulation); column
//!   equilibration to unit 2-norm conditions the solve and is undone on the
//!   returned coefficients, independently of the row weights.
//! * **Warnings are data**: rank deficiency and insufficient degrees of
//!   freedom do not abort the fit (unless covariance was requested on a
//!   rank-deficient system); they are reported on the result.
//! * **Output precedence**: when both diagnostics and covariance are
//!   requested, diagnostics win and the covariance request is ignored.
//!
//! ## Key concepts
//!
//! * **rcond**: singular values at or below `rcond * s_max` are treated as
//!   zero. The default is `n * epsilon` for the working dtype.
//! * **Covariance scaling**: the `inv(VᵗV)`-based matrix is multiplied by the
//!   reduced chi-square `resid / (n - deg - 1)` unless unscaled mode is
//!   selected or there are no residual degrees of freedom (then the factor is
//!   1 and a warning is recorded).
//!
//! ## Invariants
//!
//! * All validation precedes any allocation or computation.
//! * Coefficient vectors always have `degree + 1` entries, highest degree
//!   first, regardless of rank.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLstsq;
use crate::math::vandermonde::{column_norms, scale_columns, vandermonde};
use crate::primitives::errors::PolyError;

// ============================================================================
// Configuration Types
// ============================================================================

/// Requested polynomial degree, as an integer or an integral-valued float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degree {
    /// Degree given as an integer.
    Int(i64),
    /// Degree given as a float; must have an integral value.
    Float(f64),
}

impl From<usize> for Degree {
    fn from(d: usize) -> Self {
        Degree::Int(d as i64)
    }
}

impl From<i32> for Degree {
    fn from(d: i32) -> Self {
        Degree::Int(d as i64)
    }
}

impl From<i64> for Degree {
    fn from(d: i64) -> Self {
        Degree::Int(d)
    }
}

impl From<f64> for Degree {
    fn from(d: f64) -> Self {
        Degree::Float(d)
    }
}

impl From<f32> for Degree {
    fn from(d: f32) -> Self {
        Degree::Float(d as f64)
    }
}

/// Covariance scaling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CovMode {
    /// Scale by the reduced chi-square `resid / (n - deg - 1)`.
    Scaled,
    /// Return the raw `inv(VᵗV)`-based covariance without chi-square scaling.
    Unscaled,
}

/// Validated fit configuration, assembled by the API builder.
#[derive(Debug, Clone)]
pub struct FitConfig<T> {
    /// Polynomial degree to fit.
    pub degree: usize,
    /// Explicit singular-value cutoff ratio; `None` selects the default.
    pub rcond: Option<T>,
    /// Per-sample weights applied by row scaling.
    pub weights: Option<Vec<T>>,
    /// Attach solver diagnostics to the result.
    pub full: bool,
    /// Attach covariance matrices to the result.
    pub cov: Option<CovMode>,
}

// ============================================================================
// Output Types
// ============================================================================

/// Non-fatal conditions encountered during a fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitWarning {
    /// The effective rank of the design matrix is below the number of
    /// coefficient terms; the fit is poorly conditioned.
    RankDeficient {
        /// Effective rank under the rcond cutoff.
        rank: usize,
        /// Number of coefficient terms (`deg + 1`).
        terms: usize,
    },
    /// Too few residual degrees of freedom to scale the covariance matrix;
    /// the scaling factor fell back to 1.
    InsufficientDegreesOfFreedom,
}

/// Solver diagnostics attached to a full-mode fit.
#[derive(Debug, Clone)]
pub struct FitDiagnostics<T> {
    /// Residual sum of squares, one entry per y column.
    pub residuals: Vec<T>,
    /// Effective rank of the equilibrated design matrix.
    pub rank: usize,
    /// Singular values of the equilibrated design matrix, descending.
    pub singular_values: Vec<T>,
    /// The rcond cutoff ratio actually used.
    pub rcond: T,
}

/// Result of a polynomial fit.
#[derive(Debug, Clone)]
pub struct FitResult<T> {
    /// Coefficient vectors, one per y column, highest degree first.
    pub coefficients: Vec<Vec<T>>,
    /// Solver diagnostics, present in full mode.
    pub diagnostics: Option<FitDiagnostics<T>>,
    /// Covariance matrices (column-major, `(deg+1) x (deg+1)`), one per
    /// y column, present in covariance mode.
    pub covariance: Option<Vec<Vec<T>>>,
    /// Non-fatal conditions encountered during the fit.
    pub warnings: Vec<FitWarning>,
}

// ============================================================================
// Fitting Pipeline
// ============================================================================

/// Fit polynomials of `config.degree` to `ncols` columns of observations.
///
/// `y` is column-major with `x.len()` rows. For a single observation vector
/// pass `ncols == 1`.
pub fn fit_polynomial<T: FloatLstsq>(
    x: &[T],
    y: &[T],
    ncols: usize,
    config: &FitConfig<T>,
) -> Result<FitResult<T>, PolyError> {
    let n = x.len();
    let terms = config.degree + 1;

    // Validation, before any allocation.
    Validator::check_samples(x)?;
    if ncols == 0 || y.len() % ncols != 0 {
        return Err(PolyError::MismatchedLengths {
            x_len: n,
            y_len: if ncols == 0 { 0 } else { y.len() / ncols },
        });
    }
    Validator::check_lengths(n, y.len() / ncols)?;
    if let Some(w) = &config.weights {
        Validator::check_weights(w.len(), n)?;
    }

    // Design matrix, descending powers.
    let mut lhs = vandermonde(x, config.degree);
    let mut rhs = y.to_vec();

    // Row weighting of both sides.
    if let Some(w) = &config.weights {
        for j in 0..terms {
            for (i, &wi) in w.iter().enumerate() {
                lhs[j * n + i] = lhs[j * n + i] * wi;
            }
        }
        for c in 0..ncols {
            for (i, &wi) in w.iter().enumerate() {
                rhs[c * n + i] = rhs[c * n + i] * wi;
            }
        }
    }

    // Column equilibration to unit 2-norm.
    let scale = column_norms(&lhs, n, terms);
    scale_columns(&mut lhs, n, &scale);

    // Cutoff ratio for treating singular values as zero.
    let rcond = match config.rcond {
        Some(r) => r,
        None => T::from(n).ok_or(PolyError::SolverFailure)? * T::epsilon(),
    };

    let outcome = T::lstsq(&lhs, n, terms, &rhs, ncols, rcond).ok_or(PolyError::SolverFailure)?;

    // Full mode takes precedence over covariance when both were requested.
    let cov_mode = if config.full { None } else { config.cov };

    let mut warnings = Vec::new();
    if outcome.rank < terms {
        if cov_mode.is_some() {
            return Err(PolyError::RankDeficientCovariance {
                rank: outcome.rank,
                terms,
            });
        }
        warnings.push(FitWarning::RankDeficient {
            rank: outcome.rank,
            terms,
        });
    }

    // Residual sums of squares of the equilibrated, weighted system. Needed
    // for full mode and for the scaled covariance factor.
    let residuals: Vec<T> = (0..ncols)
        .map(|c| {
            (0..n)
                .map(|i| {
                    let predicted = (0..terms).fold(T::zero(), |acc, j| {
                        acc + lhs[j * n + i] * outcome.solution[c * terms + j]
                    });
                    let r = predicted - rhs[c * n + i];
                    r * r
                })
                .fold(T::zero(), |acc, r2| acc + r2)
        })
        .collect();

    // Undo the column equilibration on the returned coefficients.
    let coefficients: Vec<Vec<T>> = (0..ncols)
        .map(|c| {
            (0..terms)
                .map(|j| outcome.solution[c * terms + j] / scale[j])
                .collect()
        })
        .collect();

    let diagnostics = if config.full {
        Some(FitDiagnostics {
            residuals: residuals.clone(),
            rank: outcome.rank,
            singular_values: outcome.singular_values.clone(),
            rcond,
        })
    } else {
        None
    };

    let covariance = match cov_mode {
        Some(mode) => Some(covariance_matrices(
            &lhs,
            n,
            terms,
            &scale,
            &residuals,
            mode,
            &mut warnings,
        )?),
        None => None,
    };

    Ok(FitResult {
        coefficients,
        diagnostics,
        covariance,
        warnings,
    })
}

/// Covariance matrices for each y column.
///
/// Computed as `inv(VᵗV)` of the equilibrated design, divided by the outer
/// product of the column scales, then multiplied by the per-column scaling
/// factor.
fn covariance_matrices<T: FloatLstsq>(
    lhs: &[T],
    n: usize,
    terms: usize,
    scale: &[T],
    residuals: &[T],
    mode: CovMode,
    warnings: &mut Vec<FitWarning>,
) -> Result<Vec<Vec<T>>, PolyError> {
    // Normal matrix of the equilibrated design, column-major.
    let mut normal = vec![T::zero(); terms * terms];
    for j2 in 0..terms {
        for j1 in 0..terms {
            let dot = (0..n).fold(T::zero(), |acc, i| {
                acc + lhs[j1 * n + i] * lhs[j2 * n + i]
            });
            normal[j2 * terms + j1] = dot;
        }
    }

    let mut base = T::invert_normal(&normal, terms).ok_or(PolyError::SolverFailure)?;

    // Undo the equilibration: divide by the outer product of the scales.
    for j2 in 0..terms {
        for j1 in 0..terms {
            base[j2 * terms + j1] = base[j2 * terms + j1] / (scale[j1] * scale[j2]);
        }
    }

    let dof_scaled = mode == CovMode::Scaled;
    if dof_scaled && n <= terms {
        // No residual degrees of freedom: fall back to an unscaled factor.
        warnings.push(FitWarning::InsufficientDegreesOfFreedom);
    }

    let matrices = residuals
        .iter()
        .map(|&resid| {
            let fac = if dof_scaled && n > terms {
                resid / (T::from(n - terms).unwrap_or_else(T::one))
            } else {
                T::one()
            };
            base.iter().map(|&v| v * fac).collect()
        })
        .collect();

    Ok(matrices)
}
