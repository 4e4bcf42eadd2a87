//! # poly1d-rs — 1-D polynomials and least-squares fitting for Rust
//!
//! A small, self-contained numerics crate providing a trimmed, highest-degree-first
//! [`Polynomial`](crate::prelude::Polynomial) value type, free arithmetic routines
//! (`polyadd` / `polysub` / `polymul`) over coefficient sequences, and a weighted,
//! SVD-based least-squares [`polyfit`](crate::prelude::polyfit) with optional
//! diagnostics and covariance estimation.
//!
//! ## What this crate does
//!
//! A 1-D polynomial is stored as its coefficient sequence, highest degree first,
//! with leading zeros trimmed at construction (the constant term is always
//! retained). Reads outside the stored range return zero; writes to powers
//! beyond the current order grow the owned coefficient buffer. Fitting builds a
//! descending-power Vandermonde design matrix, optionally row-weights it,
//! equilibrates its columns to unit 2-norm, and solves the minimum-norm
//! least-squares problem by singular value decomposition with an `rcond`
//! rank-truncation cutoff.
//!
//! **Key properties:**
//! - Coefficient storage is always owned, never aliased with caller buffers
//! - Leading-zero trimming happens at construction, not on reads
//! - Permissive indexed reads, strict indexed writes (negative powers rejected)
//! - Mixed-dtype arithmetic through a compile-time numeric promotion lattice
//! - Device-resident arrays never combine implicitly with host-side values
//!
//! ## Quick Start
//!
//! ### Polynomial arithmetic
//!
//! ```rust
//! use poly1d_rs::prelude::*;
//!
//! // x^2 + 2x + 3, with the default display variable "x"
//! let p = Polynomial::new(&[1.0, 2.0, 3.0][..], None)?;
//! assert_eq!(p.order(), 2);
//! assert_eq!(p.get(0), 3.0);   // constant term
//! assert_eq!(p.get(100), 0.0); // implicit zero beyond the stored range
//!
//! let one = Polynomial::new(&[1.0][..], None)?;
//! assert_eq!(&p * &one, p);
//! assert_eq!(format!("{}", p), "x^2 + 2*x + 3");
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ### Free routines
//!
//! ```rust
//! use poly1d_rs::prelude::*;
//!
//! // Plain coefficient sequences in, plain coefficient sequence out.
//! let sum = polyadd(&[1.0, 2.0][..], &[10.0, 20.0, 30.0][..])?;
//! assert_eq!(sum.coeffs(), &[10.0, 21.0, 32.0]);
//!
//! // Mixed dtypes promote: i32 x f32 -> f64.
//! let prod = polymul(&[2i32][..], &[1.5f32, 0.5][..])?;
//! assert_eq!(prod.coeffs(), &[3.0f64, 1.0]);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ### Least-squares fitting
//!
//! ```rust
//! use poly1d_rs::prelude::*;
//!
//! let x: [f64; 3] = [0.0, 1.0, 2.0];
//! let y: [f64; 3] = [1.0, 3.0, 5.0];
//!
//! // Simple path: coefficients only, highest degree first.
//! let coeffs = polyfit(&x, &y, 1)?;
//! assert!((coeffs[0] - 2.0).abs() < 1e-8); // slope
//! assert!((coeffs[1] - 1.0).abs() < 1e-8); // intercept
//!
//! // Builder path: diagnostics, weights, rcond, covariance.
//! let model = Polyfit::new().degree(1).full().build()?;
//! let result = model.fit(&x, &y)?;
//! let diag = result.diagnostics.as_ref().unwrap();
//! assert_eq!(diag.rank, 2);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! All fallible operations return `Result<_, PolyError>`; the `?` operator is
//! idiomatic. Non-fatal fit conditions (a rank-deficient design matrix, too few
//! degrees of freedom to scale a covariance matrix) are reported as
//! [`FitWarning`](crate::prelude::FitWarning) values on the fit result rather
//! than as errors: the fit still completes and returns coefficients.
//!
//! ```rust
//! use poly1d_rs::prelude::*;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // 7 parameters from 5 points: rank-deficient, but still a fit.
//! let result = Polyfit::new().degree(6).build()?.fit(&x, &y)?;
//! assert_eq!(result.coefficients[0].len(), 7);
//! assert!(!result.warnings.is_empty());
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ## Host and device residency
//!
//! The crate models host-resident and device-resident arrays as distinct types
//! ([`HostArray`](crate::prelude::HostArray) and
//! [`DeviceArray`](crate::prelude::DeviceArray)). A device array never takes
//! part in polynomial arithmetic implicitly: combining one with a `Polynomial`
//! through the operator dispatcher fails fast with
//! `PolyError::ImplicitTransfer`, because producing a host-side result would
//! require a hidden blocking device-to-host copy. The only way across the
//! boundary is the explicit `DeviceArray::to_host` /
//! `Polynomial::from_device` path.
//!
//! ## Operator dispatch and capability priority
//!
//! Binary operators involving user-defined operand types are resolved through
//! an explicit priority protocol rather than a reflected-operator convention:
//! each operand exposes a comparable priority value, the dispatcher invokes the
//! higher-priority side's handler first, and the polynomial side declines. See
//! the dispatch items in the [`prelude`].
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to remove
//! the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! poly1d-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - scalars, arrays, and errors.
//
// Contains the `Coefficient` scalar trait and its compile-time promotion
// lattice, the host/device array containers, and the crate error type.
mod primitives;

// Layer 2: Math - pure numerical kernels.
//
// Contains leading-zero trimming and padding, discrete convolution, the
// Vandermonde design matrix, and the nalgebra-backed least-squares solver.
mod math;

// Layer 3: Algorithms - polynomial values and routines.
//
// Contains the `Polynomial` value type, the `polyadd`/`polysub`/`polymul`
// free routines, and the priority-based operator dispatcher.
mod algorithms;

// Layer 4: Engine - fit validation and the polyfit pipeline.
//
// Contains eager input validation and the single-shot weighted/equilibrated
// least-squares fitting computation with its output modes.
mod engine;

// High-level API for polynomial fitting.
//
// Provides the `Polyfit` builder and the crate's public re-export surface.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard poly1d prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use poly1d_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        combine, polyadd, polyfit, polymul, polysub, Coefficient, Combined, CovMode, Degree,
        DeviceArray, FitDiagnostics, FitResult, FitWarning, HostArray, Operand, PolyError, PolyOp,
        PolyOperand, PolyValue, PolyfitBuilder as Polyfit, PolyfitModel, Polynomial, Promote,
        UserOperand, POLYNOMIAL_PRIORITY,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math kernels.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal polynomial algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal fitting engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
