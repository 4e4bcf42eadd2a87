//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical kernels behind polynomial
//! arithmetic and fitting:
//! - Leading-zero trimming and right-aligned padding
//! - Discrete convolution
//! - Vandermonde design matrices and column equilibration
//! - The nalgebra-backed minimum-norm least-squares solver
//!
//! These are reusable building blocks with no polynomial-value or
//! fitting-pipeline logic.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Leading-zero trimming and right-aligned padding of coefficient sequences.
pub mod trim;

/// Discrete (full) convolution of coefficient sequences.
pub mod convolve;

/// Vandermonde design matrix construction and column norms.
pub mod vandermonde;

/// Linear algebra backend abstraction (SVD least squares, normal-matrix inverse).
pub mod linalg;
