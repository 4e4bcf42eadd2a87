//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer runs the least-squares fitting pipeline:
//! - Eager validation of samples, weights, and the requested degree
//! - The single-shot weighted, column-equilibrated SVD fit with its
//!   diagnostics and covariance output modes
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Eager input validation for the fitting pipeline.
pub mod validator;

/// The least-squares polynomial fitting pipeline.
pub mod polyfit;
