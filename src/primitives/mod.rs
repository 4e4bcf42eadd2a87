//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used throughout the crate:
//! - The crate error type (`PolyError`)
//! - The `Coefficient` scalar trait and the compile-time `Promote` lattice
//! - Shape-aware host and device array containers
//!
//! These carry no polynomial-specific logic; everything above builds on them.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate error type.
pub mod errors;

/// Coefficient scalar trait and numeric promotion lattice.
pub mod scalar;

/// Host- and device-resident array containers.
pub mod array;
