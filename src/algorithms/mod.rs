//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the polynomial semantics on top of the math kernels:
//! - The `Polynomial` value type (trimmed storage, indexed access, operators,
//!   display formatting)
//! - The `polyadd` / `polysub` / `polymul` free routines over arbitrary
//!   coefficient operands
//! - The capability-priority operator dispatcher and the host/device
//!   residency guard
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The 1-D polynomial value type.
pub mod polynomial;

/// Free arithmetic routines over coefficient operands.
pub mod routines;

/// Priority-based operator dispatch and the residency guard.
pub mod dispatch;
