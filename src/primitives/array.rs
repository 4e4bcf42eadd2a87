//! Host- and device-resident array containers.
//!
//! ## Purpose
//!
//! This module models host memory and device memory as distinct types so the
//! residency policy is visible in the type system: a `DeviceArray` never
//! converts to host data implicitly, and the operator dispatcher can reject
//! cross-residency combinations before any transfer happens.
//!
//! ## Design notes
//!
//! * **Shape-aware**: both containers carry an explicit shape so degenerate
//!   inputs (`()`, `(0,)`) and invalid inputs (ndim >= 2) are distinguishable.
//! * **Owned storage**: data is always an owned `Vec`; construction copies.
//! * **Explicit synchronization**: `DeviceArray::to_host` is the only path
//!   from device residency to host residency, and it is deliberately loud in
//!   call sites.
//!
//! ## Invariants
//!
//! * `data.len()` equals the product of `shape` (a 0-d array holds exactly
//!   one element).
//!
//! ## Non-goals
//!
//! * No actual device allocation or kernel dispatch; `DeviceArray` models
//!   residency for the combination policy only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::PolyError;
use crate::primitives::scalar::Coefficient;

// ============================================================================
// HostArray
// ============================================================================

/// A host-resident, shape-aware numeric array.
#[derive(Debug, Clone, PartialEq)]
pub struct HostArray<T: Coefficient> {
    data: Vec<T>,
    shape: Vec<usize>,
}

impl<T: Coefficient> HostArray<T> {
    /// Create a 0-d (scalar) array.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            shape: Vec::new(),
        }
    }

    /// Create a 1-D array by copying a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
            shape: vec![data.len()],
        }
    }

    /// Create an array with an explicit shape.
    ///
    /// The shape product must match the data length; a 0-d shape requires
    /// exactly one element.
    pub fn from_shape(data: Vec<T>, shape: Vec<usize>) -> Result<Self, PolyError> {
        let size: usize = shape.iter().product();
        if size != data.len() {
            return Err(PolyError::InvalidShape {
                size,
                len: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Number of dimensions (0 for a scalar).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The array shape.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The underlying elements in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

// ============================================================================
// DeviceArray
// ============================================================================

/// A device-resident, shape-aware numeric array.
///
/// Stands in for accelerator memory: its elements are not reachable from host
/// code except through the explicit [`DeviceArray::to_host`] transfer. The
/// operator dispatcher treats any combination of a `DeviceArray` with a
/// host-side value as an error rather than synchronizing behind the caller's
/// back.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceArray<T: Coefficient> {
    data: Vec<T>,
    shape: Vec<usize>,
    device: u32,
}

impl<T: Coefficient> DeviceArray<T> {
    /// Upload a host array to the given device.
    pub fn from_host(host: &HostArray<T>, device: u32) -> Self {
        Self {
            data: host.data().to_vec(),
            shape: host.shape().to_vec(),
            device,
        }
    }

    /// Explicitly transfer the array back to host memory.
    ///
    /// This is the only device-to-host path; it is a blocking copy and must
    /// be requested by the caller, never performed implicitly.
    pub fn to_host(&self) -> HostArray<T> {
        // Shape was validated when the host array was first built.
        HostArray {
            data: self.data.clone(),
            shape: self.shape.clone(),
        }
    }

    /// Number of dimensions (0 for a scalar).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The array shape.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Identifier of the device holding the data.
    #[inline]
    pub fn device(&self) -> u32 {
        self.device
    }
}
