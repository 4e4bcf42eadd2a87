#![cfg(feature = "dev")]
//! Tests for leading-zero trimming and right-aligned padding.

use poly1d_rs::internals::math::trim::{add_padded, sub_padded, trim_leading_zeros};

// ============================================================================
// Trimming Tests
// ============================================================================

/// Leading (high-degree) zeros are stripped; the rest is untouched.
#[test]
fn test_trim_leading_zeros() {
    assert_eq!(trim_leading_zeros(&[0.0, 0.0, 1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
    assert_eq!(trim_leading_zeros(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
}

/// Trailing zeros are constant-term coefficients and must survive.
#[test]
fn test_trim_keeps_trailing_zeros() {
    assert_eq!(trim_leading_zeros(&[1.0, 0.0, 0.0]), vec![1.0, 0.0, 0.0]);
    assert_eq!(trim_leading_zeros(&[0.0, 1.0, 0.0]), vec![1.0, 0.0]);
}

/// Empty and all-zero inputs trim to the single coefficient 0.
#[test]
fn test_trim_degenerate_inputs() {
    let empty: &[f64] = &[];
    assert_eq!(trim_leading_zeros(empty), vec![0.0]);
    assert_eq!(trim_leading_zeros(&[0.0, 0.0, 0.0]), vec![0.0]);
    assert_eq!(trim_leading_zeros(&[0.0]), vec![0.0]);
}

/// Trimming an already-trimmed sequence is a no-op.
#[test]
fn test_trim_idempotent() {
    let once = trim_leading_zeros(&[0, 0, 4, 5]);
    let twice = trim_leading_zeros(&once);
    assert_eq!(once, twice);
}

// ============================================================================
// Right-Aligned Padding Tests
// ============================================================================

/// The shorter sequence is zero-extended on the high-order side.
#[test]
fn test_add_padded_right_alignment() {
    assert_eq!(
        add_padded(&[1.0, 2.0], &[10.0, 20.0, 30.0]),
        vec![10.0, 21.0, 32.0]
    );
    assert_eq!(
        add_padded(&[10.0, 20.0, 30.0], &[1.0, 2.0]),
        vec![10.0, 21.0, 32.0]
    );
}

#[test]
fn test_sub_padded_right_alignment() {
    assert_eq!(
        sub_padded(&[1.0, 2.0], &[10.0, 20.0, 30.0]),
        vec![-10.0, -19.0, -28.0]
    );
    assert_eq!(sub_padded(&[5, 7], &[1, 2]), vec![4, 5]);
}

/// Padding does not trim: a cancelled leading term stays in the raw result.
#[test]
fn test_padded_results_stay_raw() {
    assert_eq!(sub_padded(&[1.0, 2.0], &[1.0, 1.0]), vec![0.0, 1.0]);
}

/// Empty operands behave as zero-length padding.
#[test]
fn test_padded_empty_operands() {
    let empty: &[f64] = &[];
    assert_eq!(add_padded(empty, &[1.0, 2.0]), vec![1.0, 2.0]);
    assert_eq!(add_padded(empty, empty), Vec::<f64>::new());
    assert_eq!(sub_padded(empty, &[3.0]), vec![-3.0]);
}
