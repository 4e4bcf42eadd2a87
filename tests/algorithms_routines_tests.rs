//! Tests for the `polyadd` / `polysub` / `polymul` free routines: operand
//! forms, shape handling, dtype promotion, and result-form rules.

use poly1d_rs::prelude::*;

// ============================================================================
// polyadd / polysub Tests
// ============================================================================

/// Sequences of different lengths are right-aligned before the elementwise op.
#[test]
fn test_polyadd_right_alignment() {
    let sum = polyadd(&[1.0, 2.0][..], &[10.0, 20.0, 30.0][..]).unwrap();
    assert_eq!(sum.coeffs(), &[10.0, 21.0, 32.0]);

    let sum = polyadd(&[10.0, 20.0, 30.0][..], &[1.0, 2.0][..]).unwrap();
    assert_eq!(sum.coeffs(), &[10.0, 21.0, 32.0]);
}

#[test]
fn test_polysub() {
    let diff = polysub(&[10.0, 20.0, 30.0][..], &[1.0, 2.0][..]).unwrap();
    assert_eq!(diff.coeffs(), &[10.0, 19.0, 28.0]);
}

/// Plain-sequence results are not trimmed, even when the leading entry
/// cancels to zero.
#[test]
fn test_polysub_keeps_raw_length() {
    let diff = polysub(&[1.0, 5.0][..], &[1.0, 2.0][..]).unwrap();
    assert_eq!(diff.coeffs(), &[0.0, 3.0]);
}

/// Scalar operands behave as length-1 sequences.
#[test]
fn test_polyadd_scalar_operand() {
    let sum = polyadd(2.0, &[1.0, 2.0][..]).unwrap();
    assert_eq!(sum.coeffs(), &[1.0, 4.0]);

    let sum = polyadd(&[1.0, 2.0][..], 2.0).unwrap();
    assert_eq!(sum.coeffs(), &[1.0, 4.0]);
}

/// Empty operands behave as zero-length padding; two empties stay empty.
#[test]
fn test_polyadd_empty_operands() {
    let empty: &[f64] = &[];

    let sum = polyadd(empty, &[1.0, 2.0][..]).unwrap();
    assert_eq!(sum.coeffs(), &[1.0, 2.0]);

    let sum = polyadd(empty, empty).unwrap();
    assert!(sum.coeffs().is_empty());
}

// ============================================================================
// polymul Tests
// ============================================================================

/// Output length follows the trimmed-input convolution law.
#[test]
fn test_polymul_length_law() {
    // Leading zero on the left operand is trimmed before convolving.
    let prod = polymul(&[0.0, 1.0, 2.0][..], &[3.0, 4.0][..]).unwrap();
    assert_eq!(prod.coeffs(), &[3.0, 10.0, 8.0]);
    assert_eq!(prod.coeffs().len(), 3);
}

/// Two empty (or scalar) operands multiply to a single coefficient.
#[test]
fn test_polymul_degenerate_operands() {
    let empty: &[f64] = &[];
    let prod = polymul(empty, empty).unwrap();
    assert_eq!(prod.coeffs(), &[0.0]);

    let prod = polymul(3.0, 4.0).unwrap();
    assert_eq!(prod.coeffs(), &[12.0]);
}

// ============================================================================
// Dtype Promotion Tests
// ============================================================================

/// Integer with float promotes to f64.
#[test]
fn test_promotion_int_float() {
    let prod = polymul(&[2i32][..], &[1.5f32, 0.5][..]).unwrap();
    assert_eq!(prod.coeffs(), &[3.0f64, 1.0]);
}

/// Narrow integer with wide integer promotes to the wide integer.
#[test]
fn test_promotion_int_widths() {
    let sum = polyadd(&[1i32, 2][..], &[3i64][..]).unwrap();
    assert_eq!(sum.coeffs(), &[1i64, 5]);
}

/// f32 with f32 stays f32.
#[test]
fn test_promotion_same_dtype() {
    let sum = polyadd(&[1.0f32][..], &[2.0f32][..]).unwrap();
    assert_eq!(sum.coeffs(), &[3.0f32]);
}

// ============================================================================
// Result-Form Tests
// ============================================================================

/// Two polynomial inputs yield a polynomial; its variable follows the
/// mismatch rule.
#[test]
fn test_polynomial_inputs_yield_polynomial() {
    let z = Polynomial::new(&[1.0, 2.0][..], Some("z")).unwrap();
    let y = Polynomial::new(&[3.0, 4.0][..], Some("y")).unwrap();

    let sum = polyadd(&z, &y).unwrap();
    let poly = sum.as_polynomial().expect("both inputs were polynomials");
    assert_eq!(poly.coeffs(), &[4.0, 6.0]);
    assert_eq!(poly.variable(), "x");

    let z2 = Polynomial::new(&[1.0][..], Some("z")).unwrap();
    let sum = polyadd(&z, &z2).unwrap();
    assert_eq!(sum.as_polynomial().unwrap().variable(), "z");
}

/// A polynomial input re-trims the polynomial result.
#[test]
fn test_polynomial_result_is_trimmed() {
    let p = Polynomial::new(&[1.0, 5.0][..], None).unwrap();
    let q = Polynomial::new(&[1.0, 2.0][..], None).unwrap();

    let diff = polysub(&p, &q).unwrap();
    assert_eq!(diff.coeffs(), &[3.0]);
}

/// Mixing a polynomial with a plain sequence yields a plain sequence.
#[test]
fn test_mixed_inputs_yield_coeffs() {
    let p = Polynomial::new(&[1.0, 2.0][..], None).unwrap();

    let sum = polyadd(&p, &[10.0, 20.0][..]).unwrap();
    assert!(sum.as_polynomial().is_none());
    assert_eq!(sum.coeffs(), &[11.0, 22.0]);
}

// ============================================================================
// Shape Tests
// ============================================================================

/// 0-d and 1-D host arrays are valid operands.
#[test]
fn test_host_array_operands() {
    let scalar = HostArray::scalar(2.0);
    let vector = HostArray::from_slice(&[1.0, 2.0]);

    let sum = polyadd(&scalar, &vector).unwrap();
    assert_eq!(sum.coeffs(), &[1.0, 4.0]);

    let empty = HostArray::from_slice(&[] as &[f64]);
    let sum = polyadd(&empty, &vector).unwrap();
    assert_eq!(sum.coeffs(), &[1.0, 2.0]);
}

/// A 2-D operand is a shape error on either side.
#[test]
fn test_two_dimensional_operand_rejected() {
    let grid = HostArray::from_shape(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let line = HostArray::from_slice(&[1.0, 2.0]);

    let err = polyadd(&grid, &line).unwrap_err();
    assert_eq!(err, PolyError::TooManyDimensions { ndim: 2 });

    let err = polymul(&line, &grid).unwrap_err();
    assert_eq!(err, PolyError::TooManyDimensions { ndim: 2 });
}

/// An invalid shape specification is rejected when the array is built.
#[test]
fn test_invalid_shape_rejected() {
    let err = HostArray::from_shape(vec![1.0, 2.0, 3.0], vec![2, 2]).unwrap_err();
    assert_eq!(err, PolyError::InvalidShape { size: 4, len: 3 });
}
