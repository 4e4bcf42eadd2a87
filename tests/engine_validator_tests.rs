#![cfg(feature = "dev")]

use poly1d_rs::internals::engine::polyfit::Degree;
use poly1d_rs::internals::engine::validator::Validator;
use poly1d_rs::internals::primitives::errors::PolyError;

#[test]
fn test_check_samples() {
    assert!(Validator::check_samples(&[1.0f64, 2.0]).is_ok());

    let empty: [f64; 0] = [];
    assert_eq!(
        Validator::check_samples(&empty),
        Err(PolyError::EmptyInput)
    );
}

#[test]
fn test_check_lengths() {
    assert!(Validator::check_lengths(3, 3).is_ok());
    assert_eq!(
        Validator::check_lengths(3, 2),
        Err(PolyError::MismatchedLengths { x_len: 3, y_len: 2 })
    );
}

#[test]
fn test_check_weights() {
    assert!(Validator::check_weights(4, 4).is_ok());
    assert_eq!(
        Validator::check_weights(2, 4),
        Err(PolyError::MismatchedWeights { w_len: 2, x_len: 4 })
    );
}

#[test]
fn test_check_rcond() {
    assert!(Validator::check_rcond(0.0f64).is_ok());
    assert!(Validator::check_rcond(0.5f64).is_ok());

    assert_eq!(
        Validator::check_rcond(-1.0f64),
        Err(PolyError::InvalidRcond { rcond: -1.0 })
    );
    assert!(matches!(
        Validator::check_rcond(f64::NAN),
        Err(PolyError::InvalidRcond { .. })
    ));
    // The f32 path widens the offending value for the report.
    assert_eq!(
        Validator::check_rcond(-0.5f32),
        Err(PolyError::InvalidRcond { rcond: -0.5 })
    );
}

#[test]
fn test_check_degree() {
    assert_eq!(Validator::check_degree(Degree::Int(3)), Ok(3));
    assert_eq!(Validator::check_degree(Degree::Float(2.0)), Ok(2));

    assert_eq!(
        Validator::check_degree(Degree::Int(-1)),
        Err(PolyError::NegativeDegree { degree: -1 })
    );
    assert_eq!(
        Validator::check_degree(Degree::Float(1.5)),
        Err(PolyError::NonIntegralDegree { degree: 1.5 })
    );
    // Integrality is reported before sign.
    assert_eq!(
        Validator::check_degree(Degree::Float(-1.5)),
        Err(PolyError::NonIntegralDegree { degree: -1.5 })
    );
}
