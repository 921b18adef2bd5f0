//! Tests for linear and piecewise interpolation.
//!
//! These tests verify:
//! - Two-point interpolation with exact and uncertain coordinates
//! - The endpoint error blend and its zero floor when extrapolating
//! - Bracket selection across an ascending sequence
//! - Extrapolation warnings and input validation
//!
//! ## Test Organization
//!
//! 1. **Two-Point Interpolation** - Exact path, error blend, degenerate bracket
//! 2. **Piecewise Interpolation** - Brackets, nodes, extrapolation
//! 3. **Validation** - Boundary format, ordering, lengths
//! 4. **Builder** - Configuration and duplicate parameters

use approx::assert_relative_eq;

use errval::prelude::*;

fn vwe(value: f64, error: f64) -> ValueWithError {
    ValueWithError::new(value, error).unwrap()
}

fn table() -> (Vec<f64>, ErrvalList) {
    let xs = vec![1.0, 2.0, 3.0];
    let ys = ErrvalList::try_from_pairs(&[(10.0, 1.0), (20.0, 1.0), (30.0, 1.0)]).unwrap();
    (xs, ys)
}

// ============================================================================
// Two-Point Interpolation Tests
// ============================================================================

/// Test that exact points give an exact result.
#[test]
fn test_interp_exact_points() {
    let r = interp(1.5_f64, (1.0_f64, 10.0_f64), (2.0_f64, 20.0_f64)).unwrap();

    assert_relative_eq!(r.value(), 15.0);
    assert!(r.is_exact());
}

/// Test the error blend between uncertain ordinates.
#[test]
fn test_interp_error_blend() {
    let p0: Point = Point::new(1.0, vwe(10.0, 1.0));
    let p1: Point = Point::new(2.0, vwe(20.0, 3.0));

    let r = interp(1.5, p0, p1).unwrap();

    assert_relative_eq!(r.value(), 15.0);
    assert_relative_eq!(r.error(), 2.0);
}

/// Test the blend uses the absolute error difference.
#[test]
fn test_interp_error_blend_decreasing() {
    let p0: Point = Point::new(1.0, vwe(10.0, 3.0));
    let p1: Point = Point::new(2.0, vwe(20.0, 1.0));

    let r = interp(1.5, p0, p1).unwrap();

    assert_relative_eq!(r.error(), 4.0);
}

/// Test that an uncertain abscissa alone still takes the blended path.
#[test]
fn test_interp_uncertain_x_only() {
    let p0: Point = Point::new(vwe(1.0, 0.5), 10.0);
    let p1: Point = Point::new(2.0, 20.0);

    let r = interp(1.25, p0, p1).unwrap();

    assert_relative_eq!(r.value(), 12.5);
    assert_eq!(r.error(), 0.0);
}

/// Test that tied abscissae return the first ordinate.
#[test]
fn test_interp_degenerate_bracket() {
    let p0: Point = Point::new(1.0, vwe(10.0, 1.0));
    let p1: Point = Point::new(1.0, vwe(20.0, 2.0));

    let r = interp(5.0, p0, p1).unwrap();

    assert_eq!(r.to_tuple(), (10.0, 1.0));
}

/// Test that a blended error below zero is floored when extrapolating.
#[test]
fn test_interp_negative_blend_floored() {
    let p0: Point = Point::new(1.0, vwe(10.0, 1.0));
    let p1: Point = Point::new(2.0, vwe(20.0, 3.0));

    let r = interp(0.0, p0, p1).unwrap();

    assert_relative_eq!(r.value(), 0.0);
    assert_eq!(r.error(), 0.0);
}

// ============================================================================
// Piecewise Interpolation Tests
// ============================================================================

/// Test interpolation inside the range raises no warning.
#[test]
fn test_sequence_inside_range() {
    let (xs, ys) = table();

    let r = interp_sequence(2.5, &xs, &ys, true).unwrap();

    assert_relative_eq!(r.value.value(), 25.0);
    assert_relative_eq!(r.value.error(), 1.0);
    assert!(!r.is_extrapolated());
}

/// Test interpolation exactly at nodes, including the last one.
#[test]
fn test_sequence_at_nodes() {
    let (xs, ys) = table();

    for (&x, expected) in xs.iter().zip([10.0, 20.0, 30.0]) {
        let r = interp_sequence(x, &xs, &ys, true).unwrap();
        assert_relative_eq!(r.value.value(), expected);
        assert!(r.warning.is_none());
    }
}

/// Test extrapolation above the range.
#[test]
fn test_sequence_extrapolate_above() {
    let (xs, ys) = table();

    let r = interp_sequence(3.5, &xs, &ys, true).unwrap();

    assert_relative_eq!(r.value.value(), 35.0);
    let warning = r.warning.unwrap();
    assert_eq!(
        warning,
        ExtrapolationWarning {
            requested: 3.5,
            lower: 1.0,
            upper: 3.0,
        }
    );
    assert_eq!(
        warning.to_string(),
        "Extrapolating: 3.5 is above the interpolation range [1, 3]"
    );
}

/// Test extrapolation below the range.
#[test]
fn test_sequence_extrapolate_below() {
    let (xs, ys) = table();

    let r = interp_sequence(0.5, &xs, &ys, true).unwrap();

    assert_relative_eq!(r.value.value(), 5.0);
    assert_relative_eq!(r.value.error(), 1.0);
    assert!(r.warning.unwrap().to_string().contains("below"));
}

/// Test extrapolation below the range with unequal endpoint errors.
#[test]
fn test_sequence_extrapolate_below_unequal_errors() {
    let xs = [1.0, 2.0, 3.0];
    let ys = ErrvalList::try_from_pairs(&[(10.0, 1.0), (20.0, 3.0), (30.0, 3.0)]).unwrap();

    let r = interp_sequence(-1.0, &xs, &ys, true).unwrap();

    assert_relative_eq!(r.value.value(), -10.0);
    assert_eq!(r.value.error(), 0.0);
    assert!(r.is_extrapolated());
}

/// Test that warnings can be switched off.
#[test]
fn test_sequence_warning_disabled() {
    let (xs, ys) = table();

    let r = interp_sequence(10.0, &xs, &ys, false).unwrap();

    assert_relative_eq!(r.value.value(), 100.0);
    assert!(!r.is_extrapolated());
}

/// Test uncertain abscissae are accepted and their errors ignored.
#[test]
fn test_sequence_uncertain_abscissae() {
    let xs = ErrvalList::try_from_pairs(&[(0.0, 0.5), (10.0, 0.5)]).unwrap();
    let ys = ErrvalList::try_from_pairs(&[(0.0, 2.0), (100.0, 2.0)]).unwrap();

    let r = interp_sequence(2.5, xs.as_slice(), &ys, true).unwrap();

    assert_relative_eq!(r.value.value(), 25.0);
    assert_relative_eq!(r.value.error(), 2.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that a boundary needs exactly two coordinates.
#[test]
fn test_point_from_slice() {
    let ok = Point::from_slice(&[Operand::Exact(1.0), Operand::Uncertain(vwe(2.0, 0.1))]);
    assert!(ok.unwrap().is_uncertain());

    let result = Point::from_slice(&[Operand::Exact(1.0)]);
    assert_eq!(result, Err(ErrvalError::InvalidBoundaryFormat { got: 1 }));

    let result = Point::<f64>::from_slice(&[]);
    assert_eq!(result, Err(ErrvalError::InvalidBoundaryFormat { got: 0 }));
}

/// Test rejection of unsorted abscissae.
#[test]
fn test_sequence_unsorted() {
    let xs = [1.0, 3.0, 2.0];
    let ys = ErrvalList::from_exact(&[1.0, 2.0, 3.0]);

    let result = interp_sequence(1.5, &xs, &ys, true);

    assert!(matches!(result, Err(ErrvalError::TypeMismatch(_))));
}

/// Test rejection of too few points and mismatched lengths.
#[test]
fn test_sequence_shape_errors() {
    let ys = ErrvalList::from_exact(&[1.0]);
    assert_eq!(
        interp_sequence(0.0, &[1.0], &ys, true),
        Err(ErrvalError::TooFewPoints { got: 1, min: 2 })
    );

    let (xs, _) = table();
    assert!(matches!(
        interp_sequence(0.0, &xs, &ys, true),
        Err(ErrvalError::MismatchedInputs { x_len: 3, y_len: 1 })
    ));
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test the interpolator builder defaults to warning.
#[test]
fn test_interpolator_builder() {
    let (xs, ys) = table();

    let warn = Interpolator::new().build().unwrap();
    assert!(warn.at(4.0, &xs, &ys).unwrap().is_extrapolated());

    let quiet = Interpolator::new()
        .warn_on_extrapolation(false)
        .build()
        .unwrap();
    assert!(!quiet.at(4.0, &xs, &ys).unwrap().is_extrapolated());
}

/// Test that setting a parameter twice fails at build time.
#[test]
fn test_interpolator_duplicate_parameter() {
    let result = Interpolator::new()
        .warn_on_extrapolation(false)
        .warn_on_extrapolation(true)
        .build();

    assert_eq!(
        result,
        Err(ErrvalError::DuplicateParameter {
            parameter: "warn_on_extrapolation"
        })
    );
}
