//! Tests for the weighted linear regression with jackknife errors.
//!
//! These tests verify:
//! - Recovery of exact lines and hand-computed jackknife errors
//! - NaN uncertainties for two or fewer samples
//! - Zero-uncertainty handling, with and without repair
//! - The builder, the convenience function and result formatting
//!
//! ## Test Organization
//!
//! 1. **Fitting** - Exact lines, noisy data, small samples
//! 2. **Validation** - Shapes and zero uncertainties
//! 3. **API** - Builder, `linreg`, `fit_values`, display

use approx::assert_relative_eq;

use errval::prelude::*;

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test that an exact line is recovered with negligible errors.
#[test]
fn test_exact_line() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 + 3.0 * xi).collect();
    let sigma = [0.1; 5];

    let fit = linreg(&x, &y, &sigma, false).unwrap();

    assert_relative_eq!(fit.intercept.value(), 2.0, epsilon = 1e-10);
    assert_relative_eq!(fit.slope.value(), 3.0, epsilon = 1e-10);
    assert!(fit.intercept.error() < 1e-9);
    assert!(fit.slope.error() < 1e-9);
}

/// Test the fit and jackknife errors against a hand-computed case.
///
/// Leave-one-out estimates: A = (-1/3, -3/14, 0, 1/6), B = (1, 13/14, 1, 1/2).
#[test]
fn test_noisy_line_jackknife() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 1.0, 3.0];
    let sigma = [1.0; 4];

    let fit = linreg(&x, &y, &sigma, false).unwrap();

    assert_relative_eq!(fit.intercept.value(), -0.1, epsilon = 1e-12);
    assert_relative_eq!(fit.slope.value(), 0.9, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept.error(), 0.333_758_232_592_290_2, epsilon = 1e-12);
    assert_relative_eq!(fit.slope.error(), 0.360_696_604_941_502_8, epsilon = 1e-12);
}

/// Test that weights pull the line toward precise samples.
#[test]
fn test_weights_matter() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 1.0, 3.0];

    let uniform = linreg(&x, &y, &[1.0; 4], false).unwrap();
    let weighted = linreg(&x, &y, &[1.0, 1.0, 1.0, 100.0], false).unwrap();

    // Down-weighting the high last point flattens the slope
    assert!(weighted.slope.value() < uniform.slope.value());
}

/// Test that two samples give a line with NaN errors.
#[test]
fn test_two_points_nan_errors() {
    let fit = linreg::<f64>(&[0.0, 1.0], &[1.0, 3.0], &[0.5, 0.5], false).unwrap();

    assert_relative_eq!(fit.intercept.value(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.slope.value(), 2.0, epsilon = 1e-12);
    assert!(fit.intercept.error().is_nan());
    assert!(fit.slope.error().is_nan());
}

/// Test single precision.
#[test]
fn test_f32_fit() {
    let x = [0.0_f32, 1.0, 2.0, 3.0];
    let y = [1.0_f32, 2.0, 3.0, 4.0];

    let fit = linreg(&x, &y, &[1.0_f32; 4], false).unwrap();

    assert_relative_eq!(fit.intercept.value(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(fit.slope.value(), 1.0, epsilon = 1e-5);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test mismatched and empty inputs.
#[test]
fn test_shape_errors() {
    assert_eq!(
        linreg(&[0.0, 1.0], &[1.0], &[1.0, 1.0], false),
        Err(ErrvalError::LengthMismatch {
            x_len: 2,
            y_len: 1,
            sigma_len: 2
        })
    );

    assert_eq!(
        linreg::<f64>(&[], &[], &[], false),
        Err(ErrvalError::EmptyInput)
    );
}

/// Test that a zero uncertainty fails without repair.
#[test]
fn test_zero_uncertainty_rejected() {
    let result = linreg(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[1.0, 0.0, 1.0], false);

    assert_eq!(result, Err(ErrvalError::ZeroUncertainty { index: 1 }));
}

/// Test that repair replaces zeros by a tenth of the smallest nonzero error.
#[test]
fn test_zero_uncertainty_repaired() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.2, 1.9, 3.1];
    let sigma = [0.5, 0.0, 2.0, 1.0];

    let repaired = linreg(&x, &y, &sigma, true).unwrap();
    let explicit = linreg(&x, &y, &[0.5, 0.05, 2.0, 1.0], false).unwrap();

    assert_eq!(repaired, explicit);
    assert_eq!(sigma, [0.5, 0.0, 2.0, 1.0]);
}

/// Test that repair cannot help when every uncertainty is zero.
#[test]
fn test_all_zero_uncertainties() {
    let result = linreg(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[0.0; 3], true);

    assert_eq!(result, Err(ErrvalError::ZeroUncertainty { index: 0 }));
}

// ============================================================================
// API Tests
// ============================================================================

/// Test the builder matches the convenience function.
#[test]
fn test_builder_matches_linreg() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 1.0, 3.0];
    let sigma = [1.0; 4];

    let model = LinReg::new().overwrite_zero_errors(false).build().unwrap();
    assert_eq!(model.config(), RegressionConfig::default());

    assert_eq!(
        model.fit(&x, &y, &sigma).unwrap(),
        linreg(&x, &y, &sigma, false).unwrap()
    );
}

/// Test fitting values with errors uses their errors as uncertainties.
#[test]
fn test_fit_values() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = ErrvalList::try_from_columns(&[0.0, 1.0, 1.0, 3.0], &[1.0; 4]).unwrap();

    let model = LinReg::new().build().unwrap();
    let fit = model.fit_values(&x, &y).unwrap();

    assert_relative_eq!(fit.slope.value(), 0.9, epsilon = 1e-12);
}

/// Test that setting a parameter twice fails at build time.
#[test]
fn test_duplicate_parameter() {
    let result = LinReg::new().parallel(true).parallel(false).build();

    assert_eq!(
        result,
        Err(ErrvalError::DuplicateParameter {
            parameter: "parallel"
        })
    );
}

/// Test the formatted result.
#[test]
fn test_display() {
    let fit = linreg(&[0.0, 1.0], &[1.0, 3.0], &[0.5, 0.5], false).unwrap();

    let text = fit.to_string();

    assert!(text.starts_with("Linear Regression (y = A + B*x):"));
    assert!(text.contains("A: 1"));
    assert!(text.contains("B: 2"));
}
