//! # Gamma
//!
//! A restricted [Gamma function](https://en.wikipedia.org/wiki/Gamma_function)
//! that only supports the arguments the
//! [t density](https://en.wikipedia.org/wiki/Student%27s_t-distribution#Probability_density_function)
//! normalization constant ever needs:
//!
//!  - Positive integers `n`: `Gamma(n) = (n-1)!`
//!  - Positive half-integers `n + 0.5`: the recurrence
//!     `Gamma(n + 0.5) = (n - 0.5)(n - 1.5)...(0.5) * sqrt(pi)`,
//!     from `Gamma(0.5) = sqrt(pi)`.
//!
//! For an integer `dof >= 1`, both `(dof + 1) / 2` and `dof / 2` always fall
//! in one of the 2 classes, so these are the only cases requiered. Any other
//! argument is rejected with
//! [UnsupportedArgument](crate::errors::GammaError::UnsupportedArgument):
//! this module deliberately does **not** implement the general Gamma function.
//!
//! All the functions here are pure: there is no *last computed value* kept
//! anywhere, every call is fully determined by its argument.

use std::f64;

use crate::{configuration, errors::GammaError};

/// Computes `Gamma(n) = (n - 1)!` for a positive integer `n` by iterative
/// product (`Gamma(1) = 1` trough the empty product).
///
/// ## Examples
///
/// `Gamma(1) = 1`, `Gamma(2) = 1`, `Gamma(3) = 2`, `Gamma(4) = 6`
///
/// ## Errors
///
/// Returns [GammaError::InvalidArgument] if `n <= 0`, where Gamma is
/// not defined.
pub fn integer_gamma(n: i64) -> Result<f64, GammaError> {
    if n <= 0 {
        return Err(GammaError::InvalidArgument);
    }

    let mut result: f64 = 1.0;
    for i in 1..n {
        result = result * (i as f64);
    }

    return Ok(result);
}

/// Computes `Gamma(n + 0.5)` for an integer `n >= 0`.
///
/// Uses `Gamma(0.5) = sqrt(pi)` and the recurrence
/// `Gamma(k + 0.5) = (k - 0.5) * Gamma(k - 0.5)`, so:
///
/// `Gamma(n + 0.5) = (n - 0.5)(n - 1.5)...(0.5) * sqrt(pi)`
///
/// For `n = 0` this degenerates to `sqrt(pi)`.
pub fn half_integer_gamma(n: u64) -> f64 {
    let mut result: f64 = f64::consts::PI.sqrt();
    for i in 1..=n {
        result = result * ((i as f64) - 0.5);
    }

    return result;
}

/// Computes `Gamma(value)` for a positive integer or positive half-integer
/// `value`.
///
/// The argument is classified with an explicit epsilon
/// ([INTEGER_DETECTION_EPSILON](crate::configuration::INTEGER_DETECTION_EPSILON)):
/// `value` counts as an integer if `|value - round(value)| < 1e-10`, and as a
/// half-integer if `value - 0.5` passes the same test with a non-negative
/// result. The explicit epsilon (instead of an exact float comparison) keeps
/// the classification reproducible.
///
/// ## Errors
///
///  - [GammaError::InvalidArgument] if `value` is an integer `<= 0`.
///  - [GammaError::UnsupportedArgument] if `value` is neither an integer nor
///     a half-integer. The general Gamma function is out of the scope of
///     this library.
pub fn gamma(value: f64) -> Result<f64, GammaError> {
    let rounded: f64 = value.round();
    if (value - rounded).abs() < configuration::INTEGER_DETECTION_EPSILON {
        return integer_gamma(rounded as i64);
    }

    let shifted: f64 = value - 0.5;
    let shifted_rounded: f64 = shifted.round();
    if (shifted - shifted_rounded).abs() < configuration::INTEGER_DETECTION_EPSILON
        && 0.0 <= shifted_rounded
    {
        return Ok(half_integer_gamma(shifted_rounded as u64));
    }

    return Err(GammaError::UnsupportedArgument);
}

/// Computes `ln(Gamma(value))` for the same restricted arguments as [gamma],
/// with the iterative products replaced by sums of logarithms.
///
/// [gamma] overflows `f64` quickly (`Gamma(171)` is already `inf`), wich
/// makes the t density normalization constant unusable for large degrees of
/// freedom even though the constant itself is a perfectly representable
/// ratio. Computing the constant as
/// `exp(ln_gamma(a) - ln_gamma(b) - 0.5*ln(dof*pi))` avoids the overflow.
///
/// ## Errors
///
/// Same as [gamma]: [GammaError::InvalidArgument] for integers `<= 0`,
/// [GammaError::UnsupportedArgument] for anything that is not an integer nor
/// a half-integer.
pub fn ln_gamma(value: f64) -> Result<f64, GammaError> {
    let rounded: f64 = value.round();
    if (value - rounded).abs() < configuration::INTEGER_DETECTION_EPSILON {
        let n: i64 = rounded as i64;
        if n <= 0 {
            return Err(GammaError::InvalidArgument);
        }

        let mut result: f64 = 0.0;
        for i in 1..n {
            result = result + (i as f64).ln();
        }
        return Ok(result);
    }

    let shifted: f64 = value - 0.5;
    let shifted_rounded: f64 = shifted.round();
    if (shifted - shifted_rounded).abs() < configuration::INTEGER_DETECTION_EPSILON
        && 0.0 <= shifted_rounded
    {
        // ln(Gamma(n + 0.5)) = 0.5*ln(pi) + sum_{i = 1..=n} ln(i - 0.5)
        let mut result: f64 = 0.5 * f64::consts::PI.ln();
        for i in 1..=(shifted_rounded as u64) {
            result = result + ((i as f64) - 0.5).ln();
        }
        return Ok(result);
    }

    return Err(GammaError::UnsupportedArgument);
}
