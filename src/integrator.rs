//! # Integrator
//!
//! Composite [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
//! quadrature of the [Student's t](https://en.wikipedia.org/wiki/Student%27s_t-distribution)
//! density over `[0, x]`.
//!
//! ### Parameters
//!
//! An integrator is scoped to a single `(dof, x)` pair:
//!  - The degrees of freedom is a stricly positive integer.
//!  - The upper bound `x` may be negative: the integral runs from `0` to `x`,
//!     so a negative `x` yields a negative signed integral (consistent with
//!     the integral from `0` to `x` for `x < 0` being the negative of the
//!     integral from `x` to `0`).
//!
//! Each call to [TDistIntegrator::estimate] is self contained: the panel set
//! and the normalization constant are rebuilt from scratch on every call, so
//! estimates at different panel counts never share state.

use std::f64;

use crate::{
    errors::QuadratureError,
    gamma::ln_gamma,
};

/// The quadrature arrays for one panel count.
///
/// For a panel count `N` and an upper bound `x`, holds the `N + 1` abscissas
/// `Xi = (x / N) * i`, the base terms `1 + Xi^2 / dof` and the density values
/// `f(Xi)`. Built fresh on every [TDistIntegrator::estimate] call, never
/// mutated afterwards, and discarded once it has produced one scalar
/// estimate.
pub struct QuadraturePanelSet {
    /// The abscissas `Xi = w * i` for `i` in `0..=N`.
    pub abscissas: Vec<f64>,
    /// The base terms `1 + Xi^2 / dof`.
    pub base_terms: Vec<f64>,
    /// The density values `f(Xi) = c * (1 + Xi^2 / dof) ^ (-(dof+1)/2)`.
    pub densities: Vec<f64>,
}

/// Integrates the t density from `0` to `x` with Simpson's rule, for a fixed
/// `(dof, x)` pair and a caller chosen panel count.
pub struct TDistIntegrator {
    degrees_of_freedom: u64,
    upper_bound: f64,
}

impl TDistIntegrator {
    /// Create a [TDistIntegrator] for the given degrees of freedom and
    /// upper bound of integration.
    ///
    /// `degrees_of_freedom`:
    ///  - Must be a stricly positive integer (`1 <= dof`).
    ///
    /// `upper_bound`:
    ///  - Must be finite (no `+-inf` nor NaN).
    ///  - May be negative or `0.0` (the integral is signed).
    ///
    /// ## Errors
    ///
    ///  - [QuadratureError::InvalidDegreesOfFreedom] if `degrees_of_freedom == 0`.
    ///  - [QuadratureError::InvalidUpperBound] if `upper_bound` is not finite.
    pub fn new(degrees_of_freedom: u64, upper_bound: f64) -> Result<TDistIntegrator, QuadratureError> {
        if degrees_of_freedom == 0 {
            return Err(QuadratureError::InvalidDegreesOfFreedom);
        }

        if !upper_bound.is_finite() {
            return Err(QuadratureError::InvalidUpperBound);
        }

        return Ok(TDistIntegrator {
            degrees_of_freedom,
            upper_bound,
        });
    }

    /// Returns the degrees of freedom.
    pub const fn get_degrees_of_freedom(&self) -> u64 {
        return self.degrees_of_freedom;
    }

    /// Returns the upper bound of integration.
    pub const fn get_upper_bound(&self) -> f64 {
        return self.upper_bound;
    }

    /// Computes the normalization constant of the t density:
    ///
    /// `c = gamma((dof+1)/2) / (sqrt(dof*pi) * gamma(dof/2))`
    ///
    /// For an integer `dof >= 1`, `(dof+1)/2` and `dof/2` are always an
    /// integer or a half-integer, so the restricted [crate::gamma] module
    /// covers every case.
    pub fn normalization_constant(degrees_of_freedom: u64) -> Result<f64, QuadratureError> {
        /*

        c = gamma((dof+1)/2) / (sqrt(dof*pi) * gamma(dof/2))
        ln(c) = ln_gamma((dof+1)/2) - ln_gamma(dof/2) - 0.5*ln(dof*pi)

        ***
        // direct version (overflows `gamma` for dof >= 341):

        let num: f64 = gamma((dof + 1.0) / 2.0)?;
        let den: f64 = (dof * f64::consts::PI).sqrt() * gamma(dof / 2.0)?;

        return Ok(num / den);

         */

        let dof: f64 = degrees_of_freedom as f64;

        let ln_c: f64 = ln_gamma((dof + 1.0) * 0.5)?
            - ln_gamma(dof * 0.5)?
            - 0.5 * (dof * f64::consts::PI).ln();

        return Ok(ln_c.exp());
    }

    /// Builds the [QuadraturePanelSet] for the given panel count: the
    /// abscissas, the base terms and the density values, in that order.
    ///
    /// The caller is responsible for `panel_count` being even and `>= 2`
    /// ([TDistIntegrator::estimate] enforces it before calling this).
    ///
    /// ## Errors
    ///
    /// Returns [QuadratureError::Gamma] if the normalization constant cannot
    /// be evaluated.
    pub fn build_panel_set(&self, panel_count: usize) -> Result<QuadraturePanelSet, QuadratureError> {
        let dof: f64 = self.degrees_of_freedom as f64;
        let panel_width: f64 = self.upper_bound / (panel_count as f64);

        let mut abscissas: Vec<f64> = Vec::with_capacity(panel_count + 1);
        for i in 0..=panel_count {
            abscissas.push(panel_width * (i as f64));
        }

        let mut base_terms: Vec<f64> = Vec::with_capacity(panel_count + 1);
        for &xi in &abscissas {
            base_terms.push(1.0 + (xi * xi) / dof);
        }

        // exponent = -(dof + 1) / 2 (depends only on dof, not on the panel count)
        let exponent: f64 = -(dof + 1.0) * 0.5;
        let coefficient: f64 = Self::normalization_constant(self.degrees_of_freedom)?;

        let mut densities: Vec<f64> = Vec::with_capacity(panel_count + 1);
        for &base in &base_terms {
            densities.push(coefficient * base.powf(exponent));
        }

        return Ok(QuadraturePanelSet {
            abscissas,
            base_terms,
            densities,
        });
    }

    /// Computes one Simpson estimate of the integral of the t density from
    /// `0` to `x`, using `panel_count` equal width panels:
    ///
    /// 1. Panel width `w = x / N` and abscissas `Xi = w * i` for `i` in `0..=N`.
    /// 2. Base terms `1 + Xi^2 / dof` and densities
    ///     `f(Xi) = c * (1 + Xi^2 / dof) ^ (-(dof+1)/2)`.
    /// 3. Simpson weights: `1` at both endpoints, `4` at odd indexes, `2` at
    ///     even interior indexes.
    /// 4. Result = `(w / 3) * sum(weight_i * f(Xi))`.
    ///
    /// For `x = 0.0` the result is `0.0` for any valid panel count.
    ///
    /// ## Errors
    ///
    ///  - [QuadratureError::InvalidPanelCount] if `panel_count` is odd or
    ///     smaller than 2 (Simpson's rule is undefined there).
    ///  - [QuadratureError::Gamma] if the normalization constant cannot be
    ///     evaluated.
    pub fn estimate(&self, panel_count: usize) -> Result<f64, QuadratureError> {
        if panel_count < 2 || (panel_count & 1) == 1 {
            return Err(QuadratureError::InvalidPanelCount);
        }

        let panel_set: QuadraturePanelSet = self.build_panel_set(panel_count)?;

        let mut weighted_sum: f64 = 0.0;
        for (i, &density) in panel_set.densities.iter().enumerate() {
            let weight: f64 = if i == 0 || i == panel_count {
                1.0
            } else if (i & 1) == 1 {
                4.0
            } else {
                2.0
            };

            weighted_sum = weighted_sum + weight * density;
        }

        let panel_width: f64 = self.upper_bound / (panel_count as f64);
        return Ok((panel_width / 3.0) * weighted_sum);
    }
}
