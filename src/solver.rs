//! # Solver
//!
//! The refinement loop on top of the [integrator](crate::integrator): keep
//! doubling the panel count until 2 successive Simpson estimates agree
//! within the tolerance, then accept the last estimate.
//!
//! The doubling makes the refinement a geometric search: for well
//! conditioned inputs the estimates form a Cauchy sequence and the loop
//! stops after a handful of doublings. A ceiling on the panel count
//! ([DEFAULT_MAX_PANEL_COUNT](crate::configuration::DEFAULT_MAX_PANEL_COUNT))
//! guards against inputs where the estimates never stabilize (for example
//! when an intermediate value degenerated to `NaN`), surfacing a
//! [ConvergenceFailure](crate::errors::QuadratureError::ConvergenceFailure)
//! instead of running forever.
//!
//! The whole path is deterministic: for a fixed
//! `(dof, x, initial_panel_count, tolerance)` the sequence of panel counts
//! and estimates is exactly reproducible.

use crate::{
    configuration,
    errors::QuadratureError,
    integrator::TDistIntegrator,
};

/// The result of a converged refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence {
    /// The accepted integral estimate.
    pub estimate: f64,
    /// The panel count of the accepted estimate.
    pub panel_count: usize,
    /// How many doublings were needed (`panel_count = initial << refinements`).
    pub refinements: u32,
}

/// Integrates the t density from `0` to `upper_bound` by Simpson's rule,
/// doubling the panel count until convergence.
///
/// ## Inputs:
///
/// 1. `degrees_of_freedom`: the degrees of freedom of the t distribution.
///      - Must be a stricly positive integer.
/// 2. `upper_bound`: the upper bound of integration (the integral runs from
///     `0`, so a negative bound yields a negative signed integral).
///      - Must be finite.
/// 3. `initial_panel_count`: (optional) the panel count of the first
///     estimate.
///      - Must be even and at least 2.
///      - The default is [configuration::DEFAULT_INITIAL_PANEL_COUNT] (10).
/// 4. `tolerance`: (optional) the maximum allowed difference between 2
///     successive estimates to accept the result as final.
///      - The default is [configuration::DEFAULT_CONVERGENCE_TOLERANCE] (1e-5).
/// 5. `max_panel_count`: (optional) the refinement ceiling.
///      - The default is [configuration::DEFAULT_MAX_PANEL_COUNT] (`2^23`).
///
/// ## Results
///
/// On convergence, returns a [Convergence] with the accepted estimate, the
/// panel count it was computed at and the number of doublings performed.
///
/// If the ceiling is reached first, returns
/// [QuadratureError::ConvergenceFailure] with the last panel count and the
/// last difference between estimates. No partial estimate is returned in
/// that case.
///
/// ## Example
///
/// ```
/// use TDistQuadrature::solver::{Convergence, solve};
///
/// let result: Convergence = solve()
///     .degrees_of_freedom(5)
///     .upper_bound(2.0)
///     .call()
///     .expect("well conditioned input");
///
/// assert!((result.estimate - 0.44903).abs() < 1.0e-4);
/// ```
#[bon::builder]
pub fn solve(
    degrees_of_freedom: u64,
    upper_bound: f64,
    #[builder(default = configuration::DEFAULT_INITIAL_PANEL_COUNT)] initial_panel_count: usize,
    #[builder(default = configuration::DEFAULT_CONVERGENCE_TOLERANCE)] tolerance: f64,
    #[builder(default = configuration::DEFAULT_MAX_PANEL_COUNT)] max_panel_count: usize,
) -> Result<Convergence, QuadratureError> {
    let integrator: TDistIntegrator = TDistIntegrator::new(degrees_of_freedom, upper_bound)?;

    let mut panel_count: usize = initial_panel_count;
    let mut previous: f64 = integrator.estimate(panel_count)?;

    let mut refinements: u32 = 0;
    let mut last_difference: f64 = f64::INFINITY;

    loop {
        let next_panel_count: usize = panel_count * 2;
        if max_panel_count < next_panel_count {
            return Err(QuadratureError::ConvergenceFailure {
                panel_count,
                last_difference,
            });
        }

        panel_count = next_panel_count;
        refinements = refinements + 1;

        let current: f64 = integrator.estimate(panel_count)?;
        last_difference = (current - previous).abs();

        if last_difference <= tolerance {
            return Ok(Convergence {
                estimate: current,
                panel_count,
                refinements,
            });
        }

        previous = current;
    }
}
