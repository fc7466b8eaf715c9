use TDistQuadrature::errors::QuadratureError;
use TDistQuadrature::integrator::TDistIntegrator;
use TDistQuadrature::solver::{Convergence, solve};

#[inline]
fn assert_approx_eq(a: f64, b: f64, eps: f64) {
    assert!(
        (a - b).abs() < eps,
        "assertion failed: `(left !== right)` \
         (left: `{:?}`, right: `{:?}`, expect diff: `{:?}`, real diff: `{:?}`)",
        a,
        b,
        eps,
        (a - b).abs()
    );
}

#[cfg(test)]
mod integrator_tests {
    use super::*;

    #[test]
    fn test_normalization_constant() {
        // c = gamma((dof+1)/2) / (sqrt(dof*pi) * gamma(dof/2))
        let c10: f64 = TDistIntegrator::normalization_constant(10).expect("valid dof");
        assert_approx_eq(c10, 0.38910838396603126, 1.0e-12);

        let c5: f64 = TDistIntegrator::normalization_constant(5).expect("valid dof");
        assert_approx_eq(c5, 0.37960668982249446, 1.0e-12);
    }

    #[test]
    fn test_single_estimates() {
        let integrator: TDistIntegrator =
            TDistIntegrator::new(10, 1.0).expect("valid parameters");

        assert_approx_eq(
            integrator.estimate(10).expect("even panel count"),
            0.3295536818833793,
            1.0e-12,
        );
        assert_approx_eq(
            integrator.estimate(20).expect("even panel count"),
            0.3295534493259675,
            1.0e-12,
        );
    }

    #[test]
    fn test_zero_upper_bound() {
        // x = 0 yields exactly 0.0 for any valid panel count and dof
        for &dof in &[1_u64, 2, 10, 100] {
            let integrator: TDistIntegrator =
                TDistIntegrator::new(dof, 0.0).expect("valid parameters");
            for &n in &[2_usize, 10, 64, 1000] {
                assert_eq!(integrator.estimate(n).expect("even panel count"), 0.0);
            }
        }
    }

    #[test]
    fn test_negative_upper_bound_is_signed() {
        let positive: TDistIntegrator =
            TDistIntegrator::new(3, 1.5).expect("valid parameters");
        let negative: TDistIntegrator =
            TDistIntegrator::new(3, -1.5).expect("valid parameters");

        let p: f64 = positive.estimate(20).expect("even panel count");
        let n: f64 = negative.estimate(20).expect("even panel count");

        // the density is symmetric arround 0, so the signed integrals mirror
        assert_approx_eq(p, -n, 1.0e-12);
        assert!(n < 0.0);
    }

    #[test]
    fn test_large_dof_approaches_standard_normal() {
        // For dof = 1000 the t density is almost a standard normal:
        // integral {0 -> 2} ~= normal_cdf(2) - 0.5 = 0.4772498...
        let integrator: TDistIntegrator =
            TDistIntegrator::new(1000, 2.0).expect("valid parameters");
        let estimate: f64 = integrator.estimate(20).expect("even panel count");
        assert_approx_eq(estimate, 0.4772498680518208, 1.0e-3);
    }

    #[test]
    fn test_panel_set_shape() {
        let integrator: TDistIntegrator =
            TDistIntegrator::new(10, 1.0).expect("valid parameters");
        let panel_set = integrator.build_panel_set(10).expect("valid panel count");

        assert_eq!(panel_set.abscissas.len(), 11);
        assert_eq!(panel_set.base_terms.len(), 11);
        assert_eq!(panel_set.densities.len(), 11);

        assert_eq!(panel_set.abscissas[0], 0.0);
        assert_approx_eq(panel_set.abscissas[10], 1.0, 1.0e-15);
        // base term at 0 is always 1, so f(0) is the normalization constant
        assert_eq!(panel_set.base_terms[0], 1.0);
        assert_approx_eq(panel_set.densities[0], 0.38910838396603126, 1.0e-12);
    }

    #[test]
    fn test_odd_panel_counts_rejected() {
        let integrator: TDistIntegrator =
            TDistIntegrator::new(10, 1.0).expect("valid parameters");

        assert_eq!(integrator.estimate(3), Err(QuadratureError::InvalidPanelCount));
        assert_eq!(integrator.estimate(11), Err(QuadratureError::InvalidPanelCount));
        assert_eq!(integrator.estimate(0), Err(QuadratureError::InvalidPanelCount));
        assert_eq!(integrator.estimate(1), Err(QuadratureError::InvalidPanelCount));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(matches!(
            TDistIntegrator::new(0, 1.0),
            Err(QuadratureError::InvalidDegreesOfFreedom)
        ));
        assert!(matches!(
            TDistIntegrator::new(10, f64::INFINITY),
            Err(QuadratureError::InvalidUpperBound)
        ));
        assert!(matches!(
            TDistIntegrator::new(10, f64::NAN),
            Err(QuadratureError::InvalidUpperBound)
        ));
    }
}

#[cfg(test)]
mod solver_tests {
    use super::*;

    #[test]
    fn test_converged_values() {
        let result: Convergence = solve()
            .degrees_of_freedom(10)
            .upper_bound(1.0)
            .call()
            .expect("well conditioned input");
        assert_approx_eq(result.estimate, 0.32955, 1.0e-4);

        let result: Convergence = solve()
            .degrees_of_freedom(5)
            .upper_bound(2.0)
            .call()
            .expect("well conditioned input");
        assert_approx_eq(result.estimate, 0.44903, 1.0e-4);
    }

    #[test]
    fn test_zero_upper_bound_is_exact() {
        let result: Convergence = solve()
            .degrees_of_freedom(1)
            .upper_bound(0.0)
            .call()
            .expect("well conditioned input");
        assert_eq!(result.estimate, 0.0);
    }

    #[test]
    fn test_terminates_within_a_few_doublings() {
        // dof = 10, x = 1 must converge to 1e-5 within 10 doublings
        let result: Convergence = solve()
            .degrees_of_freedom(10)
            .upper_bound(1.0)
            .call()
            .expect("well conditioned input");
        assert!(result.refinements <= 10);
        assert_eq!(result.panel_count, 10 << result.refinements);
    }

    #[test]
    fn test_successive_estimates_are_cauchy() {
        // the refinement is only sound if successive differences shrink
        let integrator: TDistIntegrator =
            TDistIntegrator::new(10, 1.0).expect("valid parameters");

        let e10: f64 = integrator.estimate(10).expect("even panel count");
        let e20: f64 = integrator.estimate(20).expect("even panel count");
        let e40: f64 = integrator.estimate(40).expect("even panel count");

        assert!((e40 - e20).abs() < (e20 - e10).abs());
    }

    #[test]
    fn test_large_dof_converges() {
        // the log-space normalization constant keeps large dof finite,
        // otherwise this input would never converge
        let result: Convergence = solve()
            .degrees_of_freedom(1000)
            .upper_bound(2.0)
            .call()
            .expect("well conditioned input");
        assert_approx_eq(result.estimate, 0.4772498680518208, 1.0e-3);
    }

    #[test]
    fn test_deterministic() {
        let a: Convergence = solve()
            .degrees_of_freedom(7)
            .upper_bound(1.25)
            .call()
            .expect("well conditioned input");
        let b: Convergence = solve()
            .degrees_of_freedom(7)
            .upper_bound(1.25)
            .call()
            .expect("well conditioned input");
        assert_eq!(a, b);
    }

    #[test]
    fn test_ceiling_surfaces_convergence_failure() {
        // with a ceiling below the first doubling, the loop must give up
        // immediately instead of refining forever
        let result = solve()
            .degrees_of_freedom(10)
            .upper_bound(1.0)
            .max_panel_count(15)
            .call();

        assert!(matches!(
            result,
            Err(QuadratureError::ConvergenceFailure { panel_count: 10, .. })
        ));
    }

    #[test]
    fn test_odd_initial_panel_count_rejected() {
        let result = solve()
            .degrees_of_freedom(10)
            .upper_bound(1.0)
            .initial_panel_count(3)
            .call();
        assert!(matches!(result, Err(QuadratureError::InvalidPanelCount)));
    }

    #[test]
    fn test_custom_tolerance_refines_further() {
        let loose: Convergence = solve()
            .degrees_of_freedom(10)
            .upper_bound(1.0)
            .tolerance(1.0e-3)
            .call()
            .expect("well conditioned input");
        let tight: Convergence = solve()
            .degrees_of_freedom(10)
            .upper_bound(1.0)
            .tolerance(1.0e-9)
            .call()
            .expect("well conditioned input");

        assert!(loose.panel_count <= tight.panel_count);
        assert_approx_eq(tight.estimate, 0.3295534493259675, 1.0e-7);
    }
}
