use thiserror::Error;

/// An enum that indicates what went wrong in a [Gamma](crate::gamma) evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GammaError {
    /// The argument was an integer but not a positive one. Gamma is not
    /// defined for integers `<= 0`.
    #[error("Gamma is not defined for integers <= 0. ")]
    InvalidArgument,
    /// The argument was neither an integer nor a half-integer. This library
    /// deliberately does not implement the general Gamma function.
    #[error(
        "The Gamma function is only implemented for positive integer and half-integer arguments. "
    )]
    UnsupportedArgument,
}

/// An enum that indicates what went wrong with a quadrature computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// The Gamma evaluation inside the normalization constant failed.
    #[error("Gamma evaluation failed: {0}")]
    Gamma(#[from] GammaError),
    /// The panel count was odd or smaller than 2. Simpson's rule requieres
    /// an even number of panels.
    #[error("The panel count must be even and at least 2. ")]
    InvalidPanelCount,
    /// The degrees of freedom must be a positive integer (`1 <= dof`).
    #[error("The degrees of freedom must be a positive integer (1 <= dof). ")]
    InvalidDegreesOfFreedom,
    /// The upper bound of integration was not finite (`+-inf` or NaN).
    #[error("The upper bound of integration must be finite. ")]
    InvalidUpperBound,
    /// The refinement loop reached the maximum panel count without 2
    /// successive estimates agreeing within the tolerance.
    #[error(
        "The refinement did not converge: panel count reached {panel_count} with a last difference of {last_difference}. "
    )]
    ConvergenceFailure {
        /// The last panel count that was evaluated.
        panel_count: usize,
        /// `|current - previous|` of the last pair of estimates.
        last_difference: f64,
    },
}

/// An enum that indicates what went wrong while processing a batch of records.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Reading the input or writing the output failed.
    #[error("IO error while processing the batch: {0}")]
    Io(#[from] std::io::Error),
    /// The computation of one record failed. No partial result is emitted
    /// for that record and the batch is aborted.
    #[error("Quadrature error while processing the batch: {0}")]
    Quadrature(#[from] QuadratureError),
}
