
//! This file contains the deafult values and other value choices used trough the library.
//!

/// The initial number of panels used by the [solver](crate::solver).
///
/// The refinement loop starts with this many panels and doubles on every
/// iteration, therefore the panel count is always even as
/// [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// requieres. Must be even and at least 2.
pub static DEFAULT_INITIAL_PANEL_COUNT: usize = 10;

/// The deafult convergence tolerance of the [solver](crate::solver).
///
/// When 2 successive Simpson estimates (at `N` and `2*N` panels) differ by
/// this much or less, the refinement stops and the last estimate is accepted.
pub static DEFAULT_CONVERGENCE_TOLERANCE: f64 = 0.00001;

/// The epsilon used to decide if a float is *an integer* (or a half-integer)
/// in the [gamma](crate::gamma) module.
///
/// An explicit epsilon (instead of a generic float comparison) keeps the
/// integer / half-integer classification reproducible across platforms.
pub static INTEGER_DETECTION_EPSILON: f64 = 1.0e-10;

/// The maximum number of panels the [solver](crate::solver) is allowed to
/// reach while refining. `1 << 23 = 8 388 608`
///
/// Well conditioned inputs converge with a few dozen panels, so this ceiling
/// is only ever hit when the estimates fail to stabilize (for example when
/// an intermediate value overflowed to `inf` or `NaN`, in wich case no
/// amount of panels will ever converge). Hitting the ceiling surfaces a
/// [ConvergenceFailure](crate::errors::QuadratureError::ConvergenceFailure)
/// instead of looping forever.
pub static DEFAULT_MAX_PANEL_COUNT: usize = 1 << 23;
