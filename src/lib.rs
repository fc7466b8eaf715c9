#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `TDistQuadrature` should have a snake case name convert the identifier to snake case: `t_dist_quadrature`"
// The rest of the names will follow the snake_case convention.

//! # T Distribution Quadrature
//!
//! This library computes the integral of the
//! [Student's t distribution](https://en.wikipedia.org/wiki/Student%27s_t-distribution)
//! density from `0` to `x` using the
//! [composite Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule),
//! doubling the number of panels until 2 successive estimates agree within a
//! fixed tolerance. It provides:
//!
//! - [x] A restricted [Gamma function](gamma) for positive integer and
//!     half-integer arguments (the only ones the t density ever needs)
//! - [x] A [Simpson integrator](integrator) of the t density over `[0, x]`
//! - [x] A [convergence solver](solver) that refines the panel count until
//!     the estimate stabilizes
//! - [x] A [batch driver](batch) that reads `(x, dof)` pairs and writes one
//!     result line per pair
//! - [x] Updated to rust 2024 version
//!
//! ## Structure
//!
//! The numerical core is [gamma], [integrator] and [solver]. The pipeline is:
//! the solver asks the integrator for one estimate per panel count, the
//! integrator asks [gamma] for the normalization constant of the density,
//! and the solver compares successive estimates and stops on convergence.
//!
//! [batch] is plain plumbing arround the core: it parses input records,
//! runs the solver once per record and formats one output line per record,
//! in input order.
//!
//! All the numerical policy values (initial panel count, tolerance, the
//! refinement ceiling...) live in [configuration].
//!
//! ## Example
//!
//! ```
//! use TDistQuadrature::solver::{Convergence, solve};
//!
//! let result: Convergence = solve()
//!     .degrees_of_freedom(10)
//!     .upper_bound(1.0)
//!     .call()
//!     .expect("well conditioned input");
//!
//! assert!((result.estimate - 0.32955).abs() < 1.0e-4);
//! ```
//!
//! ***
//!

pub mod batch;
pub mod configuration;
pub mod errors;
pub mod gamma;
pub mod integrator;
pub mod solver;
