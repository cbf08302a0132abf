//! Solvers for scalar equations: finding `x` such that `f(x) = 0`.
//!
//! Every solver in this module shares one iteration-control contract:
//!
//! - The residual `f(x)` at the current estimate is the convergence proxy.
//!   A solve converges once `|f(x)| <= residual_tol`, which says nothing
//!   about the distance from `x` to the true root.
//! - Each strategy computes an initial estimate before iterating. If it
//!   already satisfies the tolerance, no iterations run.
//! - The loop performs at most [`Config::max_iters`] updates. A solve that
//!   uses all of them reports [`Status::NotConverged`], even if the final
//!   update happened to land within tolerance.
//!
//! Failures that make the update rule undefined (a division by zero) are
//! reported as [`Error::Degenerate`], and malformed starting data as
//! [`Error::InvalidInput`]. Neither returns an estimate.
//!
//! # Solvers
//!
//! - [`bisection`]: halves a bracket; robust but linear
//! - [`regula_falsi`]: false-position interpolation within a bracket
//! - [`secant`]: two-point interpolation without a bracket
//! - [`newton_raphson`]: tangent steps using the first derivative
//! - [`halley`]: third-order steps using first and second derivatives
//!
//! Each solver module has a `solve` function accepting an [`Observer`] and a
//! `solve_unobserved` convenience wrapper. The [`solve`] function in this
//! module dispatches on a [`Method`] for callers that pick the strategy at
//! runtime.
//!
//! [`Observer`]: numeth_core::Observer

mod action;
mod bracket;
mod config;
mod control;
mod error;
mod event;
mod method;
mod point;
mod solution;

#[cfg(test)]
mod tests;

pub mod bisection;
pub mod halley;
pub mod newton_raphson;
pub mod regula_falsi;
pub mod secant;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Degeneracy, Error, InputError};
pub use event::Event;
pub use method::{Method, Strategy};
pub use solution::{Solution, Status, Warning};

use numeth_core::Observer;

/// Finds a root of `function` using the strategy selected by `method`.
///
/// This is equivalent to calling the matching solver module directly.
///
/// # Errors
///
/// Returns an error if the starting data is invalid or the selected update
/// rule becomes degenerate.
pub fn solve<F, Obs>(
    function: &F,
    method: Method<'_>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
    Obs: Observer<Event, Action>,
{
    match method {
        Method::Bisection { bracket } => bisection::solve(function, bracket, config, observer),
        Method::RegulaFalsi { bracket } => {
            regula_falsi::solve(function, bracket, config, observer)
        }
        Method::Secant { guesses } => secant::solve(function, guesses, config, observer),
        Method::NewtonRaphson { guess, derivative } => {
            newton_raphson::solve(function, derivative, guess, config, observer)
        }
        Method::Halley {
            guess,
            derivative,
            second_derivative,
        } => halley::solve(
            function,
            derivative,
            second_derivative,
            guess,
            config,
            observer,
        ),
    }
}

/// Finds a root using the strategy selected by `method`, without observation.
///
/// # Errors
///
/// Returns an error if the starting data is invalid or the selected update
/// rule becomes degenerate.
pub fn solve_unobserved<F>(
    function: &F,
    method: Method<'_>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    solve(function, method, config, ())
}
