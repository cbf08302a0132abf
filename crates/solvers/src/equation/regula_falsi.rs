//! Regula falsi (false-position) root finding.
//!
//! Like bisection, each iteration keeps a bracket and narrows it with the
//! same sign rule. The new point comes from linear interpolation between the
//! endpoints, anchored at the lower end:
//!
//! ```text
//! x1 = x0 - f0 * (x2 - x0) / (f2 - f0)
//! ```
//!
//! The first interpolated point is the initial estimate. Equal endpoint
//! residuals make the interpolation undefined and are reported as
//! [`Degeneracy::EqualBracketResiduals`].

use numeth_core::Observer;

use super::{
    Action, Config, Degeneracy, Error, Event, Solution, Strategy,
    bracket::{Bounds, Bracket},
    control::{Update, iterate},
    point::Point,
};

/// Finds a root of `function` within `bracket` by regula falsi.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if an endpoint is non-finite or both
/// endpoints are equal, and [`Error::Degenerate`] if the endpoint residuals
/// become equal.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let warning = bounds.check_order();

    let mut bracket = bounds.evaluate(function);
    let initial = Point::eval(function, bracket.false_position(0)?);
    bracket.narrow(initial);

    let update = FalsePosition { function, bracket };
    iterate(Strategy::RegulaFalsi, update, initial, config, observer)
        .map(|solution| solution.with_warning(warning))
}

/// Finds a root of `function` within `bracket` by regula falsi, without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(function: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    solve(function, bracket, config, ())
}

struct FalsePosition<'f, F: ?Sized> {
    function: &'f F,
    bracket: Bracket,
}

impl<F> Update for FalsePosition<'_, F>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn next(&mut self, iter: usize) -> Result<Point, Degeneracy> {
        let x = self.bracket.false_position(iter)?;
        let point = Point::eval(self.function, x);
        self.bracket.narrow(point);
        Ok(point)
    }

    fn bracket(&self) -> Option<[f64; 2]> {
        Some(self.bracket.as_array())
    }
}
