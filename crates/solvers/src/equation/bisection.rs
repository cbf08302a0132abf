//! Bisection root finding.
//!
//! Each iteration evaluates the bracket midpoint and keeps the half whose
//! endpoint residuals still differ in sign. The first midpoint is the
//! initial estimate.
//!
//! Bisection cannot detect a bracket without a sign change. Such a bracket
//! narrows toward one endpoint until the iteration cap is reached, giving
//! [`Status::NotConverged`](super::Status::NotConverged).

use numeth_core::Observer;

use super::{
    Action, Config, Degeneracy, Error, Event, Solution, Strategy,
    bracket::{Bounds, Bracket},
    control::{Update, iterate},
    point::Point,
};

/// Finds a root of `function` within `bracket` by bisection.
///
/// The bracket is used in the order given; if `bracket[0] > bracket[1]` the
/// solution carries [`Warning::InvertedBracket`](super::Warning::InvertedBracket).
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if an endpoint is non-finite or both
/// endpoints are equal.
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
    let initial = Point::eval(function, bracket.midpoint());
    bracket.narrow(initial);

    let update = Halving { function, bracket };
    iterate(Strategy::Bisection, update, initial, config, observer)
        .map(|solution| solution.with_warning(warning))
}

/// Finds a root of `function` within `bracket` by bisection, without observation.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if an endpoint is non-finite or both
/// endpoints are equal.
pub fn solve_unobserved<F>(function: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    solve(function, bracket, config, ())
}

struct Halving<'f, F: ?Sized> {
    function: &'f F,
    bracket: Bracket,
}

impl<F> Update for Halving<'_, F>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn next(&mut self, _iter: usize) -> Result<Point, Degeneracy> {
        let point = Point::eval(self.function, self.bracket.midpoint());
        self.bracket.narrow(point);
        Ok(point)
    }

    fn bracket(&self) -> Option<[f64; 2]> {
        Some(self.bracket.as_array())
    }
}
