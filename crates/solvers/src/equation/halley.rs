//! Halley root finding.
//!
//! Halley's method uses the first and second derivatives for cubic
//! convergence near a simple root:
//!
//! ```text
//! x <- x - 2 f f' / (2 f'^2 - f f'')
//! ```
//!
//! The guess itself is the initial estimate. Unlike
//! [`newton_raphson`](super::newton_raphson), there is no check of the
//! derivative at the guess; only a zero denominator during an update is
//! reported, as [`Degeneracy::ZeroHalleyDenominator`].

use numeth_core::Observer;

use super::{
    Action, Config, Degeneracy, Error, Event, InputError, Solution, Strategy,
    control::{Update, iterate},
    point::Point,
};

/// Finds a root of `function` by Halley iteration from `guess`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the guess is non-finite, and
/// [`Error::Degenerate`] if the update denominator is zero.
pub fn solve<F, D1, D2, Obs>(
    function: &F,
    derivative: &D1,
    second_derivative: &D2,
    guess: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
    D1: Fn(f64) -> f64 + ?Sized,
    D2: Fn(f64) -> f64 + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !guess.is_finite() {
        return Err(InputError::NonFinite { value: guess }.into());
    }

    let initial = Point::eval(function, guess);
    let update = Osculating {
        function,
        derivative,
        second_derivative,
        current: initial,
    };

    iterate(Strategy::Halley, update, initial, config, observer)
}

/// Finds a root of `function` by Halley iteration, without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D1, D2>(
    function: &F,
    derivative: &D1,
    second_derivative: &D2,
    guess: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
    D1: Fn(f64) -> f64 + ?Sized,
    D2: Fn(f64) -> f64 + ?Sized,
{
    solve(function, derivative, second_derivative, guess, config, ())
}

struct Osculating<'f, F: ?Sized, D1: ?Sized, D2: ?Sized> {
    function: &'f F,
    derivative: &'f D1,
    second_derivative: &'f D2,
    current: Point,
}

impl<F, D1, D2> Update for Osculating<'_, F, D1, D2>
where
    F: Fn(f64) -> f64 + ?Sized,
    D1: Fn(f64) -> f64 + ?Sized,
    D2: Fn(f64) -> f64 + ?Sized,
{
    fn next(&mut self, iter: usize) -> Result<Point, Degeneracy> {
        let Point { x, residual } = self.current;
        let d1 = (self.derivative)(x);
        let d2 = (self.second_derivative)(x);

        let denominator = 2.0 * d1 * d1 - residual * d2;

        #[allow(clippy::float_cmp)]
        if denominator == 0.0 {
            return Err(Degeneracy::ZeroHalleyDenominator { x, iter });
        }

        self.current = Point::eval(self.function, x - 2.0 * residual * d1 / denominator);
        Ok(self.current)
    }
}
