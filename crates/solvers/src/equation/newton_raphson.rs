//! Newton-Raphson root finding.
//!
//! Each iteration follows the tangent line to its root:
//! `x <- x - f(x) / f'(x)`. The guess itself is the initial estimate.
//!
//! A zero derivative at the guess is rejected before any check of the
//! residual, so a guess that is already a root but has a flat tangent still
//! fails with [`Degeneracy::ZeroDerivative`]. The derivative is checked again
//! before every update.

use numeth_core::Observer;

use super::{
    Action, Config, Degeneracy, Error, Event, InputError, Solution, Strategy,
    control::{Update, iterate},
    point::Point,
};

/// Finds a root of `function` by Newton-Raphson iteration from `guess`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the guess is non-finite, and
/// [`Error::Degenerate`] if the derivative is zero at the guess or at any
/// later estimate.
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    guess: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
    D: Fn(f64) -> f64 + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !guess.is_finite() {
        return Err(InputError::NonFinite { value: guess }.into());
    }

    #[allow(clippy::float_cmp)]
    if derivative(guess) == 0.0 {
        return Err(Degeneracy::ZeroDerivative { x: guess, iter: 0 }.into());
    }

    let initial = Point::eval(function, guess);
    let update = Tangent {
        function,
        derivative,
        current: initial,
    };

    iterate(Strategy::NewtonRaphson, update, initial, config, observer)
}

/// Finds a root of `function` by Newton-Raphson iteration, without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(
    function: &F,
    derivative: &D,
    guess: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
    D: Fn(f64) -> f64 + ?Sized,
{
    solve(function, derivative, guess, config, ())
}

struct Tangent<'f, F: ?Sized, D: ?Sized> {
    function: &'f F,
    derivative: &'f D,
    current: Point,
}

impl<F, D> Update for Tangent<'_, F, D>
where
    F: Fn(f64) -> f64 + ?Sized,
    D: Fn(f64) -> f64 + ?Sized,
{
    fn next(&mut self, iter: usize) -> Result<Point, Degeneracy> {
        let Point { x, residual } = self.current;
        let slope = (self.derivative)(x);

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Err(Degeneracy::ZeroDerivative { x, iter });
        }

        self.current = Point::eval(self.function, x - residual / slope);
        Ok(self.current)
    }
}
