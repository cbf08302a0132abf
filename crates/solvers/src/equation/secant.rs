//! Secant root finding.
//!
//! The secant method keeps a window of the two most recent points and
//! replaces the older one with the root of the line through both:
//!
//! ```text
//! x2 = (x0 * f1 - x1 * f0) / (f1 - f0)
//! ```
//!
//! No bracket is maintained, so the iteration may diverge; divergence shows
//! up as [`Status::NotConverged`](super::Status::NotConverged). The first
//! secant point is the initial estimate.

use numeth_core::Observer;

use super::{
    Action, Config, Degeneracy, Error, Event, InputError, Solution, Strategy,
    control::{Update, iterate},
    point::Point,
};

/// Finds a root of `function` by the secant method from two guesses.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if a guess is non-finite or the guesses
/// are equal, and [`Error::Degenerate`] if the residuals in the window
/// become equal.
pub fn solve<F, Obs>(
    function: &F,
    guesses: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [first, second] = guesses;
    for value in guesses {
        if !value.is_finite() {
            return Err(InputError::NonFinite { value }.into());
        }
    }

    #[allow(clippy::float_cmp)]
    if first == second {
        return Err(InputError::EqualGuesses { value: first }.into());
    }

    let mut window = Window {
        function,
        previous: Point::eval(function, first),
        current: Point::eval(function, second),
    };
    let initial = window.next(0)?;

    iterate(Strategy::Secant, window, initial, config, observer)
}

/// Finds a root of `function` by the secant method, without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(function: &F, guesses: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    solve(function, guesses, config, ())
}

struct Window<'f, F: ?Sized> {
    function: &'f F,
    previous: Point,
    current: Point,
}

impl<F> Update for Window<'_, F>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn next(&mut self, iter: usize) -> Result<Point, Degeneracy> {
        let Point { x: x0, residual: f0 } = self.previous;
        let Point { x: x1, residual: f1 } = self.current;

        #[allow(clippy::float_cmp)]
        if f1 == f0 {
            return Err(Degeneracy::EqualSecantResiduals {
                previous: x0,
                current: x1,
                residual: f1,
                iter,
            });
        }

        let next = Point::eval(self.function, (x0 * f1 - x1 * f0) / (f1 - f0));
        self.previous = self.current;
        self.current = next;
        Ok(next)
    }
}
