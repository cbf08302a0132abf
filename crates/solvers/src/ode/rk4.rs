//! Classical fourth-order Runge-Kutta integration with a fixed step.
//!
//! Integrates `dy/dx = f(x, y)` from `(x0, y0)` toward `x_max`:
//!
//! ```text
//! k1 = dx f(x, y)
//! k2 = dx f(x + dx/2, y + k1/2)
//! k3 = dx f(x + dx/2, y + k2/2)
//! k4 = dx f(x + dx, y + k3)
//! y  <- y + (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```
//!
//! A step is taken while the current `x` is below `x_max`, so the last
//! sample may lie past it by less than one step. The initial point is not a
//! sample. Step `n` is placed at `x0 + n * dx` rather than by repeated
//! addition.
//!
//! # Example
//!
//! ```
//! use numeth_solvers::ode::rk4;
//!
//! let growth = |_x: f64, y: f64| y;
//! let last = rk4::steps(&growth, 0.0, 1.0, 1.0, 0.01)?
//!     .last()
//!     .map(|sample| sample.y);
//!
//! assert!(last.is_some_and(|y| (y - std::f64::consts::E).abs() < 1e-6));
//! # Ok::<(), rk4::Error>(())
//! ```

mod action;
mod error;
mod event;
mod solution;
mod steps;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use steps::{Sample, Steps};

use numeth_core::Observer;

/// Returns the lazy sequence of samples from `(x0, y0)` toward `x_max`.
///
/// An `x_max` at or below `x0` gives an empty sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidStep`] if `dx` is not finite and positive, and
/// [`Error::NonFinite`] if `x0`, `y0`, or `x_max` is not finite.
pub fn steps<F>(rate: &F, x0: f64, y0: f64, x_max: f64, dx: f64) -> Result<Steps<'_, F>, Error>
where
    F: Fn(f64, f64) -> f64 + ?Sized,
{
    Steps::new(rate, x0, y0, x_max, dx)
}

/// Integrates from `(x0, y0)` toward `x_max`, collecting every sample.
///
/// The observer receives an [`Event`] after each step and may return
/// [`Action::StopEarly`] to end the integration.
///
/// # Errors
///
/// See [`steps`].
pub fn solve<F, Obs>(
    rate: &F,
    x0: f64,
    y0: f64,
    x_max: f64,
    dx: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64, f64) -> f64 + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut samples = Vec::new();

    for (index, sample) in steps(rate, x0, y0, x_max, dx)?.enumerate() {
        samples.push(sample);

        let event = Event {
            step: index + 1,
            sample,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("rk4 stopped by observer after {} steps", event.step);
            return Ok(Solution {
                status: Status::StoppedByObserver,
                steps: samples.len(),
                samples,
            });
        }
    }

    log::debug!("rk4 completed {} steps", samples.len());

    Ok(Solution {
        status: Status::Complete,
        steps: samples.len(),
        samples,
    })
}

/// Integrates from `(x0, y0)` toward `x_max` without observation.
///
/// # Errors
///
/// See [`steps`].
pub fn solve_unobserved<F>(
    rate: &F,
    x0: f64,
    y0: f64,
    x_max: f64,
    dx: f64,
) -> Result<Solution, Error>
where
    F: Fn(f64, f64) -> f64 + ?Sized,
{
    solve(rate, x0, y0, x_max, dx, ())
}
