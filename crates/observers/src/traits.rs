//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasIter`]: events that carry an iteration or step number
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numeth_core::Observer;
//! use numeth_observers::traits::{CanStopEarly, HasIter};
//! use numeth_solvers::{equation, ode::rk4};
//!
//! /// Stops any solver after a fixed number of iterations.
//! struct Budget(usize);
//!
//! impl<E: HasIter, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iter() >= self.0).then(A::stop_early)
//!     }
//! }
//!
//! let f = |x: f64| x * x - 2.0;
//! let config = equation::Config::default();
//! let solution = equation::bisection::solve(&f, [0.0, 2.0], &config, Budget(5))?;
//! assert_eq!(solution.status, equation::Status::StoppedByObserver);
//!
//! let growth = |_x: f64, y: f64| y;
//! let solution = rk4::solve(&growth, 0.0, 1.0, 1.0, 0.1, Budget(5))?;
//! assert_eq!(solution.steps, 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use numeth_solvers::{equation, ode::rk4};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event numbered by iteration or step, starting at 1.
pub trait HasIter {
    /// Returns the iteration number for this event.
    fn iter(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for equation::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasIter for equation::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasIter for rk4::Event {
    fn iter(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for equation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
