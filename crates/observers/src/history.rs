use numeth_core::Observer;
use numeth_solvers::equation::Event;

/// An observer that records every root-solver iteration.
///
/// Pass `&mut History` to a solver to keep the record after the solve
/// returns. The observer never returns an action.
///
/// # Example
///
/// ```
/// use numeth_observers::History;
/// use numeth_solvers::equation::{Config, newton_raphson};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
/// let mut history = History::new();
///
/// let solution = newton_raphson::solve(&f, &df, 1.0, &Config::default(), &mut history)?;
/// assert_eq!(history.len(), solution.iters);
/// # Ok::<(), numeth_solvers::equation::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    events: Vec<Event>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in iteration order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Returns the recorded `(iter, x, residual)` triples.
    pub fn iterates(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.events.iter().map(|e| (e.iter, e.x, e.residual))
    }

    /// Returns the ratio `|r[k + 1]| / |r[k]|` for each pair of consecutive residuals.
    ///
    /// Ratios well below one indicate fast convergence.
    #[must_use]
    pub fn contraction_ratios(&self) -> Vec<f64> {
        self.events
            .windows(2)
            .map(|pair| pair[1].residual.abs() / pair[0].residual.abs())
            .collect()
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<A> Observer<Event, A> for History {
    fn observe(&mut self, event: &Event) -> Option<A> {
        self.events.push(*event);
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the record can be read after the solve completes.
impl<A> Observer<Event, A> for &mut History {
    fn observe(&mut self, event: &Event) -> Option<A> {
        (*self).observe(event)
    }
}
