/// Indicates how a root solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual satisfied the tolerance before the iteration cap.
    Converged,

    /// The iteration cap was reached.
    NotConverged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A non-fatal condition detected while validating the starting data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// The bracket was given with `lower > upper`; the solve proceeded anyway.
    InvertedBracket { lower: f64, upper: f64 },
}

/// The result of a root solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the solve terminated.
    pub status: Status,

    /// Final estimate of the root.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Number of update iterations performed.
    pub iters: usize,

    /// Warning raised during input validation, if any.
    pub warning: Option<Warning>,
}

impl Solution {
    /// Returns true if the solve converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the root estimate if the solve converged.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.is_converged().then_some(self.x)
    }

    pub(super) fn with_warning(self, warning: Option<Warning>) -> Self {
        Self { warning, ..self }
    }
}
