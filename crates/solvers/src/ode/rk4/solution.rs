use super::Sample;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the upper bound.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK4 integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// Samples from each step, excluding the initial point.
    pub samples: Vec<Sample>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the last sample, if any step ran.
    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }
}
