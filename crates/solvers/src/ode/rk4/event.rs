use std::fmt;

use super::Sample;

/// Event emitted by the RK4 integrator after each step.
///
/// Steps are numbered from 1; the initial point produces no event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number.
    pub step: usize,

    /// The sample produced by this step.
    pub sample: Sample,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rk4 step {}: x = {:e}, y = {:e}",
            self.step, self.sample.x, self.sample.y
        )
    }
}
