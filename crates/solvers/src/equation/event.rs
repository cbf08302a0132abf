use std::fmt;

use super::Strategy;

/// Event emitted by a root solver after each update iteration.
///
/// No event is emitted for the initial estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The strategy that produced this iteration.
    pub strategy: Strategy,

    /// Iteration number, starting at 1.
    pub iter: usize,

    /// The new estimate.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// The bracket the update was computed from, for bracketing strategies.
    pub bracket: Option<[f64; 2]>,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} iter {}: x = {:e}, f(x) = {:e}",
            self.strategy, self.iter, self.x, self.residual
        )?;
        if let Some([lower, upper]) = self.bracket {
            write!(f, ", bracket = [{lower:e}, {upper:e}]")?;
        }
        Ok(())
    }
}
