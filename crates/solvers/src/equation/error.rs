use thiserror::Error;

/// Errors returned by the root solvers.
///
/// Running out of iterations is not an error; see
/// [`Status::NotConverged`](super::Status::NotConverged).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("degenerate update: {0}")]
    Degenerate(#[from] Degeneracy),
}

/// Malformed starting data, detected before any iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InputError {
    #[error("bracket has zero width: lower and upper are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("initial guesses are equal: both are {value}")]
    EqualGuesses { value: f64 },

    #[error("starting value is not finite: {value}")]
    NonFinite { value: f64 },
}

/// A division by zero in an update rule.
///
/// `iter` is the iteration whose update failed, where 0 means the failure
/// happened while computing the initial estimate.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    #[error(
        "equal residuals at bracket ends: f({lower}) = f({upper}) = {residual} (iteration {iter})"
    )]
    EqualBracketResiduals {
        lower: f64,
        upper: f64,
        residual: f64,
        iter: usize,
    },

    #[error(
        "equal residuals at secant points: f({previous}) = f({current}) = {residual} (iteration {iter})"
    )]
    EqualSecantResiduals {
        previous: f64,
        current: f64,
        residual: f64,
        iter: usize,
    },

    #[error("zero derivative at x = {x} (iteration {iter})")]
    ZeroDerivative { x: f64, iter: usize },

    #[error("zero Halley denominator at x = {x} (iteration {iter})")]
    ZeroHalleyDenominator { x: f64, iter: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_input_errors() {
        let err = Error::from(InputError::EqualGuesses { value: 2.0 });
        assert_eq!(
            err.to_string(),
            "invalid input: initial guesses are equal: both are 2"
        );
    }

    #[test]
    fn wraps_degeneracies() {
        let err = Error::from(Degeneracy::ZeroDerivative { x: 0.0, iter: 0 });
        assert!(matches!(
            err,
            Error::Degenerate(Degeneracy::ZeroDerivative { iter: 0, .. })
        ));
        assert_eq!(
            err.to_string(),
            "degenerate update: zero derivative at x = 0 (iteration 0)"
        );
    }
}
