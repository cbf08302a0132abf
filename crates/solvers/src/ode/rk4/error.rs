use thiserror::Error;

/// Errors that can occur when setting up an RK4 integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("step size must be finite and positive, got {dx}")]
    InvalidStep { dx: f64 },

    #[error("starting value is not finite: {value}")]
    NonFinite { value: f64 },
}
