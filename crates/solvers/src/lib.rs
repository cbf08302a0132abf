//! Numerical solvers for scalar problems.
//!
//! - [`equation`]: root finding for `f(x) = 0` by bisection, regula falsi,
//!   secant, Newton-Raphson, and Halley iterations
//! - [`ode`]: fixed-step integration of `dy/dx = f(x, y)`

pub mod equation;
pub mod ode;
