//! Integrators for ordinary differential equations.

pub mod rk4;
