//! Core traits for the numeth solvers.
//!
//! This crate defines the abstractions shared by the root finders, the ODE
//! integrator, and reusable observers:
//!
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;

pub use observer::Observer;
