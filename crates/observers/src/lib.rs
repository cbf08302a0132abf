//! Reusable observers for the numeth solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root finders and the RK4 integrator.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIter`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] forwards every event to the `log` facade.
//! - [`History`] records root-solver iterations for later inspection.
//!
//! [`Observer`]: numeth_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIter`]: traits::HasIter
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logging;

pub use history::History;
pub use logging::LogObserver;
