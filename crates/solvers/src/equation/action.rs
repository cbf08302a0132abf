/// Control actions supported by the root solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the estimate from the observed iteration.
    StopEarly,
}
