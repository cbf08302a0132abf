/// Control actions supported by the RK4 integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the integrator early and return the samples so far.
    StopEarly,
}
