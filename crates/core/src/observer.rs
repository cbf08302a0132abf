/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling logging, iteration tracing, or early stopping.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tick(usize);

    fn drive<Obs: Observer<Tick, &'static str>>(mut observer: Obs, ticks: usize) -> Option<usize> {
        (1..=ticks).find(|&n| observer.observe(&Tick(n)).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |tick: &Tick| (tick.0 == 4).then_some("stop");
        assert_eq!(drive(observer, 10), Some(4));
    }

    #[test]
    fn closure_observer_keeps_state() {
        let mut seen = Vec::new();
        let observer = |tick: &Tick| {
            seen.push(tick.0);
            None
        };
        assert_eq!(drive(observer, 3), None);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
