use numeth_core::Observer;

use super::{
    Action, Config, Degeneracy, Error, Event, Solution, Status, Strategy, point::Point,
};

/// A strategy-specific update rule driven by [`iterate`].
pub(super) trait Update {
    /// Computes and evaluates the next estimate for iteration `iter`.
    fn next(&mut self, iter: usize) -> Result<Point, Degeneracy>;

    /// Returns the current bracket, for bracketing strategies.
    fn bracket(&self) -> Option<[f64; 2]> {
        None
    }
}

/// Runs the shared iteration loop from an initial estimate.
///
/// The loop continues while the residual is outside tolerance and fewer than
/// `max_iters` updates have run. Exhausting the cap is reported as
/// [`Status::NotConverged`] regardless of the final residual.
pub(super) fn iterate<U, Obs>(
    strategy: Strategy,
    mut update: U,
    initial: Point,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    U: Update,
    Obs: Observer<Event, Action>,
{
    let mut current = initial;
    let mut iter = 0;

    while !config.is_converged(current.residual) && iter < config.max_iters() {
        let bracket = update.bracket();
        current = update.next(iter + 1)?;
        iter += 1;

        log::trace!(
            "{strategy} iter {iter}: x = {:e}, f(x) = {:e}",
            current.x,
            current.residual
        );

        let event = Event {
            strategy,
            iter,
            x: current.x,
            residual: current.residual,
            bracket,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("{strategy} stopped by observer after {iter} iterations");
            return Ok(finish(Status::StoppedByObserver, current, iter));
        }
    }

    let status = if iter >= config.max_iters() {
        Status::NotConverged
    } else {
        Status::Converged
    };

    log::debug!(
        "{strategy} finished ({status:?}) after {iter} iterations: x = {:e}, f(x) = {:e}",
        current.x,
        current.residual
    );

    Ok(finish(status, current, iter))
}

fn finish(status: Status, point: Point, iters: usize) -> Solution {
    Solution {
        status,
        x: point.x,
        residual: point.residual,
        iters,
        warning: None,
    }
}
