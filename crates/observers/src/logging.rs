use std::fmt::Display;

use log::Level;
use numeth_core::Observer;

/// An observer that forwards every event to the `log` facade.
///
/// Events are formatted with their [`Display`] impl. The observer never
/// returns an action.
///
/// # Example
///
/// ```
/// use numeth_observers::LogObserver;
/// use numeth_solvers::equation::{Config, secant};
///
/// let f = |x: f64| x.cos() - x;
/// let observer = LogObserver::new(log::Level::Debug).with_target("cosine");
/// let solution = secant::solve(&f, [0.0, 1.0], &Config::default(), observer)?;
/// assert!(solution.is_converged());
/// # Ok::<(), numeth_solvers::equation::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
}

impl LogObserver {
    /// Creates an observer that logs at `level` under the `numeth` target.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: "numeth",
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }

    /// Returns the log level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the log target.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl<E: Display, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(target: self.target, self.level, "{event}");
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use log::{LevelFilter, Log, Metadata, Record};
    use numeth_solvers::{
        equation::{self, Config, bisection},
        ode::rk4,
    };

    use super::*;

    const TARGET: &str = "numeth::observers::test";

    /// Captures messages logged under [`TARGET`].
    struct Capture(Mutex<Vec<(Level, String)>>);

    impl Log for Capture {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.target() == TARGET
        }

        fn log(&self, record: &Record<'_>) {
            if !self.enabled(record.metadata()) {
                return;
            }
            if let Ok(mut lines) = self.0.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn logs_each_event() {
        log::set_logger(&CAPTURE).expect("only this test installs a logger");
        log::set_max_level(LevelFilter::Trace);

        let f = |x: f64| x - 0.3;
        let config = Config::new(3, 1e-15).expect("valid config");
        let observer = LogObserver::new(Level::Info).with_target(TARGET);
        let solution = bisection::solve(&f, [0.0, 1.0], &config, observer).expect("no error");
        assert_eq!(solution.status, equation::Status::NotConverged);

        let growth = |_x: f64, y: f64| y;
        let observer = LogObserver::new(Level::Debug).with_target(TARGET);
        rk4::solve(&growth, 0.0, 1.0, 0.5, 0.25, observer).expect("valid input");

        let lines = CAPTURE.0.lock().expect("lock").clone();
        assert_eq!(lines.len(), 5);
        assert!(lines[..3].iter().all(|(level, _)| *level == Level::Info));
        assert!(lines[0].1.starts_with("bisection iter 1: x = "));
        assert!(lines[3].1.starts_with("rk4 step 1: x = "));
        assert_eq!(lines[4].0, Level::Debug);
    }

    #[test]
    fn defaults_to_trace() {
        let observer = LogObserver::default();
        assert_eq!(observer.level(), Level::Trace);
        assert_eq!(observer.target(), "numeth");
    }
}
