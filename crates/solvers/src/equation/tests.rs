use approx::assert_relative_eq;

use super::*;

fn f(x: f64) -> f64 {
    (x + 2.0).powi(2) - 3.0
}

fn df(x: f64) -> f64 {
    2.0 * (x + 2.0)
}

fn ddf(_: f64) -> f64 {
    2.0
}

/// One method of each strategy, all started near the root of `f` at `sqrt(3) - 2`.
fn methods() -> [Method<'static>; 5] {
    [
        Method::Bisection {
            bracket: [-2.0, 0.0],
        },
        Method::RegulaFalsi {
            bracket: [-2.0, 0.0],
        },
        Method::Secant {
            guesses: [-1.0, 0.0],
        },
        Method::NewtonRaphson {
            guess: 0.0,
            derivative: &df,
        },
        Method::Halley {
            guess: 0.0,
            derivative: &df,
            second_derivative: &ddf,
        },
    ]
}

#[test]
fn every_strategy_converges_within_tolerance() {
    let config = Config::new(1000, 1e-9).expect("valid config");

    for method in methods() {
        let solution = solve_unobserved(&f, method, &config).expect("no error");

        assert!(solution.is_converged(), "{method:?} did not converge");
        assert!(solution.residual.abs() <= config.residual_tol());
        assert_relative_eq!(solution.residual, f(solution.x));
        assert_relative_eq!(solution.x, 3f64.sqrt() - 2.0, epsilon = 1e-8);
        assert_eq!(solution.root(), Some(solution.x));
    }
}

#[test]
fn dispatch_matches_direct_calls() {
    let config = Config::new(100, 1e-10).expect("valid config");

    let direct = bisection::solve_unobserved(&f, [-2.0, 0.0], &config).expect("no error");
    let dispatched = solve_unobserved(
        &f,
        Method::Bisection {
            bracket: [-2.0, 0.0],
        },
        &config,
    )
    .expect("no error");
    assert_eq!(direct, dispatched);

    let direct = halley::solve_unobserved(&f, &df, &ddf, 0.0, &config).expect("no error");
    let dispatched = solve_unobserved(&f, methods()[4], &config).expect("no error");
    assert_eq!(direct, dispatched);
}

#[test]
fn open_methods_beat_bisection() {
    let config = Config::new(1000, 1e-10).expect("valid config");
    let iters = |method| {
        solve_unobserved(&f, method, &config)
            .expect("no error")
            .iters
    };

    let [bisection, _, secant, newton, halley] = methods().map(iters);

    assert!(secant < bisection, "secant {secant} vs bisection {bisection}");
    assert!(newton < bisection, "newton {newton} vs bisection {bisection}");
    assert!(halley < newton, "halley {halley} vs newton {newton}");
}

#[test]
fn events_report_their_strategy() {
    let config = Config::new(3, 1e-15).expect("valid config");

    for method in methods() {
        let mut strategies = Vec::new();
        let observer = |event: &Event| {
            strategies.push(event.strategy);
            None
        };
        let solution = solve(&f, method, &config, observer).expect("no error");

        assert_eq!(strategies.len(), solution.iters);
        assert!(strategies.iter().all(|s| *s == method.strategy()));
    }
}

#[test]
fn observer_stop_is_reported_for_every_strategy() {
    let config = Config::new(1000, 1e-15).expect("valid config");

    for method in methods() {
        let observer = |event: &Event| (event.iter == 1).then_some(Action::StopEarly);
        let solution = solve(&f, method, &config, observer).expect("no error");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.root(), None);
    }
}

#[test]
fn only_bracketing_strategies_report_brackets() {
    let config = Config::new(1, 1e-15).expect("valid config");

    for method in methods() {
        let mut bracket = None;
        let observer = |event: &Event| {
            bracket = event.bracket;
            None
        };
        solve(&f, method, &config, observer).expect("no error");

        let bracketing = matches!(method.strategy(), Strategy::Bisection | Strategy::RegulaFalsi);
        assert_eq!(bracket.is_some(), bracketing, "{method:?}");
    }
}

#[test]
fn results_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Solution>();
    assert_send_sync::<Error>();
    assert_send_sync::<Event>();
    assert_send_sync::<Config>();
}
