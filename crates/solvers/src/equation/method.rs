use std::fmt;

/// Identifies which root-finding strategy produced an event or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bisection,
    RegulaFalsi,
    Secant,
    NewtonRaphson,
    Halley,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Bisection => "bisection",
            Strategy::RegulaFalsi => "regula falsi",
            Strategy::Secant => "secant",
            Strategy::NewtonRaphson => "newton-raphson",
            Strategy::Halley => "halley",
        };
        f.write_str(name)
    }
}

/// A root-finding strategy together with its starting data.
///
/// Derivative-based strategies carry their derivative functions, so a single
/// target function plus a `Method` fully describes a problem.
/// Pass it to [`solve`](super::solve).
#[derive(Clone, Copy)]
pub enum Method<'a> {
    /// Bisection over `[lower, upper]`.
    Bisection { bracket: [f64; 2] },

    /// False-position interpolation over `[lower, upper]`.
    RegulaFalsi { bracket: [f64; 2] },

    /// Secant iteration from two distinct guesses, in either order.
    Secant { guesses: [f64; 2] },

    /// Newton-Raphson iteration from one guess.
    NewtonRaphson {
        guess: f64,
        derivative: &'a dyn Fn(f64) -> f64,
    },

    /// Halley iteration from one guess.
    Halley {
        guess: f64,
        derivative: &'a dyn Fn(f64) -> f64,
        second_derivative: &'a dyn Fn(f64) -> f64,
    },
}

impl Method<'_> {
    /// Returns the strategy this method selects.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        match self {
            Method::Bisection { .. } => Strategy::Bisection,
            Method::RegulaFalsi { .. } => Strategy::RegulaFalsi,
            Method::Secant { .. } => Strategy::Secant,
            Method::NewtonRaphson { .. } => Strategy::NewtonRaphson,
            Method::Halley { .. } => Strategy::Halley,
        }
    }
}

impl fmt::Debug for Method<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Bisection { bracket } | Method::RegulaFalsi { bracket } => f
                .debug_struct("Method")
                .field("strategy", &self.strategy())
                .field("bracket", bracket)
                .finish(),
            Method::Secant { guesses } => f
                .debug_struct("Method")
                .field("strategy", &self.strategy())
                .field("guesses", guesses)
                .finish(),
            Method::NewtonRaphson { guess, .. } | Method::Halley { guess, .. } => f
                .debug_struct("Method")
                .field("strategy", &self.strategy())
                .field("guess", guess)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_matches_variant() {
        let d = |x: f64| 2.0 * x;
        let dd = |_: f64| 2.0;

        assert_eq!(
            Method::Bisection { bracket: [0.0, 1.0] }.strategy(),
            Strategy::Bisection
        );
        assert_eq!(
            Method::RegulaFalsi { bracket: [0.0, 1.0] }.strategy(),
            Strategy::RegulaFalsi
        );
        assert_eq!(
            Method::Secant { guesses: [0.0, 1.0] }.strategy(),
            Strategy::Secant
        );
        assert_eq!(
            Method::NewtonRaphson {
                guess: 1.0,
                derivative: &d
            }
            .strategy(),
            Strategy::NewtonRaphson
        );
        assert_eq!(
            Method::Halley {
                guess: 1.0,
                derivative: &d,
                second_derivative: &dd
            }
            .strategy(),
            Strategy::Halley
        );
    }

    #[test]
    fn debug_omits_derivatives() {
        let d = |x: f64| 2.0 * x;
        let method = Method::NewtonRaphson {
            guess: 1.5,
            derivative: &d,
        };
        let text = format!("{method:?}");
        assert!(text.contains("NewtonRaphson"));
        assert!(text.contains("1.5"));
    }

    #[test]
    fn strategy_display_names() {
        assert_eq!(Strategy::RegulaFalsi.to_string(), "regula falsi");
        assert_eq!(Strategy::NewtonRaphson.to_string(), "newton-raphson");
    }
}
