use super::{Degeneracy, InputError, Warning, point::Point};

/// Validated finite bracket endpoints, in the order given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Validates the bracket endpoints.
    ///
    /// Endpoints are not reordered.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if an endpoint is non-finite or the width is zero.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, InputError> {
        let [lower, upper] = bracket;

        for value in bracket {
            if !value.is_finite() {
                return Err(InputError::NonFinite { value });
            }
        }

        #[allow(clippy::float_cmp)]
        if lower == upper {
            return Err(InputError::ZeroWidthBracket { value: lower });
        }

        Ok(Self { lower, upper })
    }

    /// Returns a warning, and logs it, if the endpoints are inverted.
    pub(super) fn check_order(&self) -> Option<Warning> {
        if self.lower > self.upper {
            log::warn!(
                "bracket is inverted: lower = {} > upper = {}",
                self.lower,
                self.upper
            );
            Some(Warning::InvertedBracket {
                lower: self.lower,
                upper: self.upper,
            })
        } else {
            None
        }
    }

    /// Evaluates `function` at both endpoints.
    pub(super) fn evaluate<F>(self, function: &F) -> Bracket
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        Bracket {
            lower: Point::eval(function, self.lower),
            upper: Point::eval(function, self.upper),
        }
    }
}

/// Current bracket endpoints with their residuals.
///
/// The residuals are not required to differ in sign. Without a sign change
/// the bracket still narrows deterministically, but toward an endpoint
/// rather than a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lower: Point,
    upper: Point,
}

impl Bracket {
    /// Returns the bracket endpoints as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lower.x, self.upper.x]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.lower.x + self.upper.x)
    }

    /// Returns the false-position point anchored at the lower endpoint.
    ///
    /// # Errors
    ///
    /// Returns `Degeneracy::EqualBracketResiduals` if the endpoint residuals
    /// are exactly equal.
    pub(super) fn false_position(&self, iter: usize) -> Result<f64, Degeneracy> {
        let Point { x: x0, residual: f0 } = self.lower;
        let Point { x: x2, residual: f2 } = self.upper;

        #[allow(clippy::float_cmp)]
        if f2 == f0 {
            return Err(Degeneracy::EqualBracketResiduals {
                lower: x0,
                upper: x2,
                residual: f0,
                iter,
            });
        }

        Ok(x0 - f0 * (x2 - x0) / (f2 - f0))
    }

    /// Replaces one endpoint with `point`.
    ///
    /// If the lower residual and the new residual have the same strict sign,
    /// the lower endpoint moves; otherwise the upper endpoint moves.
    pub(super) fn narrow(&mut self, point: Point) {
        if self.lower.residual * point.residual > 0.0 {
            self.lower = point;
        } else {
            self.upper = point;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn line(x: f64) -> f64 {
        x - 1.0
    }

    #[test]
    fn rejects_zero_width() {
        assert_eq!(
            Bounds::new([1.0, 1.0]),
            Err(InputError::ZeroWidthBracket { value: 1.0 })
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(InputError::NonFinite { .. })
        ));
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(InputError::NonFinite { .. })
        ));
    }

    #[test]
    fn keeps_given_order() {
        let bounds = Bounds::new([4.0, 0.0]).expect("valid bounds");
        assert_eq!(
            bounds.check_order(),
            Some(Warning::InvertedBracket {
                lower: 4.0,
                upper: 0.0
            })
        );
        assert_eq!(bounds.evaluate(&line).as_array(), [4.0, 0.0]);

        let bounds = Bounds::new([0.0, 4.0]).expect("valid bounds");
        assert_eq!(bounds.check_order(), None);
    }

    #[test]
    fn narrows_toward_sign_change() {
        let mut bracket = Bounds::new([0.0, 4.0]).expect("valid bounds").evaluate(&line);
        assert_relative_eq!(bracket.midpoint(), 2.0);

        // f(2) > 0 and f(0) < 0, so the upper end moves.
        bracket.narrow(Point::eval(&line, 2.0));
        assert_eq!(bracket.as_array(), [0.0, 2.0]);

        // f(0.5) < 0 matches f(0), so the lower end moves.
        bracket.narrow(Point::eval(&line, 0.5));
        assert_eq!(bracket.as_array(), [0.5, 2.0]);
    }

    #[test]
    fn false_position_of_line_is_exact() {
        let bracket = Bounds::new([0.0, 4.0]).expect("valid bounds").evaluate(&line);
        let x = bracket.false_position(1).expect("distinct residuals");
        assert_relative_eq!(x, 1.0);
    }

    #[test]
    fn false_position_fails_on_equal_residuals() {
        let square = |x: f64| x * x - 1.0;
        let bracket = Bounds::new([-2.0, 2.0]).expect("valid bounds").evaluate(&square);
        assert!(matches!(
            bracket.false_position(0),
            Err(Degeneracy::EqualBracketResiduals { iter: 0, .. })
        ));
    }
}
