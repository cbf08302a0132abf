/// An abscissa and the residual evaluated there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Point {
    pub(super) x: f64,
    pub(super) residual: f64,
}

impl Point {
    /// Evaluates `function` at `x`.
    pub(super) fn eval<F>(function: &F, x: f64) -> Self
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        Self {
            x,
            residual: function(x),
        }
    }
}
