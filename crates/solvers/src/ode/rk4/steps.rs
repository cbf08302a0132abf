use std::iter::FusedIterator;

use super::Error;

/// A point `(x, y)` on the integrated solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// A lazy sequence of RK4 samples.
///
/// Created by [`steps`](super::steps). Clone it to replay the sequence from
/// the start.
pub struct Steps<'f, F: ?Sized> {
    rate: &'f F,
    x0: f64,
    x_max: f64,
    dx: f64,
    step: usize,
    y: f64,
}

impl<'f, F> Steps<'f, F>
where
    F: Fn(f64, f64) -> f64 + ?Sized,
{
    pub(super) fn new(rate: &'f F, x0: f64, y0: f64, x_max: f64, dx: f64) -> Result<Self, Error> {
        if !dx.is_finite() || dx <= 0.0 {
            return Err(Error::InvalidStep { dx });
        }

        for value in [x0, y0, x_max] {
            if !value.is_finite() {
                return Err(Error::NonFinite { value });
            }
        }

        Ok(Self {
            rate,
            x0,
            x_max,
            dx,
            step: 0,
            y: y0,
        })
    }

    /// Returns the abscissa of step `n`, computed directly to avoid drift.
    #[allow(clippy::cast_precision_loss)]
    fn x_at(&self, n: usize) -> f64 {
        self.x0 + n as f64 * self.dx
    }
}

impl<F> Iterator for Steps<'_, F>
where
    F: Fn(f64, f64) -> f64 + ?Sized,
{
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let x = self.x_at(self.step);
        if x >= self.x_max {
            return None;
        }

        let dx = self.dx;
        let y = self.y;
        let half = 0.5 * dx;

        let k1 = dx * (self.rate)(x, y);
        let k2 = dx * (self.rate)(x + half, y + 0.5 * k1);
        let k3 = dx * (self.rate)(x + half, y + 0.5 * k2);
        let k4 = dx * (self.rate)(x + dx, y + k3);

        self.y = y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
        self.step += 1;

        Some(Sample {
            x: self.x_at(self.step),
            y: self.y,
        })
    }
}

impl<F> FusedIterator for Steps<'_, F> where F: Fn(f64, f64) -> f64 + ?Sized {}

impl<F: ?Sized> Clone for Steps<'_, F> {
    fn clone(&self) -> Self {
        Self {
            rate: self.rate,
            x0: self.x0,
            x_max: self.x_max,
            dx: self.dx,
            step: self.step,
            y: self.y,
        }
    }
}
