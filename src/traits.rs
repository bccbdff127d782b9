use crate::float_types::Real;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A space curve `ℝ → ℝ³` sampled by the geometry kernel.
///
/// Implementors must be referentially transparent: the kernel may evaluate
/// any `t`, in any order, repeatedly and from several threads at once.
pub trait ParametricCurve: Send + Sync {
    /// Evaluate the curve at `t`.
    fn point_at(&self, t: Real) -> Point3<Real>;

    /// The `(first_t, last_t)` parameter range the curve is defined on.
    fn domain(&self) -> (Real, Real) {
        (0.0, 1.0)
    }

    /// Returns the `t` value of sample `i` of `count` uniform steps over the domain.
    ///
    /// The last step lands exactly on `last_t` so the end of the curve is
    /// never lost to rounding.
    fn parameter_at(&self, i: usize, count: usize) -> Real {
        let (first, last) = self.domain();
        if count == 0 || i >= count {
            return last;
        }
        first + (last - first) * (i as Real / count as Real)
    }

    /// Sample `count + 1` points uniformly over the domain, endpoints included.
    fn sample(&self, count: usize) -> Vec<Point3<Real>> {
        (0..=count)
            .map(|i| self.point_at(self.parameter_at(i, count)))
            .collect()
    }

    /// Parallel version of [`ParametricCurve::sample`].
    #[cfg(feature = "parallel")]
    fn par_sample(&self, count: usize) -> Vec<Point3<Real>> {
        (0..=count)
            .into_par_iter()
            .map(|i| self.point_at(self.parameter_at(i, count)))
            .collect()
    }
}

/// Closures can stand in for curves, which keeps ad-hoc kernel adapters cheap.
impl<F> ParametricCurve for F
where
    F: Fn(Real) -> Point3<Real> + Send + Sync,
{
    fn point_at(&self, t: Real) -> Point3<Real> {
        self(t)
    }
}
