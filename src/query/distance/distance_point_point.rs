use crate::math::{Point, Vector};
use crate::query::{DistanceOptions, DistanceQuery, Separation};
use na::{RealField, Scalar};

/// Distance queries between two points.
///
/// The derivatives of the dynamic distance are computed exactly: no finite-difference
/// approximation is involved.
#[derive(Copy, Clone, Debug)]
pub struct DistPointPoint<'a, T: Scalar, const D: usize> {
    point0: &'a Point<T, D>,
    point1: &'a Point<T, D>,
    options: DistanceOptions<T>,
}

impl<'a, T: RealField + Copy, const D: usize> DistPointPoint<'a, T, D> {
    /// Distance queries between `point0` and `point1`, with the default options.
    pub fn new(point0: &'a Point<T, D>, point1: &'a Point<T, D>) -> Self {
        Self::with_options(point0, point1, DistanceOptions::default())
    }

    /// Distance queries between `point0` and `point1`, with the given options.
    pub fn with_options(
        point0: &'a Point<T, D>,
        point1: &'a Point<T, D>,
        options: DistanceOptions<T>,
    ) -> Self {
        Self {
            point0,
            point1,
            options,
        }
    }

    /// The first point.
    pub fn point0(&self) -> &'a Point<T, D> {
        self.point0
    }

    /// The second point.
    pub fn point1(&self) -> &'a Point<T, D> {
        self.point1
    }

    /// A mutable reference to the options of the dynamic queries.
    pub fn options_mut(&mut self) -> &mut DistanceOptions<T> {
        &mut self.options
    }

    /// The vector from the first point to the second point at time `t`.
    fn relative_position(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> Vector<T, D> {
        (self.point1 - self.point0) + (vel1 - vel0) * t
    }
}

impl<T: RealField + Copy, const D: usize> DistanceQuery<T, D> for DistPointPoint<'_, T, D> {
    fn options(&self) -> &DistanceOptions<T> {
        &self.options
    }

    fn separation_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> Separation<T, D> {
        Separation::new(self.point0 + vel0 * t, self.point1 + vel1 * t)
    }

    fn derivative_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> T {
        let delta = self.relative_position(t, vel0, vel1);
        let dist = delta.norm();

        if dist > T::zero() {
            delta.dot(&(vel1 - vel0)) / dist
        } else {
            // The distance isn't differentiable when both points coincide.
            T::zero()
        }
    }

    fn derivative_squared_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> T {
        let delta = self.relative_position(t, vel0, vel1);
        let two: T = na::convert(2.0);
        delta.dot(&(vel1 - vel0)) * two
    }
}
