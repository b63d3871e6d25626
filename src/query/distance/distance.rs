use crate::math::{Point, Vector};
use crate::query::details::{minimize_on_interval, MinimizationStatus};
use crate::query::{DistanceError, DistanceOptions};
use na::{RealField, Scalar};

/// The closest points between two primitives at a given configuration.
///
/// The set of closest points on one primitive is not always a single point. For example every
/// point of a circle is at the same distance from a point on the circle's axis. In that case the
/// corresponding `has_multiple_closest_points` flag is `true`, and the corresponding closest point
/// has all its coordinates set to `+infinity` instead of an arbitrary element of that set. Always
/// check the flags before using the closest points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Separation<T: Scalar, const D: usize> {
    /// The squared distance between both primitives.
    pub distance_squared: T,
    /// The point of the first primitive closest to the second primitive.
    pub point0: Point<T, D>,
    /// The point of the second primitive closest to the first primitive.
    pub point1: Point<T, D>,
    /// Is the set of points of the first primitive closest to the second primitive larger than a
    /// single point?
    pub has_multiple_closest_points0: bool,
    /// Is the set of points of the second primitive closest to the first primitive larger than a
    /// single point?
    pub has_multiple_closest_points1: bool,
}

impl<T: RealField + Copy, const D: usize> Separation<T, D> {
    /// The separation between two primitives with unique closest points `point0` and `point1`.
    #[inline]
    pub fn new(point0: Point<T, D>, point1: Point<T, D>) -> Self {
        Separation {
            distance_squared: na::distance_squared(&point0, &point1),
            point0,
            point1,
            has_multiple_closest_points0: false,
            has_multiple_closest_points1: false,
        }
    }

    /// The distance between both primitives.
    #[inline]
    pub fn distance(&self) -> T {
        self.distance_squared.sqrt()
    }

    /// Swaps the roles of both primitives.
    #[inline]
    #[must_use]
    pub fn swapped(self) -> Self {
        Separation {
            distance_squared: self.distance_squared,
            point0: self.point1,
            point1: self.point0,
            has_multiple_closest_points0: self.has_multiple_closest_points1,
            has_multiple_closest_points1: self.has_multiple_closest_points0,
        }
    }
}

/// The result of a dynamic distance query over a time interval.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalMinimum<T: Scalar, const D: usize> {
    /// The smallest distance (or squared distance, for
    /// [`DistanceQuery::min_distance_squared`]) over the interval.
    pub value: T,
    /// The time at which the smallest distance is reached.
    pub contact_time: T,
    /// The closest points at `self.contact_time`.
    pub separation: Separation<T, D>,
    /// The way the minimization terminated.
    pub status: MinimizationStatus,
}

/// Distance computation between a pair of primitives, possibly translating at constant velocities.
///
/// Implementors only have to provide [`Self::options`] and [`Self::separation_at`]. The
/// derivatives default to central finite differences with the difference step of the options,
/// and can be overridden by exact formulas. The minimization over a time interval is shared by all
/// the implementors and should not be overridden.
///
/// In all the dynamic queries, the first primitive moves with the velocity `vel0` and the
/// second primitive with the velocity `vel1`. At time `t` both primitives are translated by
/// `t * vel0` and `t * vel1` from their current positions.
pub trait DistanceQuery<T: RealField + Copy, const D: usize> {
    /// The options of the numerical algorithms used by the dynamic queries.
    fn options(&self) -> &DistanceOptions<T>;

    /// The closest points between both primitives at time `t`.
    fn separation_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> Separation<T, D>;

    /// The closest points between both primitives at their current positions.
    #[inline]
    fn separation(&self) -> Separation<T, D> {
        self.separation_at(T::zero(), &Vector::zeros(), &Vector::zeros())
    }

    /// The distance between both primitives at their current positions.
    #[inline]
    fn distance(&self) -> T {
        self.separation().distance()
    }

    /// The squared distance between both primitives at their current positions.
    #[inline]
    fn distance_squared(&self) -> T {
        self.separation().distance_squared
    }

    /// The distance between both primitives at time `t`.
    #[inline]
    fn distance_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> T {
        self.separation_at(t, vel0, vel1).distance()
    }

    /// The squared distance between both primitives at time `t`.
    #[inline]
    fn distance_squared_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> T {
        self.separation_at(t, vel0, vel1).distance_squared
    }

    /// The time derivative of the distance between both primitives, at time `t`.
    ///
    /// The default implementation uses the central difference `(f(t + h) - f(t - h)) / (2h)`
    /// where `h` is the difference step of [`Self::options`].
    fn derivative_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> T {
        self.options()
            .derivative(|s| self.distance_at(s, vel0, vel1), t)
    }

    /// The time derivative of the squared distance between both primitives, at time `t`.
    ///
    /// The default implementation uses the central difference `(f(t + h) - f(t - h)) / (2h)`
    /// where `h` is the difference step of [`Self::options`].
    fn derivative_squared_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> T {
        self.options()
            .derivative(|s| self.distance_squared_at(s, vel0, vel1), t)
    }

    /// The smallest distance between both primitives over the time interval `[tmin, tmax]`.
    ///
    /// The returned [`IntervalMinimum`] contains the time at which this distance is reached and
    /// the closest points at that time. If `tmin == tmax` the distance is evaluated directly at
    /// that time. Fails if `tmin > tmax`, or if one of them is NaN.
    fn min_distance(
        &self,
        tmin: T,
        tmax: T,
        vel0: &Vector<T, D>,
        vel1: &Vector<T, D>,
    ) -> Result<IntervalMinimum<T, D>, DistanceError<T>> {
        let minimum = minimize_on_interval(
            |t| self.distance_at(t, vel0, vel1),
            |t| self.derivative_at(t, vel0, vel1),
            tmin,
            tmax,
            self.options(),
        )?;

        Ok(IntervalMinimum {
            value: minimum.value,
            contact_time: minimum.time,
            separation: self.separation_at(minimum.time, vel0, vel1),
            status: minimum.status,
        })
    }

    /// The smallest squared distance between both primitives over the time interval `[tmin, tmax]`.
    ///
    /// See [`Self::min_distance`].
    fn min_distance_squared(
        &self,
        tmin: T,
        tmax: T,
        vel0: &Vector<T, D>,
        vel1: &Vector<T, D>,
    ) -> Result<IntervalMinimum<T, D>, DistanceError<T>> {
        let minimum = minimize_on_interval(
            |t| self.distance_squared_at(t, vel0, vel1),
            |t| self.derivative_squared_at(t, vel0, vel1),
            tmin,
            tmax,
            self.options(),
        )?;

        Ok(IntervalMinimum {
            value: minimum.value,
            contact_time: minimum.time,
            separation: self.separation_at(minimum.time, vel0, vel1),
            status: minimum.status,
        })
    }
}
