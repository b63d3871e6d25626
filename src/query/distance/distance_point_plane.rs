use crate::math::{Point, Vector};
use crate::query::{DistanceOptions, DistanceQuery, Separation};
use crate::shape::Plane;
use na::{RealField, Scalar};

/// Closest points between a point and a plane.
#[inline]
pub fn closest_points_point_plane<T: RealField + Copy, const D: usize>(
    point: &Point<T, D>,
    plane: &Plane<T, D>,
) -> Separation<T, D> {
    let signed_dist = plane.signed_distance(point);
    let proj = point - *plane.normal * signed_dist;

    Separation {
        distance_squared: signed_dist * signed_dist,
        point0: *point,
        point1: proj,
        has_multiple_closest_points0: false,
        has_multiple_closest_points1: false,
    }
}

/// Distance queries between a point and a plane.
#[derive(Copy, Clone, Debug)]
pub struct DistPointPlane<'a, T: Scalar, const D: usize> {
    point: &'a Point<T, D>,
    plane: &'a Plane<T, D>,
    options: DistanceOptions<T>,
}

impl<'a, T: RealField + Copy, const D: usize> DistPointPlane<'a, T, D> {
    /// Distance queries between `point` and `plane`, with the default options.
    pub fn new(point: &'a Point<T, D>, plane: &'a Plane<T, D>) -> Self {
        Self::with_options(point, plane, DistanceOptions::default())
    }

    /// Distance queries between `point` and `plane`, with the given options.
    pub fn with_options(
        point: &'a Point<T, D>,
        plane: &'a Plane<T, D>,
        options: DistanceOptions<T>,
    ) -> Self {
        Self {
            point,
            plane,
            options,
        }
    }

    /// The point.
    pub fn point(&self) -> &'a Point<T, D> {
        self.point
    }

    /// The plane.
    pub fn plane(&self) -> &'a Plane<T, D> {
        self.plane
    }

    /// A mutable reference to the options of the dynamic queries.
    pub fn options_mut(&mut self) -> &mut DistanceOptions<T> {
        &mut self.options
    }
}

impl<T: RealField + Copy, const D: usize> DistanceQuery<T, D> for DistPointPlane<'_, T, D> {
    fn options(&self) -> &DistanceOptions<T> {
        &self.options
    }

    fn separation_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> Separation<T, D> {
        let point = self.point + vel0 * t;
        let plane = self.plane.translated(&(vel1 * t));
        closest_points_point_plane(&point, &plane)
    }
}
