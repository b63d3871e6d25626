use crate::math::{unbounded_point, Point, Vector};
use crate::query::{DistanceOptions, DistanceQuery, Separation};
use crate::shape::Sphere;
use na::{RealField, Scalar};

/// Closest points between a point and a sphere.
///
/// The sphere is a surface: a point inside of it is at a nonzero distance from it. If the point
/// is at the sphere's center (up to `zero_threshold`), every point of the sphere is at the same
/// distance `radius` from it. In that case `has_multiple_closest_points1` is set and `point1` is
/// unbounded.
pub fn closest_points_point_sphere<T: RealField + Copy, const D: usize>(
    point: &Point<T, D>,
    sphere: &Sphere<T, D>,
    zero_threshold: T,
) -> Separation<T, D> {
    let dir = point - sphere.center;
    let dist_to_center = dir.norm();

    if dist_to_center > zero_threshold {
        let closest = sphere.center + dir * (sphere.radius / dist_to_center);
        Separation::new(*point, closest)
    } else {
        Separation {
            distance_squared: sphere.radius * sphere.radius,
            point0: *point,
            point1: unbounded_point(),
            has_multiple_closest_points0: false,
            has_multiple_closest_points1: true,
        }
    }
}

/// Distance queries between a point and a sphere.
#[derive(Copy, Clone, Debug)]
pub struct DistPointSphere<'a, T: Scalar, const D: usize> {
    point: &'a Point<T, D>,
    sphere: &'a Sphere<T, D>,
    options: DistanceOptions<T>,
}

impl<'a, T: RealField + Copy, const D: usize> DistPointSphere<'a, T, D> {
    /// Distance queries between `point` and `sphere`, with the default options.
    pub fn new(point: &'a Point<T, D>, sphere: &'a Sphere<T, D>) -> Self {
        Self::with_options(point, sphere, DistanceOptions::default())
    }

    /// Distance queries between `point` and `sphere`, with the given options.
    pub fn with_options(
        point: &'a Point<T, D>,
        sphere: &'a Sphere<T, D>,
        options: DistanceOptions<T>,
    ) -> Self {
        Self {
            point,
            sphere,
            options,
        }
    }

    /// The point.
    pub fn point(&self) -> &'a Point<T, D> {
        self.point
    }

    /// The sphere.
    pub fn sphere(&self) -> &'a Sphere<T, D> {
        self.sphere
    }

    /// A mutable reference to the options of the dynamic queries.
    pub fn options_mut(&mut self) -> &mut DistanceOptions<T> {
        &mut self.options
    }
}

impl<T: RealField + Copy, const D: usize> DistanceQuery<T, D> for DistPointSphere<'_, T, D> {
    fn options(&self) -> &DistanceOptions<T> {
        &self.options
    }

    fn separation_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> Separation<T, D> {
        let point = self.point + vel0 * t;
        let sphere = self.sphere.translated(&(vel1 * t));
        closest_points_point_sphere(&point, &sphere, self.options.zero_threshold)
    }
}
