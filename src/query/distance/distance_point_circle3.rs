use crate::math::{unbounded_point, Point3, Vector3};
use crate::query::{DistanceOptions, DistanceQuery, Separation};
use crate::shape::Circle3;
use na::{RealField, Scalar};

/// Closest points between a point and a circle in 3D.
///
/// When the point lies on the circle's axis (the line through the circle's center directed by its
/// normal), every point of the circle is at the same distance from the point. In that case
/// `has_multiple_closest_points1` is set, `point1` is unbounded, and the distance is
/// `sqrt(h² + r²)` where `h` is the distance from the point to the circle's center and `r` the
/// circle's radius.
///
/// The point is considered to be on the axis if its distance to the axis is smaller than or equal
/// to `zero_threshold`.
pub fn closest_points_point_circle3<T: RealField + Copy>(
    point: &Point3<T>,
    circle: &Circle3<T>,
    zero_threshold: T,
) -> Separation<T, 3> {
    // Projection of the point on the plane containing the circle, relative to the center.
    let diff = point - circle.center;
    let q = diff - *circle.normal * circle.normal.dot(&diff);
    let q_len = q.norm();

    if q_len > zero_threshold {
        let closest = circle.center + q * (circle.radius / q_len);
        Separation::new(*point, closest)
    } else {
        Separation {
            distance_squared: diff.norm_squared() + circle.radius * circle.radius,
            point0: *point,
            point1: unbounded_point(),
            has_multiple_closest_points0: false,
            has_multiple_closest_points1: true,
        }
    }
}

/// Distance queries between a point and a circle in 3D.
///
/// The first primitive is the point, the second is the circle. In dynamic queries the circle
/// translates: its normal and radius never change.
#[derive(Copy, Clone, Debug)]
pub struct DistPointCircle3<'a, T: Scalar> {
    point: &'a Point3<T>,
    circle: &'a Circle3<T>,
    options: DistanceOptions<T>,
}

impl<'a, T: RealField + Copy> DistPointCircle3<'a, T> {
    /// Distance queries between `point` and `circle`, with the default options.
    pub fn new(point: &'a Point3<T>, circle: &'a Circle3<T>) -> Self {
        Self::with_options(point, circle, DistanceOptions::default())
    }

    /// Distance queries between `point` and `circle`, with the given options.
    pub fn with_options(
        point: &'a Point3<T>,
        circle: &'a Circle3<T>,
        options: DistanceOptions<T>,
    ) -> Self {
        Self {
            point,
            circle,
            options,
        }
    }

    /// The point.
    pub fn point(&self) -> &'a Point3<T> {
        self.point
    }

    /// The circle.
    pub fn circle(&self) -> &'a Circle3<T> {
        self.circle
    }

    /// A mutable reference to the options of the dynamic queries.
    pub fn options_mut(&mut self) -> &mut DistanceOptions<T> {
        &mut self.options
    }
}

impl<T: RealField + Copy> DistanceQuery<T, 3> for DistPointCircle3<'_, T> {
    fn options(&self) -> &DistanceOptions<T> {
        &self.options
    }

    fn separation_at(&self, t: T, vel0: &Vector3<T>, vel1: &Vector3<T>) -> Separation<T, 3> {
        let point = self.point + vel0 * t;
        let circle = self.circle.translated(&(vel1 * t));
        closest_points_point_circle3(&point, &circle, self.options.zero_threshold)
    }
}
