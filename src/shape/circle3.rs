//! Definition of the circle shape embedded in 3D space.

use crate::math::{Point3, Unit, Vector3};
use na::{RealField, Scalar};

/// A circle in 3D: the set of points of the plane orthogonal to `normal` passing through `center`,
/// at a distance `radius` from `center`.
///
/// Only the circle's boundary curve is represented, not the disk it encloses.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Circle3<T: Scalar> {
    /// The center of the circle.
    pub center: Point3<T>,
    /// The normal of the plane containing the circle.
    pub normal: Unit<Vector3<T>>,
    /// The radius of the circle.
    pub radius: T,
}

impl<T: RealField + Copy> Circle3<T> {
    /// Creates a new circle from its center, the normal of its supporting plane, and its radius.
    #[inline]
    pub fn new(center: Point3<T>, normal: Unit<Vector3<T>>, radius: T) -> Self {
        Circle3 {
            center,
            normal,
            radius,
        }
    }

    /// The circle obtained by translating `self` by `shift`.
    ///
    /// The normal and radius are left unchanged.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector3<T>) -> Self {
        Circle3 {
            center: self.center + shift,
            ..*self
        }
    }

    /// The point of this circle at the angle `angle` (in radians), measured from `reference`.
    ///
    /// The `reference` direction is projected on the circle plane. Returns `None` if that
    /// projection is zero.
    pub fn point_at_angle(&self, reference: &Vector3<T>, angle: T) -> Option<Point3<T>> {
        let u = Unit::try_new(
            reference - *self.normal * self.normal.dot(reference),
            T::default_epsilon(),
        )?;
        let v = self.normal.cross(&*u);
        let (sin, cos) = angle.sin_cos();
        Some(self.center + (*u * cos + v * sin) * self.radius)
    }
}
