use crate::math::{Point, Vector};
use na::{RealField, Scalar};

/// A sphere in a `D`-dimensional space, i.e., the set of points at a distance `radius`
/// from `center`.
///
/// Only the boundary of the sphere is represented: a point inside of the sphere is still at a
/// nonzero distance from it. In 2D this is a circle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Sphere<T: Scalar, const D: usize> {
    /// The center of the sphere.
    pub center: Point<T, D>,
    /// The radius of the sphere.
    pub radius: T,
}

impl<T: RealField + Copy, const D: usize> Sphere<T, D> {
    /// Creates a new sphere with the given center and radius.
    #[inline]
    pub fn new(center: Point<T, D>, radius: T) -> Self {
        Sphere { center, radius }
    }

    /// The sphere obtained by translating `self` by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector<T, D>) -> Self {
        Sphere {
            center: self.center + shift,
            radius: self.radius,
        }
    }
}
