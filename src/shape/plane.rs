//! Definition of the plane shape.
use crate::math::{Point, UnitVector, Vector};
use na::{RealField, Scalar};

/// An infinite plane (a line in 2D): the set of points `x` such that `normal · x = constant`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane<T: Scalar, const D: usize> {
    /// The plane's unit normal.
    pub normal: UnitVector<T, D>,
    /// The plane's constant, i.e., the signed distance from the origin to the plane along `normal`.
    pub constant: T,
}

impl<T: RealField + Copy, const D: usize> Plane<T, D> {
    /// Builds a new plane from its normal and constant.
    #[inline]
    pub fn new(normal: UnitVector<T, D>, constant: T) -> Self {
        Plane { normal, constant }
    }

    /// Builds the plane with the given normal and passing through `origin`.
    #[inline]
    pub fn from_point_and_normal(origin: &Point<T, D>, normal: UnitVector<T, D>) -> Self {
        let constant = normal.dot(&origin.coords);
        Plane { normal, constant }
    }

    /// The signed distance between `pt` and this plane.
    ///
    /// Positive if `pt` lies on the side of the plane `self.normal` points toward.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<T, D>) -> T {
        self.normal.dot(&pt.coords) - self.constant
    }

    /// The plane obtained by translating `self` by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector<T, D>) -> Self {
        Plane {
            normal: self.normal,
            constant: self.constant + self.normal.dot(shift),
        }
    }
}
