/*!
dyndist
========

**dyndist** computes static and dynamic distances between pairs of geometric
primitives written with the rust programming language.

A static query measures the distance between two primitives as they are. A
dynamic query lets both primitives translate with constant velocities and
either evaluates the distance at a given time, or finds the time at which the
distance is the smallest over a time interval.

```
# #[macro_use] extern crate approx;
use dyndist::math::{Point3, Vector3};
use dyndist::query::{DistPointCircle3, DistanceQuery};
use dyndist::shape::Circle3;

let circle = Circle3::new(Point3::new(0.0, 0.0, 5.0), Vector3::z_axis(), 2.0);
let point = Point3::new(3.0, 0.0, 5.0);
let query = DistPointCircle3::new(&point, &circle);

assert_relative_eq!(query.distance(), 1.0);
assert_relative_eq!(query.separation().point1, Point3::new(2.0, 0.0, 5.0));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
///
/// Every query is generic over its scalar type `T` (usually `f32` or `f64`) and,
/// when the geometry allows it, over the dimension `D` of the space.
pub mod math {
    pub use na::{Point, Point2, Point3, RealField, Scalar, SVector, Unit, Vector2, Vector3};

    /// The vector type of a `D`-dimensional space.
    pub type Vector<T, const D: usize> = SVector<T, D>;

    /// The unit vector type of a `D`-dimensional space.
    pub type UnitVector<T, const D: usize> = Unit<SVector<T, D>>;

    /// A point with all its coordinates set to `+infinity`.
    ///
    /// Used as the closest point of a primitive when that closest point is not unique.
    #[inline]
    pub fn unbounded_point<T: RealField + Copy, const D: usize>() -> Point<T, D> {
        Point::from(SVector::repeat(T::one() / T::zero()))
    }
}
