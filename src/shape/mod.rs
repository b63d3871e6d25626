//! Geometric primitives supported by the distance queries.
//!
//! All the primitives are plain values expressed in world-space. The distance queries only ever
//! borrow them.

pub use self::circle3::Circle3;
pub use self::plane::Plane;
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::sphere::Sphere;

mod circle3;
mod plane;
mod segment;
mod sphere;
