//! Definition of the segment shape.

use crate::math::{Point, Unit, Vector};
use na::{RealField, Scalar};

/// A segment shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment<T: Scalar, const D: usize> {
    /// The segment first point.
    pub a: Point<T, D>,
    /// The segment second point.
    pub b: Point<T, D>,
}

/// Logical description of the location of a point on a segment.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation<T> {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on the segment interior.
    OnEdge([T; 2]),
}

impl<T: RealField + Copy, const D: usize> Segment<T, D> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<T, D>, b: Point<T, D>) -> Self {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<T, D> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> T {
        self.scaled_direction().norm()
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a()` toward `self.b()`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<T, D>>> {
        Unit::try_new(self.scaled_direction(), T::default_epsilon())
    }

    /// The segment obtained by translating both endpoints of `self` by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector<T, D>) -> Self {
        Segment::new(self.a + shift, self.b + shift)
    }

    /// Computes the point at the given location.
    pub fn point_at(&self, location: &SegmentPointLocation<T>) -> Point<T, D> {
        match *location {
            SegmentPointLocation::OnVertex(0) => self.a,
            SegmentPointLocation::OnVertex(_) => self.b,
            SegmentPointLocation::OnEdge(bcoords) => {
                self.a * bcoords[0] + self.b.coords * bcoords[1]
            }
        }
    }

    /// Projects `pt` on this segment and returns the projection and its location.
    pub fn project_point_and_get_location(
        &self,
        pt: &Point<T, D>,
    ) -> (Point<T, D>, SegmentPointLocation<T>) {
        let ab = self.b - self.a;
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        if ab_ap <= T::zero() {
            // Voronoï region of vertex 'a'.
            (self.a, SegmentPointLocation::OnVertex(0))
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            (self.b, SegmentPointLocation::OnVertex(1))
        } else {
            // Voronoï region of the segment interior.
            let u = ab_ap / sqnab;
            (
                self.a + ab * u,
                SegmentPointLocation::OnEdge([T::one() - u, u]),
            )
        }
    }
}
