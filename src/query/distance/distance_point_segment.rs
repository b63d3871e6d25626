use crate::math::{Point, Vector};
use crate::query::{DistanceOptions, DistanceQuery, Separation};
use crate::shape::Segment;
use na::{RealField, Scalar};

/// Closest points between a point and a segment.
#[inline]
pub fn closest_points_point_segment<T: RealField + Copy, const D: usize>(
    point: &Point<T, D>,
    segment: &Segment<T, D>,
) -> Separation<T, D> {
    let (proj, _) = segment.project_point_and_get_location(point);
    Separation::new(*point, proj)
}

/// Distance queries between a point and a segment.
#[derive(Copy, Clone, Debug)]
pub struct DistPointSegment<'a, T: Scalar, const D: usize> {
    point: &'a Point<T, D>,
    segment: &'a Segment<T, D>,
    options: DistanceOptions<T>,
}

impl<'a, T: RealField + Copy, const D: usize> DistPointSegment<'a, T, D> {
    /// Distance queries between `point` and `segment`, with the default options.
    pub fn new(point: &'a Point<T, D>, segment: &'a Segment<T, D>) -> Self {
        Self::with_options(point, segment, DistanceOptions::default())
    }

    /// Distance queries between `point` and `segment`, with the given options.
    pub fn with_options(
        point: &'a Point<T, D>,
        segment: &'a Segment<T, D>,
        options: DistanceOptions<T>,
    ) -> Self {
        Self {
            point,
            segment,
            options,
        }
    }

    /// The point.
    pub fn point(&self) -> &'a Point<T, D> {
        self.point
    }

    /// The segment.
    pub fn segment(&self) -> &'a Segment<T, D> {
        self.segment
    }

    /// A mutable reference to the options of the dynamic queries.
    pub fn options_mut(&mut self) -> &mut DistanceOptions<T> {
        &mut self.options
    }
}

impl<T: RealField + Copy, const D: usize> DistanceQuery<T, D> for DistPointSegment<'_, T, D> {
    fn options(&self) -> &DistanceOptions<T> {
        &self.options
    }

    fn separation_at(&self, t: T, vel0: &Vector<T, D>, vel1: &Vector<T, D>) -> Separation<T, D> {
        let point = self.point + vel0 * t;
        let segment = self.segment.translated(&(vel1 * t));
        closest_points_point_segment(&point, &segment)
    }
}
