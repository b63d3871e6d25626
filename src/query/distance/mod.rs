//! Implementation details of the distance queries.

pub use self::distance::{DistanceQuery, IntervalMinimum, Separation};
pub use self::distance_point_circle3::{closest_points_point_circle3, DistPointCircle3};
pub use self::distance_point_plane::{closest_points_point_plane, DistPointPlane};
pub use self::distance_point_point::DistPointPoint;
pub use self::distance_point_segment::{closest_points_point_segment, DistPointSegment};
pub use self::distance_point_sphere::{closest_points_point_sphere, DistPointSphere};
pub use self::minimize_on_interval::{minimize_on_interval, MinimizationStatus, ScalarMinimum};

mod distance;
mod distance_point_circle3;
mod distance_point_plane;
mod distance_point_point;
mod distance_point_segment;
mod distance_point_sphere;
mod minimize_on_interval;
