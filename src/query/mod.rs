//! Non-persistent distance queries.
//!
//! # General cases
//! Every supported pair of primitives has a dedicated type implementing the [`DistanceQuery`]
//! trait. The trait provides:
//!
//! * [`DistanceQuery::distance()`] and [`DistanceQuery::separation()`] for the distance and the
//!   closest points between two primitives.
//! * [`DistanceQuery::distance_at()`] and [`DistanceQuery::derivative_at()`] for the distance,
//!   and its time derivative, between two primitives translating with constant velocities.
//! * [`DistanceQuery::min_distance()`] for the smallest distance between two translating
//!   primitives over a time interval, and the time at which it is reached.
//!
//! Each of them also has a squared-distance counterpart.
//!
//! # Specific cases
//! The functions exported by the `details` submodule compute the closest points for a known pair
//! of primitives without building a query object. They have the form
//! `closest_points_[primitive1]_[primitive2]()`. The same submodule exports the interval
//! minimization algorithm shared by all the queries.

pub use self::distance::{
    DistPointCircle3, DistPointPlane, DistPointPoint, DistPointSegment, DistPointSphere,
    DistanceQuery, IntervalMinimum, MinimizationStatus, Separation,
};
pub use self::error::DistanceError;
pub use self::query_options::DistanceOptions;

mod distance;
mod error;
mod query_options;

/// Queries dedicated to specific pairs of primitives.
pub mod details {
    pub use super::distance::{
        closest_points_point_circle3, closest_points_point_plane, closest_points_point_segment,
        closest_points_point_sphere, minimize_on_interval, MinimizationStatus, ScalarMinimum,
    };
}
