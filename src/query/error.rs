/// Errors returned by the distance queries when their arguments break their contract.
///
/// Degenerate geometric configurations (for example a point equidistant from every point of a
/// circle) are never reported as errors. They are signaled by the multiplicity flags of
/// [`Separation`](crate::query::Separation) instead. Numerical non-convergence isn't an error either,
/// see [`MinimizationStatus`](crate::query::MinimizationStatus).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum DistanceError<T> {
    /// The time interval given to a dynamic query has `tmin > tmax`, or one of its bounds is NaN.
    #[error("invalid time interval: tmin ({tmin}) must not be greater than tmax ({tmax})")]
    InvalidInterval {
        /// The lower bound given to the query.
        tmin: T,
        /// The upper bound given to the query.
        tmax: T,
    },
    /// The finite-difference step is not strictly positive or not finite.
    #[error("invalid difference step {0}: it must be positive and finite")]
    InvalidDifferenceStep(T),
}
