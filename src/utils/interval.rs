use na::RealField;

/// A closed interval `[self.0, self.1]`.
///
/// Used to represent time intervals and root brackets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T>(pub T, pub T);

impl<T> Interval<T> {
    /// Creates the interval `[min, max]`.
    ///
    /// Returns `None` if `min > max`, or if the bounds cannot be compared (NaN).
    #[must_use]
    pub fn try_new(min: T, max: T) -> Option<Self>
    where
        T: PartialOrd,
    {
        if min <= max {
            Some(Interval(min, max))
        } else {
            None
        }
    }

    /// Is this interval reduced to a single value?
    #[must_use]
    pub fn is_degenerate(&self) -> bool
    where
        T: PartialEq,
    {
        self.0 == self.1
    }

    /// Does this interval contain the given value?
    #[must_use]
    pub fn contains(&self, t: T) -> bool
    where
        T: PartialOrd<T>,
    {
        self.0 <= t && self.1 >= t
    }

    /// The width of this interval.
    #[must_use]
    pub fn width(self) -> T::Output
    where
        T: core::ops::Sub<T>,
    {
        self.1 - self.0
    }

    /// The average of the two interval endpoints.
    #[must_use]
    pub fn midpoint(self) -> T
    where
        T: RealField + Copy,
    {
        let two: T = na::convert(2.0);
        (self.0 + self.1) / two
    }
}
