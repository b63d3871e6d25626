//! Finite-difference approximation of derivatives.

use na::RealField;

/// The step `h` of the central finite difference `(f(t + h) - f(t - h)) / (2h)`, together with the
/// cached value of `1 / (2h)`.
///
/// The error of this approximation is `O(h²)` for smooth functions.
///
/// A `DifferenceStep` is always strictly positive and finite.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DifferenceStep<T> {
    step: T,
    inv_two_step: T,
}

impl<T: RealField + Copy> DifferenceStep<T> {
    /// The default difference step, `1.0e-3`.
    pub const DEFAULT_STEP: f64 = 1.0e-3;

    /// Creates a new difference step.
    ///
    /// Returns `None` if `step` is not strictly positive or is not finite.
    #[inline]
    pub fn new(step: T) -> Option<Self> {
        if step > T::zero() && step.is_finite() {
            let two: T = na::convert(2.0);
            Some(Self {
                step,
                inv_two_step: T::one() / (two * step),
            })
        } else {
            None
        }
    }

    /// The step `h`.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// The cached value of `1 / (2h)`.
    #[inline]
    pub fn inv_two_step(&self) -> T {
        self.inv_two_step
    }

    /// Approximates `f'(t)` with a central difference using this step.
    #[inline]
    pub fn derivative(&self, f: impl Fn(T) -> T, t: T) -> T {
        (f(t + self.step) - f(t - self.step)) * self.inv_two_step
    }
}

impl<T: RealField + Copy> Default for DifferenceStep<T> {
    fn default() -> Self {
        let step: T = na::convert(Self::DEFAULT_STEP);
        let two: T = na::convert(2.0);
        Self {
            step,
            inv_two_step: T::one() / (two * step),
        }
    }
}
