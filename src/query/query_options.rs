use crate::query::DistanceError;
use crate::utils::DifferenceStep;
use na::{RealField, Scalar};

/// Tunables of the numerical algorithms run by the dynamic distance queries.
///
/// The default options are:
/// - `max_iterations`: 8.
/// - `zero_threshold`: the machine epsilon of `T`.
/// - difference step: `1.0e-3`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceOptions<T: Scalar> {
    /// The maximum number of iterations of the root-refinement algorithm.
    pub max_iterations: usize,
    /// Any value with a magnitude smaller than this threshold is considered zero.
    ///
    /// It is used both as the convergence threshold of the root-refinement, and to detect
    /// degenerate geometric configurations.
    pub zero_threshold: T,
    difference_step: DifferenceStep<T>,
}

impl<T: RealField + Copy> Default for DistanceOptions<T> {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            zero_threshold: T::default_epsilon(),
            difference_step: DifferenceStep::default(),
        }
    }
}

impl<T: RealField + Copy> DistanceOptions<T> {
    /// The default maximum number of iterations.
    pub const DEFAULT_MAX_ITERATIONS: usize = 8;

    /// The default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of `self` with the given maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns a copy of `self` with the given zero threshold.
    #[must_use]
    pub fn with_zero_threshold(mut self, zero_threshold: T) -> Self {
        self.zero_threshold = zero_threshold;
        self
    }

    /// Returns a copy of `self` with the given finite-difference step.
    pub fn with_difference_step(mut self, step: T) -> Result<Self, DistanceError<T>> {
        self.set_difference_step(step)?;
        Ok(self)
    }

    /// Sets the step `h` used to approximate derivatives with central differences.
    ///
    /// The cached value of `1 / (2h)` is updated too. Fails, leaving `self` unchanged, if the
    /// step isn't strictly positive and finite.
    pub fn set_difference_step(&mut self, step: T) -> Result<(), DistanceError<T>> {
        self.difference_step =
            DifferenceStep::new(step).ok_or(DistanceError::InvalidDifferenceStep(step))?;
        Ok(())
    }

    /// The step `h` used to approximate derivatives with central differences.
    #[inline]
    pub fn difference_step(&self) -> T {
        self.difference_step.step()
    }

    /// The value `1 / (2h)` where `h` is the difference step.
    #[inline]
    pub fn inv_two_difference_step(&self) -> T {
        self.difference_step.inv_two_step()
    }

    /// Approximates `f'(t)` by central differences with the configured step.
    #[inline]
    pub fn derivative(&self, f: impl Fn(T) -> T, t: T) -> T {
        self.difference_step.derivative(f, t)
    }
}
