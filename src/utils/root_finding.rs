//! Bracketed root refinement of scalar functions.

use crate::utils::Interval;
use na::RealField;

/// The way the root-finding algorithm terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RootStatus {
    /// The residual `|f(t)|`, or the last step, fell below the zero threshold.
    Converged,
    /// The iteration cap was reached first.
    ///
    /// The returned root is still the best estimate found, and lies inside of the bracket.
    OutOfIterations,
}

/// A root estimate computed by [`find_root_bracketed`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Root<T> {
    /// The estimated root.
    pub t: T,
    /// The way the algorithm terminated.
    pub status: RootStatus,
}

/// Refines a root of `f` inside of `bracket` with a Newton/bisection hybrid.
///
/// `df` must be the derivative of `f` (or an approximation of it). At each iteration a Newton
/// step is attempted. It is replaced by a bisection step whenever it would leave the current
/// bracket, or when it doesn't shrink the step size by at least half. The bracket shrinks at each
/// iteration so the result always lies within `bracket`.
///
/// The algorithm stops as soon as `|f(t)| <= zero_threshold`, when the step becomes smaller than
/// `zero_threshold`, or after `max_iterations` iterations.
///
/// Returns `None` if `f` doesn't change sign between the bracket endpoints, or if it isn't finite
/// on one of them.
pub fn find_root_bracketed<T: RealField + Copy>(
    f: impl Fn(T) -> T,
    df: impl Fn(T) -> T,
    bracket: Interval<T>,
    max_iterations: usize,
    zero_threshold: T,
) -> Option<Root<T>> {
    let _0_5: T = na::convert(0.5);
    let _2: T = na::convert(2.0);
    let Interval(a, b) = bracket;
    let fa = f(a);
    let fb = f(b);

    if !fa.is_finite() || !fb.is_finite() {
        return None;
    }

    if fa.abs() <= zero_threshold {
        return Some(Root {
            t: a,
            status: RootStatus::Converged,
        });
    }

    if fb.abs() <= zero_threshold {
        return Some(Root {
            t: b,
            status: RootStatus::Converged,
        });
    }

    if (fa > T::zero()) == (fb > T::zero()) {
        return None;
    }

    // Orient the bracket so that f(lo) < 0 < f(hi). Note that `lo` may be greater than `hi`.
    let (mut lo, mut hi) = if fa < T::zero() { (a, b) } else { (b, a) };
    let mut t = Interval(lo, hi).midpoint();
    let mut dx_prev = (hi - lo).abs();
    let mut dx = dx_prev;
    let mut ft = f(t);
    let mut dft = df(t);

    if ft < T::zero() {
        lo = t;
    } else {
        hi = t;
    }

    for _ in 0..max_iterations {
        if ft.abs() <= zero_threshold || dx.abs() <= zero_threshold {
            return Some(Root {
                t,
                status: RootStatus::Converged,
            });
        }

        let newton_leaves_bracket = ((t - hi) * dft - ft) * ((t - lo) * dft - ft) > T::zero();
        let newton_too_slow = (ft * _2).abs() > (dx_prev * dft).abs();

        dx_prev = dx;

        if newton_leaves_bracket || newton_too_slow || !dft.is_finite() {
            dx = (hi - lo) * _0_5;
            t = lo + dx;
        } else {
            dx = ft / dft;
            t -= dx;
        }

        ft = f(t);
        dft = df(t);

        if ft < T::zero() {
            lo = t;
        } else {
            hi = t;
        }
    }

    let status = if ft.abs() <= zero_threshold || dx.abs() <= zero_threshold {
        RootStatus::Converged
    } else {
        log::debug!(
            "Bracketed root finding ran out of iterations ({} iterations).",
            max_iterations
        );
        RootStatus::OutOfIterations
    };

    Some(Root { t, status })
}
