use crate::query::{DistanceError, DistanceOptions};
use crate::utils::{find_root_bracketed, Interval, RootStatus};
use na::RealField;

/// The way the minimization of a time-dependent distance terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MinimizationStatus {
    /// The time interval was reduced to a single time, the function was evaluated there directly.
    SingleTime,
    /// The function reached (numerically) zero, either at the start of the interval or at the
    /// first time found where it touches zero.
    Contact,
    /// The derivative doesn't change sign between the interval endpoints: the minimum was
    /// taken at the best endpoint.
    Monotonic,
    /// The roots of the derivative were refined successfully.
    Converged,
    /// The root refinement ran out of iterations.
    ///
    /// The result is still the best estimate found, and is never worse than the best endpoint.
    OutOfIterations,
}

/// The minimum of a scalar function of time over an interval.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarMinimum<T> {
    /// The time at which the minimum is reached.
    pub time: T,
    /// The value of the function at `self.time`.
    pub value: T,
    /// The way the minimization terminated.
    pub status: MinimizationStatus,
}

/// How many times a bracket containing a local maximum is split in two.
const MAX_BRACKET_SPLITS: usize = 2;

/// Minimizes the non-negative function `f` over the time interval `[tmin, tmax]`.
///
/// The function `df` must be the derivative of `f` (or an approximation of it):
/// 1. If `tmin == tmax`, `f` is evaluated directly at that time.
/// 2. If `f(tmin) <= options.zero_threshold`, the minimum is at `tmin`.
/// 3. Secant steps on `f`, starting with the slope `df(tmin)`, march from `tmin` toward the first
///    time `f` reaches zero. If none is found, the same search runs backward from `tmax`. A
///    zero found this way is returned with the status [`MinimizationStatus::Contact`].
/// 4. If `df` doesn't change sign between `tmin` and `tmax`, the minimum is reached at the
///    endpoint (or march sample) with the smallest value.
/// 5. Otherwise, the root of `df` is refined with a Newton/bisection hybrid, using a central
///    difference of `df` as second derivative. A root where the second derivative isn't
///    positive is a local maximum: the sub-brackets on both of its sides are searched instead.
///    The values at the roots are compared to the values at the endpoints.
///
/// Step 3 catches the zero-distance contacts of primitives that aren't convex (a point crossing
/// a circle or a sphere), for which the distance has several local minima. Local minima that
/// aren't zero are only found when the derivative changes sign between the interval endpoints.
///
/// Fails if `tmin > tmax` or if one of the bounds is NaN.
pub fn minimize_on_interval<T: RealField + Copy>(
    f: impl Fn(T) -> T,
    df: impl Fn(T) -> T,
    tmin: T,
    tmax: T,
    options: &DistanceOptions<T>,
) -> Result<ScalarMinimum<T>, DistanceError<T>> {
    let interval =
        Interval::try_new(tmin, tmax).ok_or(DistanceError::InvalidInterval { tmin, tmax })?;

    if interval.is_degenerate() {
        return Ok(ScalarMinimum {
            time: tmin,
            value: f(tmin),
            status: MinimizationStatus::SingleTime,
        });
    }

    let f0 = f(tmin);
    if f0 <= options.zero_threshold {
        return Ok(ScalarMinimum {
            time: tmin,
            value: f0,
            status: MinimizationStatus::Contact,
        });
    }

    let f1 = f(tmax);
    let mut best = if f1 < f0 {
        ScalarMinimum {
            time: tmax,
            value: f1,
            status: MinimizationStatus::Monotonic,
        }
    } else {
        ScalarMinimum {
            time: tmin,
            value: f0,
            status: MinimizationStatus::Monotonic,
        }
    };

    let df0 = df(tmin);
    let df1 = df(tmax);

    if !df0.is_finite() || !df1.is_finite() {
        log::debug!("Non-finite distance derivative, falling back to the best interval endpoint.");
        return Ok(best);
    }

    if df0 < T::zero() {
        if let Some(contact) = march_to_contact(&f, tmin, f0, df0, tmax, options, &mut best) {
            return Ok(contact);
        }
    }

    if df1 > T::zero() {
        if let Some(contact) = march_to_contact(&f, tmax, f1, df1, tmin, options, &mut best) {
            return Ok(contact);
        }
    }

    if df0 >= T::zero() || df1 <= T::zero() {
        // No sign change: no interior root of the derivative to refine.
        return Ok(best);
    }

    let mut root_status = None;
    refine_minimum(
        &f,
        &df,
        interval,
        MAX_BRACKET_SPLITS,
        options,
        &mut best,
        &mut root_status,
    );

    best.status = match root_status {
        Some(RootStatus::Converged) => MinimizationStatus::Converged,
        Some(RootStatus::OutOfIterations) => MinimizationStatus::OutOfIterations,
        None => best.status,
    };

    Ok(best)
}

/// Marches from `start` toward `limit` with secant steps on `f`, looking for a zero of `f`.
///
/// The first step uses `slope` as the derivative of `f` at `start`. The march stops when a step
/// points away from `limit` or goes past it, or when `f` stops decreasing. Samples with a value
/// smaller than `best` replace it.
fn march_to_contact<T: RealField + Copy>(
    f: &impl Fn(T) -> T,
    start: T,
    f_start: T,
    mut slope: T,
    limit: T,
    options: &DistanceOptions<T>,
    best: &mut ScalarMinimum<T>,
) -> Option<ScalarMinimum<T>> {
    let (mut t, mut ft) = (start, f_start);

    for _ in 0..options.max_iterations {
        let step = -ft / slope;

        if !step.is_finite() || step * (limit - start) <= T::zero() {
            return None;
        }

        let t_next = t + step;

        if (t_next - limit) * (start - limit) < T::zero() {
            return None;
        }

        let f_next = f(t_next);

        if f_next <= options.zero_threshold || step.abs() <= options.zero_threshold {
            return Some(ScalarMinimum {
                time: t_next,
                value: f_next,
                status: MinimizationStatus::Contact,
            });
        }

        if f_next >= ft {
            // Went over a dip that doesn't touch zero.
            return None;
        }

        if f_next < best.value {
            best.time = t_next;
            best.value = f_next;
        }

        slope = (f_next - ft) / step;
        t = t_next;
        ft = f_next;
    }

    None
}

/// Refines the roots of `df` inside `bracket`, keeping the best local minimum of `f` in `best`.
///
/// `df` must be negative at the start of `bracket` and positive at its end. `root_status`
/// becomes `OutOfIterations` as soon as one refinement runs out of iterations.
fn refine_minimum<T: RealField + Copy>(
    f: &impl Fn(T) -> T,
    df: &impl Fn(T) -> T,
    bracket: Interval<T>,
    splits_left: usize,
    options: &DistanceOptions<T>,
    best: &mut ScalarMinimum<T>,
    root_status: &mut Option<RootStatus>,
) {
    let ddf = |t: T| options.derivative(df, t);
    let root = match find_root_bracketed(
        df,
        &ddf,
        bracket,
        options.max_iterations,
        options.zero_threshold,
    ) {
        Some(root) => root,
        None => {
            log::debug!("Failed to bracket the root of the distance derivative.");
            return;
        }
    };

    if *root_status != Some(RootStatus::OutOfIterations) {
        *root_status = Some(root.status);
    }

    if ddf(root.t) > T::zero() {
        let value = f(root.t);

        if value <= best.value {
            best.time = root.t;
            best.value = value;
        }
    } else if splits_left > 0 {
        // Local maximum: the minima lie on either side.
        let Interval(lo, hi) = bracket;
        let h = options.difference_step();
        let left = root.t - h;
        let right = root.t + h;

        if left > lo && df(left) > T::zero() {
            refine_minimum(
                f,
                df,
                Interval(lo, left),
                splits_left - 1,
                options,
                best,
                root_status,
            );
        }

        if right < hi && df(right) < T::zero() {
            refine_minimum(
                f,
                df,
                Interval(right, hi),
                splits_left - 1,
                options,
                best,
                root_status,
            );
        }
    } else {
        log::debug!("Distance derivative root is not a local minimum.");
    }
}
