use log::{debug, trace};

use crate::errors::QuadError;

/// A pending subinterval on the work-list.
///
/// Endpoint values are cached at creation time so a split never
/// re-evaluates an endpoint it already knows.
struct Subinterval {
    left: f64,
    right: f64,
    level: u32,
    f_left: f64,
    f_right: f64,
}

/// The two point trapezoid rule over an interval of the given width.
pub fn trapezoid_rule(f_left: f64, f_right: f64, width: f64) -> f64 {
    width / 2f64 * (f_left + f_right)
}

/// The three point Simpson rule over an interval of the given width.
/// Exact for cubic polynomials.
pub fn simpson_rule(f_left: f64, f_mid: f64, f_right: f64, width: f64) -> f64 {
    width / 6f64 * (f_left + 4f64 * f_mid + f_right)
}

/// An adaptive trapezoid-Simpson quadrature routine.
///
/// Splits the interval wherever the gap between the trapezoid and
/// Simpson estimates exceeds the tolerance allotted to that recursion
/// level (`tol / 2^(level + 1)`), and sums the Simpson estimates of the
/// accepted subintervals. Each subinterval costs exactly one new
/// integrand evaluation; endpoint values are reused across splits.
///
/// Returns the approximate integral value. The error control is a
/// heuristic budget, not a certified bound.
///
/// * `f` - The function to integrate
/// * `a` - Lower integration bound
/// * `b` - Upper integration bound, `a <= b` required
/// * `tol` - The total error budget, must be positive
/// * `max_depth` - The maximum subdivision depth allowed, or `None` for
///     unbounded subdivision
pub fn adaptive_simpson_quadrature(
    f: impl Fn(f64) -> f64,
    a: f64,
    b: f64,
    tol: f64,
    max_depth: Option<u32>,
) -> Result<f64, QuadError> {
    if !tol.is_finite() || tol <= 0f64 {
        return Err(QuadError::InvalidTolerance(tol));
    }
    if !a.is_finite() || !b.is_finite() || a > b {
        return Err(QuadError::InvalidBounds { lower: a, upper: b });
    }

    let eval = |x: f64| -> Result<f64, QuadError> {
        let fx = f(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(QuadError::NonFiniteValue { at: x })
        }
    };

    let f_a = eval(a)?;
    let f_b = eval(b)?;
    if a == b {
        return Ok(0f64);
    }

    debug!("seeding [{a}, {b}] with tol {tol}");
    let mut pending = vec![Subinterval {
        left: a,
        right: b,
        level: 0,
        f_left: f_a,
        f_right: f_b,
    }];
    let mut total = 0f64;
    let mut tasks = 0u64;

    while let Some(intvl) = pending.pop() {
        tasks += 1;
        let width = intvl.right - intvl.left;
        let mid = (intvl.left + intvl.right) / 2f64;
        let f_mid = eval(mid)?;

        let t = trapezoid_rule(intvl.f_left, intvl.f_right, width);
        let s = simpson_rule(intvl.f_left, f_mid, intvl.f_right, width);
        let local_tol = tol / 2f64.powi(intvl.level as i32 + 1);

        if (t - s).abs() > local_tol {
            if let Some(max) = max_depth {
                if intvl.level >= max {
                    return Err(QuadError::DepthExceeded { max });
                }
            }
            trace!("split [{}, {}] at level {}", intvl.left, intvl.right, intvl.level);
            pending.push(Subinterval {
                left: intvl.left,
                right: mid,
                level: intvl.level + 1,
                f_left: intvl.f_left,
                f_right: f_mid,
            });
            pending.push(Subinterval {
                left: mid,
                right: intvl.right,
                level: intvl.level + 1,
                f_left: f_mid,
                f_right: intvl.f_right,
            });
        } else {
            total += s;
        }
    }

    debug!("accumulated {total} over {tasks} subintervals");
    Ok(total)
}
