//! Newton's method for inverse functions.

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;

/// Maximum number of iterations before giving up and returning the last guess.
const NEWTON_MAX_ITER: usize = 100;

/// Solves `f(g) = y` for `g` starting from `seed`.
/// `gradient` is an estimate of the derivative of the inverse function of `f` at `y`.
/// Residuals are computed with two more digits than the working precision `wrk`.
/// The iteration stops when a guess repeats itself, or after 100 iterations.
pub fn newton_solve<F>(
    name: &str,
    f: F,
    y: &DecNumber,
    seed: DecNumber,
    gradient: &DecNumber,
    wrk: &Context,
) -> Result<DecNumber, Error>
where
    F: Fn(&DecNumber, &Context) -> Result<DecNumber, Error>,
{
    let res_ctx = wrk.inc(2);
    let mut g = seed.round(wrk)?;
    let mut prev: Option<DecNumber> = None;

    for i in 0..NEWTON_MAX_ITER {
        let r = f(&g, &res_ctx)?.sub(y, &res_ctx)?;
        let new_g = g.sub(&r.mul(gradient, wrk)?, wrk)?;

        if new_g == g || prev.as_ref() == Some(&new_g) {
            tracing::debug!(function = name, iterations = i, p = wrk.precision(), "newton converged");
            return Ok(new_g);
        }

        prev = Some(std::mem::replace(&mut g, new_g));
    }

    tracing::warn!(
        function = name,
        p = wrk.precision(),
        "newton did not converge after {} iterations",
        NEWTON_MAX_ITER
    );

    Ok(g)
}

/// Estimates the derivative of `inv` between `a` and `b`.
///
/// ## Errors
///
///  - InvalidArgument: the estimate is not a finite number.
pub fn sample_gradient(inv: fn(f64) -> f64, a: f64, b: f64) -> Result<DecNumber, Error> {
    DecNumber::from_f64((inv(b) - inv(a)) / (b - a))
}
