//! Hyperbolic arctangent.

use crate::common::consts::ATANH_THRESHOLD;
use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::newton::newton_solve;
use crate::ops::newton::sample_gradient;
use crate::ops::GUARD;

/// Spacing of the points for the gradient estimate.
const ATANH_GRADIENT_SPACING: f64 = 1e-6;

/// Largest `f64` less than 1.
const ATANH_F64_MAX_ARG: f64 = 0.9999999999999999;

impl DecNumber {
    /// Computes the hyperbolic arctangent of a number. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the absolute value of the argument is greater than or equal to 1.
    ///  - ExponentOverflow: the absolute value of the result is too small.
    pub fn atanh(&self, ctx: &Context) -> Result<Self, Error> {
        if self.abs_cmp(&ONE) >= 0 {
            return Err(Error::InvalidArgument);
        }

        if self.is_zero() {
            return Ok(Self::new());
        }

        // atanh(x) = x + x^3/3 + ...
        if self.is_first_order(ctx.precision()) {
            return self.round(ctx);
        }

        if self.is_negative() {
            return Ok(self.neg().atanh(ctx)?.neg());
        }

        if self.cmp(&ATANH_THRESHOLD) > 0 {
            // digits of 1 - x cancel out in the residual, and the gradient is about 1/(2(1 - x)).
            let d = ONE.sub(self, &ctx.inc(GUARD))?;
            let extra = (-d.magnitude()) as usize;
            let wrk = ctx.inc(GUARD + extra);

            // atanh(x) ~ -ln((1 - x)/2)/2, d/dx atanh(x) = 1/((1 - x)(1 + x))
            let seed = d.mul(&HALF, &wrk)?.ln(&wrk)?.mul(&HALF, &wrk)?.neg();
            let gradient = d.mul(&ONE.add(self, &wrk)?, &wrk)?.recip(&wrk)?;

            return newton_solve("atanh", |g, c| g.tanh(c), self, seed, &gradient, &wrk)?.round(ctx);
        }

        let wrk = ctx.inc(GUARD);
        let y = self.to_f64();
        let seed = Self::from_f64(y.atanh())?;
        let gradient = sample_gradient(
            f64::atanh,
            (y - ATANH_GRADIENT_SPACING).max(-ATANH_F64_MAX_ARG),
            (y + ATANH_GRADIENT_SPACING).min(ATANH_F64_MAX_ARG),
        )?;

        newton_solve("atanh", |g, c| g.tanh(c), self, seed, &gradient, &wrk)?.round(ctx)
    }
}
