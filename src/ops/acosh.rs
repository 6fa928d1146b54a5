//! Hyperbolic arccosine.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::asinh::HYPERBOLIC_F64_MAX_MAGNITUDE;
use crate::ops::newton::newton_solve;
use crate::ops::newton::sample_gradient;
use crate::ops::GUARD;

/// Relative spacing of the points for the gradient estimate.
const ACOSH_GRADIENT_SPACING: f64 = 1e-4;

impl DecNumber {
    /// Computes the hyperbolic arccosine of a number. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is less than 1.
    pub fn acosh(&self, ctx: &Context) -> Result<Self, Error> {
        let cmp_one = self.cmp(&ONE);

        if cmp_one < 0 {
            return Err(Error::InvalidArgument);
        }

        if cmp_one == 0 {
            return Ok(Self::new());
        }

        let wrk = ctx.inc(GUARD);

        if self.cmp(&TWO) < 0 {
            // acosh(x) = asinh(sqrt((x - 1) * (x + 1)))
            let t = self.sub(&ONE, &wrk)?.mul(&self.add(&ONE, &wrk)?, &wrk)?;
            return t.sqrt(&wrk)?.asinh(ctx);
        }

        if let Some(r) = self.ln_double_large(&wrk)? {
            return r.round(ctx);
        }

        let (seed, gradient) = if self.magnitude() > HYPERBOLIC_F64_MAX_MAGNITUDE {
            // acosh(x) ~ ln(2x), d/dx acosh(x) ~ 1/x
            (self.mul(&TWO, &wrk)?.ln(&wrk)?, self.recip(&wrk)?)
        } else {
            let y = self.to_f64();
            let a = (y * (1.0 - ACOSH_GRADIENT_SPACING)).max(1.0);
            let b = y * (1.0 + ACOSH_GRADIENT_SPACING);
            (Self::from_f64(y.acosh())?, sample_gradient(f64::acosh, a, b)?)
        };

        newton_solve("acosh", |g, c| g.cosh(c), self, seed, &gradient, &wrk)?.round(ctx)
    }
}
