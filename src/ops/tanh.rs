//! Hyperbolic tangent.

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::GUARD;

impl DecNumber {
    /// Computes the hyperbolic tangent of a number. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the absolute value of the result is too small.
    pub fn tanh(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }

        // tanh(x) = x - x^3/3 + ...
        if self.is_first_order(ctx.precision()) {
            return self.round(ctx);
        }

        if self.is_negative() {
            return Ok(self.neg().tanh(ctx)?.neg());
        }

        let wrk = ctx.inc(GUARD);

        if self.cmp(&ONE) < 0 {
            // 1 - e^(-2x) loses leading digits for small x.
            let s = self.sinh(&wrk)?;
            let c = self.cosh(&wrk)?;
            return s.div(&c, ctx);
        }

        // (1 - e^(-2x)) / (1 + e^(-2x))
        let v = self.add_full_prec(self).neg().exp(&wrk)?;
        let n = ONE.sub(&v, &wrk)?;
        let d = ONE.add(&v, &wrk)?;
        n.div(&d, ctx)
    }
}
