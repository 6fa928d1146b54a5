//! Hyperbolic cosine.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::GUARD;

impl DecNumber {
    /// Computes the hyperbolic cosine of a number. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn cosh(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(ONE.clone());
        }

        // (e^x + e^-x) / 2
        let wrk = ctx.inc(GUARD);
        let ex = self.abs().exp(&wrk)?;
        ex.add(&ONE.div(&ex, &wrk)?, &wrk)?.div(&TWO, ctx)
    }
}
