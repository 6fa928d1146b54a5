//! Decimal logarithm.

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::GUARD;
use num_traits::One;

impl DecNumber {
    /// Computes the logarithm base 10 of a number. The result is rounded according to the context.
    /// Logarithm of an integer power of 10 is exact.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is zero or negative.
    pub fn log10(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() || self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        let (m, e) = self.to_raw_parts();
        if m.is_one() {
            return Self::from_i64(e).round(ctx);
        }

        let wrk = ctx.inc(GUARD);
        let ln = self.ln(&wrk)?;

        ln.mul(&CONSTS.ln_10_inv(&wrk)?, ctx)
    }
}
