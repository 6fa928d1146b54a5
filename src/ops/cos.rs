//! Cosine.

use crate::common::consts::NINETY;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;

impl DecNumber {
    /// Computes the cosine of a number given in degrees as the sine of `|self| mod 360 + 90`.
    /// The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too small number.
    pub fn cos(&self, ctx: &Context) -> Result<Self, Error> {
        let d = self.reduce_degrees();

        // cos(x) = 1 - x^2/2 + ..., and x^2 is below the last digit of the result.
        if d.is_first_order(ctx.precision()) {
            return ONE.round(ctx);
        }

        // exact, d is at most p + 3 orders of magnitude below 90.
        d.add_full_prec(&NINETY).sin(ctx)
    }
}
