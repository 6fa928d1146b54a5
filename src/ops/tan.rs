//! Tangent.

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::GUARD;

impl DecNumber {
    /// Computes the tangent of a number given in degrees. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the cosine of the argument is zero.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn tan(&self, ctx: &Context) -> Result<Self, Error> {
        let wrk = ctx.inc(GUARD);
        let s = self.sin(&wrk)?;
        let c = self.cos(&wrk)?;
        s.div(&c, ctx)
    }

    /// Computes the tangent of a number given in radians. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the cosine of the argument is zero.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub(crate) fn tan_rad(&self, ctx: &Context) -> Result<Self, Error> {
        let wrk = ctx.inc(GUARD);
        let s = self.sin_rad(&wrk)?;
        let c = self.add(&CONSTS.half_pi(&wrk)?, &wrk)?.sin_rad(&wrk)?;
        s.div(&c, ctx)
    }
}
