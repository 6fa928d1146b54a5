//! Arccosine.

use crate::common::consts::NINETY;
use crate::common::consts::NINE_TENTHS;
use crate::common::consts::ONE;
use crate::common::consts::ONE_EIGHTY;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::GUARD;

impl DecNumber {
    /// Computes the arccosine of a number. The result is in degrees, and is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the absolute value of the argument is greater than 1.
    pub fn acos(&self, ctx: &Context) -> Result<Self, Error> {
        let cmp_one = self.abs_cmp(&ONE);

        if cmp_one > 0 {
            return Err(Error::InvalidArgument);
        }

        if self.is_zero() {
            return Ok(NINETY.clone());
        }

        if cmp_one == 0 {
            return Ok(if self.is_negative() { ONE_EIGHTY.clone() } else { Self::new() });
        }

        let wrk = ctx.inc(GUARD);

        // near 1 the difference pi/2 - asin(x) cancels, so acos(x) = asin(sqrt(1 - x^2)) instead.
        let r = if self.abs_cmp(&NINE_TENTHS) > 0 {
            let a = self.abs().complement_sqrt(&wrk)?.asin_rad(&wrk)?;
            if self.is_negative() {
                CONSTS.pi(&wrk)?.sub(&a, &wrk)?
            } else {
                a
            }
        } else {
            CONSTS.half_pi(&wrk)?.sub(&self.asin_rad(&wrk)?, &wrk)?
        };

        r.mul(&CONSTS.rad2deg(&wrk)?, ctx)
    }
}
