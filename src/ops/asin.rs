//! Arcsine.

use crate::common::consts::NINETY;
use crate::common::consts::NINE_TENTHS;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::newton::newton_solve;
use crate::ops::newton::sample_gradient;
use crate::ops::GUARD;

/// Spacing of the points for the gradient estimate.
const ASIN_GRADIENT_SPACING: f64 = 1e-4;

impl DecNumber {
    /// Computes the arcsine of a number. The result is in degrees, and is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the absolute value of the argument is greater than 1.
    ///  - ExponentOverflow: the result is too small number.
    pub fn asin(&self, ctx: &Context) -> Result<Self, Error> {
        let cmp_one = self.abs_cmp(&ONE);

        if cmp_one > 0 {
            return Err(Error::InvalidArgument);
        }

        if self.is_zero() {
            return Ok(Self::new());
        }

        if cmp_one == 0 {
            return Ok(if self.is_negative() { NINETY.neg() } else { NINETY.clone() });
        }

        let wrk = ctx.inc(GUARD);
        let r = self.asin_rad(&wrk)?;

        r.mul(&CONSTS.rad2deg(&wrk)?, ctx)
    }

    /// Arcsine in radians of a number with the absolute value not greater than 1.
    pub(crate) fn asin_rad(&self, wrk: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }

        // asin(x) = x + x^3/6 + ...
        if self.is_first_order(wrk.precision()) {
            return self.round(wrk);
        }

        if self.abs_cmp(&NINE_TENTHS) > 0 {
            // asin(x) = pi/2 - asin(sqrt(1 - x^2))
            let s = self.abs().complement_sqrt(wrk)?;
            let ret = CONSTS.half_pi(wrk)?.sub(&s.asin_rad(wrk)?, wrk)?;
            return Ok(if self.is_negative() { ret.neg() } else { ret });
        }

        let y = self.to_f64();
        let seed = Self::from_f64(y.asin())?;
        let gradient = sample_gradient(
            f64::asin,
            (y - ASIN_GRADIENT_SPACING).max(-1.0),
            (y + ASIN_GRADIENT_SPACING).min(1.0),
        )?;

        newton_solve("asin", |g, c| g.sin_rad(c), self, seed, &gradient, wrk)
    }

    /// sqrt((1 - x) * (1 + x)) for 0 <= x <= 1.
    pub(super) fn complement_sqrt(&self, wrk: &Context) -> Result<Self, Error> {
        let t = ONE.sub(self, wrk)?.mul(&ONE.add(self, wrk)?, wrk)?;
        t.sqrt(wrk)
    }
}
