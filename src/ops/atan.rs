//! Arctangent.

use crate::common::consts::NINETY;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::newton::newton_solve;
use crate::ops::newton::sample_gradient;
use crate::ops::GUARD;

/// Relative spacing of the points for the gradient estimate.
const ATAN_GRADIENT_SPACING: f64 = 1e-4;

/// Minimum absolute spacing of the points for the gradient estimate.
const ATAN_GRADIENT_MIN_SPACING: f64 = 1e-38;

impl DecNumber {
    /// Computes the arctangent of a number. The result is in degrees, and is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too small number.
    pub fn atan(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }

        // atan(x) = 90 - atan(1/x), and 1/x in degrees is below the last digit of 90.
        if self.magnitude() > ctx.precision() as Exponent + 2 {
            let r = NINETY.round(ctx)?;
            return Ok(if self.is_negative() { r.neg() } else { r });
        }

        let wrk = ctx.inc(GUARD);
        let r = self.atan_rad(&wrk)?;

        r.mul(&CONSTS.rad2deg(&wrk)?, ctx)
    }

    /// Arctangent in radians.
    pub(crate) fn atan_rad(&self, wrk: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }

        // atan(x) = x - x^3/3 + ...
        if self.is_first_order(wrk.precision()) {
            return self.round(wrk);
        }

        if self.magnitude() > wrk.precision() as Exponent + 1 {
            let ret = CONSTS.half_pi(wrk)?;
            return Ok(if self.is_negative() { ret.neg() } else { ret });
        }

        if self.abs_cmp(&ONE) > 0 {
            // atan(x) = pi/2 - atan(1/x)
            let inv = ONE.div(&self.abs(), wrk)?;
            let ret = CONSTS.half_pi(wrk)?.sub(&inv.atan_rad(wrk)?, wrk)?;
            return Ok(if self.is_negative() { ret.neg() } else { ret });
        }

        let y = self.to_f64();
        let h = (y.abs() * ATAN_GRADIENT_SPACING).max(ATAN_GRADIENT_MIN_SPACING);
        let seed = Self::from_f64(y.atan())?;
        let gradient = sample_gradient(f64::atan, y - h, y + h)?;

        newton_solve("atan", |g, c| g.tan_rad(c), self, seed, &gradient, wrk)
    }
}
