//! Hyperbolic arcsine.

use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::num::DecNumber;
use crate::ops::newton::newton_solve;
use crate::ops::newton::sample_gradient;
use crate::ops::GUARD;

/// Relative spacing of the points for the gradient estimate.
const ASINH_GRADIENT_SPACING: f64 = 1e-7;

/// Minimum absolute spacing of the points for the gradient estimate.
const ASINH_GRADIENT_MIN_SPACING: f64 = 1e-300;

/// Above this magnitude the seed and the gradient are computed in decimal.
pub(super) const HYPERBOLIC_F64_MAX_MAGNITUDE: Exponent = 150;

impl DecNumber {
    /// Computes the hyperbolic arcsine of a number. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the absolute value of the result is too small.
    pub fn asinh(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }

        // asinh(x) = x - x^3/6 + ...
        if self.is_first_order(ctx.precision()) {
            return self.round(ctx);
        }

        if self.is_negative() {
            return Ok(self.neg().asinh(ctx)?.neg());
        }

        let wrk = ctx.inc(GUARD);

        self.asinh_positive(&wrk)?.round(ctx)
    }

    fn asinh_positive(&self, wrk: &Context) -> Result<Self, Error> {
        if let Some(r) = self.ln_double_large(wrk)? {
            return Ok(r);
        }

        let (seed, gradient) = if self.magnitude() > HYPERBOLIC_F64_MAX_MAGNITUDE {
            // asinh(x) ~ ln(2x), d/dx asinh(x) ~ 1/x
            (self.mul(&TWO, wrk)?.ln(wrk)?, self.recip(wrk)?)
        } else {
            let y = self.to_f64();
            let h = (y * ASINH_GRADIENT_SPACING).max(ASINH_GRADIENT_MIN_SPACING);
            (Self::from_f64(y.asinh())?, sample_gradient(f64::asinh, y - h, y + h)?)
        };

        newton_solve("asinh", |g, c| g.sinh(c), self, seed, &gradient, wrk)
    }

    /// ln(2x) if it equals asinh(x) and acosh(x) at the precision of the context.
    pub(super) fn ln_double_large(&self, wrk: &Context) -> Result<Option<Self>, Error> {
        // asinh(x) - ln(2x) ~ 1/(4x^2)
        if self.magnitude() > (wrk.precision() / 2 + 1) as Exponent {
            // 2x can be out of the exponent range.
            let r = self.ln(wrk)?.add(&TWO.ln(wrk)?, wrk)?;
            Ok(Some(r))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use crate::defs::EXPONENT_MAX;
    use crate::defs::EXPONENT_MIN;
    use num_bigint::BigInt;

    fn coeff(d: &DecNumber) -> String {
        d.to_raw_parts().0.to_string()
    }

    #[test]
    fn test_asinh() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();

        assert_eq!(DecNumber::new().asinh(&ctx).unwrap(), DecNumber::new());
        assert_eq!(coeff(&DecNumber::from_u8(2).asinh(&ctx).unwrap()), "144363547517881034249327674027");
        assert_eq!(
            coeff(&DecNumber::from_parts(BigInt::from(-1), -3).asinh(&ctx).unwrap()),
            "-999999833333408333288690506572"
        );
        assert_eq!(
            coeff(&DecNumber::from_parts(BigInt::from(1), 200).asinh(&ctx).unwrap()),
            "461210165779369082113015523058"
        );

        let tiny = DecNumber::from_parts(BigInt::from(3), -400);
        assert_eq!(tiny.asinh(&ctx).unwrap(), tiny);
    }

    #[test]
    fn test_asinh_exponent_range() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();

        let x = DecNumber::from_raw_parts(BigInt::from(-1), EXPONENT_MIN).unwrap();
        assert_eq!(x.asinh(&ctx).unwrap(), x);

        // asinh(9e2147483648) = ln(1.8e2147483649) = 4944763838.22364422568977627895
        let x = DecNumber::from_raw_parts(BigInt::from(9), EXPONENT_MAX).unwrap();
        assert_eq!(coeff(&x.asinh(&ctx).unwrap()), "494476383822364422568977627895");
        assert_eq!(coeff(&x.neg().asinh(&ctx).unwrap()), "-494476383822364422568977627895");
    }
}
