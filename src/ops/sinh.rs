//! Hyperbolic sine.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::series::series_run;
use crate::ops::sin::SinPolycoeffGen;
use crate::ops::GUARD;

impl DecNumber {
    /// Computes the hyperbolic sine of a number. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the absolute value of the result is too large.
    pub fn sinh(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }

        if self.is_first_order(ctx.precision()) {
            return self.round(ctx);
        }

        let wrk = ctx.inc(GUARD);

        let ret = if self.abs_cmp(&ONE) < 0 {
            // sinh:  x + x^3/3! + x^5/5! + x^7/7! + ...
            let x = self.round(&wrk)?;
            let x_step = x.mul(&x, &wrk)?;
            let x_first = x.mul(&x_step, &wrk)?;
            series_run(x, x_first, &x_step, &mut SinPolycoeffGen::new(false), &wrk)?
        } else {
            // (e^x - e^-x) / 2
            let ex = self.abs().exp(&wrk)?;
            let r = ex.sub(&ONE.div(&ex, &wrk)?, &wrk)?.div(&TWO, &wrk)?;
            if self.is_negative() {
                r.neg()
            } else {
                r
            }
        };

        ret.round(ctx)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use crate::defs::Sign;
    use crate::defs::EXPONENT_MIN;
    use num_bigint::BigInt;

    fn coeff(d: &DecNumber) -> String {
        d.to_raw_parts().0.to_string()
    }

    #[test]
    fn test_sinh() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();

        assert_eq!(DecNumber::new().sinh(&ctx).unwrap(), DecNumber::new());
        assert_eq!(coeff(&DecNumber::from_u8(1).sinh(&ctx).unwrap()), "11752011936438014568823818506");
        assert_eq!(coeff(&DecNumber::from_i8(-2).sinh(&ctx).unwrap()), "-36268604078470187676682139828");
        assert_eq!(
            coeff(&DecNumber::from_parts(BigInt::from(1), -3).sinh(&ctx).unwrap()),
            "10000001666666750000001984127"
        );

        let r = DecNumber::from_u8(100).sinh(&ctx).unwrap();
        assert_eq!(coeff(&r), "134405857090806772420631277579");
        assert_eq!(r.magnitude(), 43);

        let tiny = DecNumber::from_parts(BigInt::from(1), -20);
        assert_eq!(tiny.sinh(&ctx).unwrap(), tiny);

        let big = DecNumber::from_parts(BigInt::from(1), 10);
        assert_eq!(big.sinh(&ctx), Err(Error::ExponentOverflow(Sign::Pos)));

        for e in [-300000000, EXPONENT_MIN] {
            let x = DecNumber::from_raw_parts(BigInt::from(-5), e).unwrap();
            assert_eq!(x.sinh(&ctx).unwrap(), x);
        }
    }
}
