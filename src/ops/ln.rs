//! Natural logarithm.

use crate::common::consts::ONE;
use crate::common::util::digits_u64;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::GUARD;

/// Maximum number of Newton iterations.
const LN_MAX_ITER: usize = 500;

impl DecNumber {
    /// Computes the natural logarithm of a number. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is zero or negative.
    pub fn ln(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() || self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        if self.is_one() {
            return Ok(Self::new());
        }

        // near 1 the result is small, and x - 1 shows how many leading digits cancel out.
        let k = self.magnitude();
        let extra = if k == 0 || k == -1 {
            let d = self.sub(&ONE, &ctx.inc(GUARD))?;
            (-d.magnitude()).max(0) as usize
        } else {
            0
        };

        let wrk = ctx.inc(GUARD + extra);

        self.ln_scaled(k, &wrk)?.round(ctx)
    }

    // ln(x) = ln(m) + k * ln(10), where x = m * 10^k, 1 <= m < 10
    fn ln_scaled(&self, k: Exponent, wrk: &Context) -> Result<Self, Error> {
        let m = self.scale(-k);

        let mut ret = m.ln_newton(wrk)?;

        if k != 0 {
            let wrk2 = wrk.inc(digits_u64(k.unsigned_abs()));
            let ln10 = CONSTS.ln_10(&wrk2)?;
            let t = ln10.mul(&Self::from_i64(k), &wrk2)?;
            ret = ret.add(&t, wrk)?;
        }

        Ok(ret)
    }

    // Newton's method for ln(m), 1 <= m < 10: g = g + m * exp(-g) - 1
    fn ln_newton(&self, wrk: &Context) -> Result<Self, Error> {
        if self.is_one() {
            return Ok(Self::new());
        }

        let mut g = Self::from_f64(self.to_f64().ln())?;
        let mut prev = None;
        let mut i = 0;
        while i < LN_MAX_ITER {
            let t = self.mul(&g.neg().exp(wrk)?, wrk)?;
            let new_g = g.add(&t.sub(&ONE, wrk)?, wrk)?;

            if new_g == g {
                tracing::debug!(iterations = i, p = wrk.precision(), "ln converged");
                return Ok(new_g);
            }

            // oscillation at the last digit
            if prev.as_ref() == Some(&new_g) {
                tracing::debug!(iterations = i, p = wrk.precision(), "ln oscillates at the last digit");
                return Ok(new_g);
            }

            prev = Some(g);
            g = new_g;
            i += 1;
        }

        tracing::warn!(p = wrk.precision(), "ln did not converge after {} iterations", LN_MAX_ITER);

        Ok(g)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use crate::defs::EXPONENT_MAX;
    use crate::defs::EXPONENT_MIN;
    use num_bigint::BigInt;

    #[test]
    fn test_ln() {
        let ctx = Context::new(40, RoundingMode::ToEven).unwrap();

        assert_eq!(DecNumber::from_u8(1).ln(&ctx).unwrap(), DecNumber::new());
        assert_eq!(DecNumber::new().ln(&ctx), Err(Error::InvalidArgument));
        assert_eq!(DecNumber::from_i8(-2).ln(&ctx), Err(Error::InvalidArgument));

        let r = DecNumber::from_u8(2).ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "6931471805599453094172321214581765680755");

        let r = DecNumber::from_u8(10).ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "2302585092994045684017991454684364207601");

        // ln(0.001) = -6.907755278982137052053974364053092622803
        let r = DecNumber::from_parts(BigInt::from(1), -3).ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "-6907755278982137052053974364053092622803");

        // ln(1.000000000000000000001) = 9.999999999999999999995000000000000000000e-22
        let x = DecNumber::from_parts(BigInt::from(10).pow(21) + 1, -21);
        let r = x.ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "9999999999999999999995");
        assert_eq!(r.magnitude(), -22);

        // ln(0.999999999999) = -1.000000000000500000000000333333333333583e-12
        let x = DecNumber::from_parts(BigInt::from(999999999999i64), -12);
        let r = x.ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "-1000000000000500000000000333333333333583");

        // ln(3e1000) = 2303.683705282713793709386699921286733305749
        let x = DecNumber::from_parts(BigInt::from(3), 1000);
        let r = x.ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "2303683705282713793709386699921286733306");
    }

    #[test]
    fn test_ln_exponent_range() {
        let ctx = Context::new(40, RoundingMode::ToEven).unwrap();

        // ln(1e-300000000) = -690775527.8982137052053974364053092622803
        let x = DecNumber::from_parts(BigInt::from(1), -300000000);
        let r = x.ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "-6907755278982137052053974364053092622803");
        assert_eq!(r.magnitude(), 8);

        // ln(1e-2147483647) = -4944763833.030687374799565902720413682415
        let x = DecNumber::from_raw_parts(BigInt::from(1), EXPONENT_MIN).unwrap();
        let r = x.ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "-4944763833030687374799565902720413682415");

        // ln(9e2147483648) = 4944763837.530497045129830969528895610945
        let x = DecNumber::from_raw_parts(BigInt::from(9), EXPONENT_MAX).unwrap();
        let r = x.ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "4944763837530497045129830969528895610945");

        // 1 - 1e-50 needs 50 more digits for the cancellation
        let x = DecNumber::from_parts(BigInt::from(10).pow(50) - 1, -50);
        let r = x.ln(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "-1000000000000000000000000000000000000000");
        assert_eq!(r.magnitude(), -50);
    }
}
