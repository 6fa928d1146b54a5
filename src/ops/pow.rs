//! Exponentiation.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::QUARTER;
use crate::common::util::digits_u64;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::GUARD;
use crate::ops::POW_INT_DIGITS;

/// Integer exponents with absolute value below this limit are computed by repeated squaring.
const POWI_LIMIT: u64 = 999_999_999;

impl DecNumber {
    /// Computes `self` to the power of the integer `n` by repeated squaring.
    /// The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn powi(&self, n: u64, ctx: &Context) -> Result<Self, Error> {
        if n == 0 {
            return Ok(ONE.clone());
        }

        if self.is_zero() || n == 1 {
            return self.round(ctx);
        }

        let wrk = ctx.inc(digits_u64(n) + 1);

        // left to right, so intermediate values never exceed the result in magnitude.
        let mut bit = 63 - n.leading_zeros();
        let mut acc = self.round(&wrk)?;
        let x = acc.clone();
        while bit > 0 {
            bit -= 1;
            acc = acc.mul(&acc, &wrk)?;
            if n & (1 << bit) != 0 {
                acc = acc.mul(&x, &wrk)?;
            }
        }

        acc.round(ctx)
    }

    /// Computes `self` to the power of `y`. The result is rounded according to the context.
    ///
    /// Exponents 0.5 and 0.25 are computed with square roots, integer exponents are computed
    /// by repeated squaring, and all other exponents as `exp(ln(self) * y)`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large or too small number.
    ///  - DivisionByZero: `self` is zero and `y` is negative.
    ///  - InvalidArgument: `self` is negative and `y` is not an integer.
    pub fn pow(&self, y: &Self, ctx: &Context) -> Result<Self, Error> {
        if y.is_zero() {
            return Ok(ONE.clone());
        }

        if Self::is_f64_exact(y) {
            if y.is_int() {
                if let Some(n) = y.abs().to_u64() {
                    if n < POWI_LIMIT && y.magnitude() < ctx.precision() as Exponent {
                        return self.powi_signed(n, y.is_negative(), ctx);
                    }
                }
            } else if !self.is_negative() {
                if y == &*HALF {
                    return self.sqrt(ctx);
                }

                if y == &*QUARTER {
                    let wrk = ctx.inc(GUARD);
                    return self.sqrt(&wrk)?.sqrt(ctx);
                }
            }
        }

        self.pow_exp_ln(y, ctx)
    }

    fn powi_signed(&self, n: u64, neg: bool, ctx: &Context) -> Result<Self, Error> {
        if neg {
            if self.is_zero() {
                return Err(Error::DivisionByZero);
            }

            let wrk = ctx.inc(GUARD);
            ONE.div(&self.powi(n, &wrk)?, ctx)
        } else {
            self.powi(n, ctx)
        }
    }

    // exp(ln(x) * y) for an arbitrary y.
    fn pow_exp_ln(&self, y: &Self, ctx: &Context) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        if self.is_zero() {
            return if y.is_negative() {
                Err(Error::DivisionByZero)
            } else {
                Ok(Self::new())
            };
        }

        if self.is_one() {
            return Ok(ONE.clone());
        }

        // ln(x)*y keeps its integer digits, and a number in the exponent range has at most 10 of them.
        let wrk = ctx.inc(GUARD + POW_INT_DIGITS);
        let t = self.ln(&wrk)?.mul(y, &wrk)?;

        if t.magnitude() >= POW_INT_DIGITS as Exponent {
            // far beyond the exponent range: infinity or zero.
            return t.exp(ctx);
        }

        // exp(t) = exp(f) * 10^n, t = n*ln(10) + f, so the result is not limited by the range of exp.
        let ln10 = CONSTS.ln_10(&wrk)?;
        let n = t.div(&ln10, &wrk)?.floor();
        let f = t.sub(&n.mul(&ln10, &wrk)?, &wrk)?;
        let n = n.to_i64().unwrap_or(0);

        match f.exp(&wrk)?.scale(n).round(ctx) {
            Err(Error::ExponentOverflow(Sign::Neg)) => Ok(Self::new()),
            r => r,
        }
    }

    // y converts to f64 without loss.
    fn is_f64_exact(y: &Self) -> bool {
        y.digits() <= 17 && Self::from_f64(y.to_f64()).map_or(false, |d| &d == y)
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
    fn test_powi() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();

        let two = DecNumber::from_u8(2);
        assert_eq!(two.powi(10, &ctx).unwrap(), DecNumber::from_u16(1024));
        assert_eq!(two.powi(0, &ctx).unwrap(), DecNumber::from_u8(1));
        assert_eq!(two.powi(1, &ctx).unwrap(), two);
        assert_eq!(
            two.powi(100, &ctx).unwrap(),
            DecNumber::from_raw_parts(BigInt::from(126765060022822940149670320538u128), 1).unwrap()
        );
        assert_eq!(DecNumber::from_i8(-3).powi(3, &ctx).unwrap(), DecNumber::from_i8(-27));
        assert_eq!(DecNumber::new().powi(5, &ctx).unwrap(), DecNumber::new());

        let big = DecNumber::from_raw_parts(BigInt::from(1), 100_000_000).unwrap();
        assert_eq!(big.powi(100, &ctx), Err(Error::ExponentOverflow(crate::defs::Sign::Pos)));
        let small = DecNumber::from_raw_parts(BigInt::from(1), -100_000_000).unwrap();
        assert_eq!(small.powi(100, &ctx), Err(Error::ExponentOverflow(crate::defs::Sign::Neg)));
    }

    #[test]
    fn test_pow() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();

        let two = DecNumber::from_u8(2);
        assert_eq!(two.pow(&DecNumber::from_i8(-2), &ctx).unwrap(), DecNumber::from_parts(BigInt::from(25), -2));
        assert_eq!(
            DecNumber::from_u8(16).pow(&DecNumber::from_f64(0.25).unwrap(), &ctx).unwrap(),
            two
        );
        assert_eq!(
            DecNumber::from_u8(81).pow(&DecNumber::from_f64(0.5).unwrap(), &ctx).unwrap(),
            DecNumber::from_u8(9)
        );
        assert_eq!(DecNumber::new().pow(&DecNumber::from_i8(-1), &ctx), Err(Error::DivisionByZero));
        assert_eq!(
            DecNumber::from_i8(-8).pow(&DecNumber::from_f64(0.5).unwrap(), &ctx),
            Err(Error::InvalidArgument)
        );

        // 2^1.5 = 2.8284271247461900976033774484194
        let r = two.pow(&DecNumber::from_f64(1.5).unwrap(), &ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "282842712474619009760337744842");

        // 10^-0.3 = 0.5011872336272722850015541868849
        let r = DecNumber::from_u8(10).pow(&DecNumber::from_parts(BigInt::from(-3), -1), &ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "501187233627272285001554186885");
    }

    #[test]
    fn test_pow_exponent_range() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();
        let third = DecNumber::from_u8(1).div(&DecNumber::from_u8(3), &ctx.inc(GUARD + POW_INT_DIGITS)).unwrap();

        // (9e2147483648)^(1/3) = 9.65489384605629757859932784435e715827882
        let x = DecNumber::from_raw_parts(BigInt::from(9), EXPONENT_MAX).unwrap();
        let r = x.pow(&third, &ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "965489384605629757859932784435");
        assert_eq!(r.magnitude(), 715827882);

        // (1e-2147483647)^(1/3) = 4.64158883361277889241007635092e-715827883
        let x = DecNumber::from_raw_parts(BigInt::from(1), EXPONENT_MIN).unwrap();
        let r = x.pow(&third, &ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "464158883361277889241007635092");
        assert_eq!(r.magnitude(), -715827883);

        // below the exponent range the power is zero, above it overflows
        let y = DecNumber::from_parts(BigInt::from(25), -1);
        assert_eq!(x.pow(&y, &ctx).unwrap(), DecNumber::new());
        let x = DecNumber::from_raw_parts(BigInt::from(1), 1000000000).unwrap();
        assert_eq!(x.pow(&y, &ctx), Err(Error::ExponentOverflow(Sign::Pos)));
    }
}
