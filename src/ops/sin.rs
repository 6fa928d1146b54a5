//! Sine.

use crate::common::consts::NINETY;
use crate::common::consts::ONE;
use crate::common::consts::ONE_EIGHTY;
use crate::common::consts::THREE_SIXTY;
use crate::common::util::pow10;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;
use crate::ops::GUARD;
use num_bigint::BigUint;

// Polynomial coefficient generator: 1/3!, 1/5!, 1/7!, ... with alternating or constant sign.
pub(super) struct SinPolycoeffGen {
    fct: DecNumber,
    inc: u64,
    alternate: bool,
}

impl SinPolycoeffGen {
    /// `alternate` is true for the sine, and false for the hyperbolic sine.
    pub(super) fn new(alternate: bool) -> Self {
        SinPolycoeffGen {
            fct: ONE.clone(),
            inc: 1,
            alternate,
        }
    }
}

impl PolycoeffGen for SinPolycoeffGen {
    fn next(&mut self, ctx: &Context) -> Result<&DecNumber, Error> {
        let d = DecNumber::from_u64((self.inc + 1) * (self.inc + 2));
        self.inc += 2;
        self.fct = self.fct.div(&d, ctx)?;
        if self.alternate {
            self.fct = self.fct.neg();
        }
        Ok(&self.fct)
    }
}

impl DecNumber {
    /// Computes the sine of a number given in degrees. The result is rounded according to the context.
    /// Multiples of 90 degrees give exact results.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too small number.
    pub fn sin(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }

        let mut neg = self.is_negative();

        // 0 <= d < 360
        let mut d = self.reduce_degrees();

        if d.cmp(&ONE_EIGHTY) >= 0 {
            d = d.sub_full_prec(&ONE_EIGHTY);
            neg = !neg;
        }

        if d.cmp(&NINETY) > 0 {
            d = ONE_EIGHTY.sub_full_prec(&d);
        }

        if d.is_zero() {
            return Ok(Self::new());
        }

        let ret = if d == *NINETY {
            ONE.clone()
        } else {
            let wrk = ctx.inc(GUARD);
            let x = d.mul(&CONSTS.deg2rad(&wrk)?, &wrk)?;
            x.sin_series(&wrk)?
        };

        if neg {
            ret.neg().round(ctx)
        } else {
            ret.round(ctx)
        }
    }

    /// Computes the sine of a number given in radians. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too small number.
    pub(crate) fn sin_rad(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }

        if self.is_negative() {
            return Ok(self.neg().sin_rad(ctx)?.neg());
        }

        let wrk = ctx.inc(GUARD);

        let mut x = self.clone();
        let tau = CONSTS.tau(&wrk)?;
        if x.cmp(&tau) >= 0 {
            // the integer part of x / tau takes digits from the precision.
            let wrk2 = wrk.inc(x.magnitude() as usize + 1);
            x = x.rem(&CONSTS.tau(&wrk2)?, &wrk2)?;
        }

        let pi = CONSTS.pi(&wrk)?;
        let mut neg = false;
        if x.cmp(&pi) > 0 {
            x = tau.sub(&x, &wrk)?;
            neg = true;
        }

        if x.cmp(&CONSTS.half_pi(&wrk)?) > 0 {
            x = pi.sub(&x, &wrk)?;
        }

        let ret = x.round(&wrk)?.sin_series(&wrk)?;

        if neg {
            ret.neg().round(ctx)
        } else {
            ret.round(ctx)
        }
    }

    // sin:  x - x^3/3! + x^5/5! - x^7/7! + ...
    fn sin_series(&self, wrk: &Context) -> Result<Self, Error> {
        if self.is_first_order(wrk.precision()) {
            return Ok(self.clone());
        }

        let x_step = self.mul(self, wrk)?;
        let x_first = self.mul(&x_step, wrk)?;
        series_run(self.clone(), x_first, &x_step, &mut SinPolycoeffGen::new(true), wrk)
    }

    // Exact value of |self| modulo 360.
    pub(super) fn reduce_degrees(&self) -> Self {
        if self.abs_cmp(&THREE_SIXTY) < 0 {
            return self.abs();
        }

        let (m, e) = self.to_raw_parts();
        let m = m.magnitude();
        let modulus = BigUint::from(360u32);

        if e >= 0 {
            // m * 10^e mod 360
            let p = BigUint::from(10u32).modpow(&BigUint::from(e as u64), &modulus);
            let r = (m % &modulus) * p % &modulus;
            Self::from_biguint(r)
        } else {
            let modulus = modulus * pow10((-e) as usize);
            Self::from_unsigned(m % modulus, e, false)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use num_bigint::BigInt;

    fn coeff(d: &DecNumber) -> String {
        d.to_raw_parts().0.to_string()
    }

    #[test]
    fn test_sin() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();

        for (deg, expected) in [(0, 0), (90, 1), (180, 0), (270, -1), (360, 0), (-90, -1), (450, 1), (-540, 0)] {
            assert_eq!(DecNumber::from_i32(deg).sin(&ctx).unwrap(), DecNumber::from_i32(expected));
        }

        let half = DecNumber::from_parts(BigInt::from(5), -1);
        assert_eq!(DecNumber::from_u8(30).sin(&ctx).unwrap(), half);
        assert_eq!(DecNumber::from_u8(150).sin(&ctx).unwrap(), half);
        assert_eq!(DecNumber::from_i16(-330).sin(&ctx).unwrap(), half);

        let r = DecNumber::from_u8(45).sin(&ctx).unwrap();
        assert_eq!(coeff(&r), "707106781186547524400844362105");

        // exact reduction of large arguments: 1e20 mod 360 = 280
        let r = DecNumber::from_parts(BigInt::from(1), 20).sin(&ctx).unwrap();
        assert_eq!(coeff(&r), "-98480775301220805936674302459");

        // sin(-0.001 deg) = -1.74532925190571996135491056851e-5
        let r = DecNumber::from_parts(BigInt::from(-1), -3).sin(&ctx).unwrap();
        assert_eq!(coeff(&r), "-174532925190571996135491056851");
        assert_eq!(r.magnitude(), -5);
    }

    #[test]
    fn test_reduce_degrees() {
        let d = DecNumber::from_parts(BigInt::from(12345678901234567890123u128), 5);
        assert_eq!(d.reduce_degrees(), DecNumber::from_u8(240));

        let d = DecNumber::from_parts(BigInt::from(-7205), -1);
        assert_eq!(d.reduce_degrees(), DecNumber::from_parts(BigInt::from(5), -1));

        let d = DecNumber::from_parts(BigInt::from(3599), -1);
        assert_eq!(d.reduce_degrees(), d);
    }

    #[test]
    fn test_sin_rad() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();

        let r = DecNumber::from_u8(100).sin_rad(&ctx).unwrap();
        assert_eq!(coeff(&r), "-50636564110975879365655761046");

        let r = DecNumber::from_parts(BigInt::from(1), 10).sin_rad(&ctx).unwrap();
        assert_eq!(coeff(&r), "-487506025087510691527794294348");

        let r = DecNumber::from_i8(-100).sin_rad(&ctx).unwrap();
        assert_eq!(coeff(&r), "50636564110975879365655761046");
    }
}
