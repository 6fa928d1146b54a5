//! Square root.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::THREE_HALVES;
use crate::common::util::log2_ceil;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::ops::GUARD;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

impl DecNumber {
    /// Computes the square root of a number. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is negative.
    pub fn sqrt(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        if self.is_zero() {
            return Ok(Self::new());
        }

        let wrk = ctx.inc(GUARD);

        // x = s * 10^(2h), 1 <= s < 100, so intermediate values stay in the exponent range.
        let h = self.magnitude().div_euclid(2);
        let s = self.scale(-2 * h);

        let half = s.mul(&HALF, &wrk)?;

        // reciprocal square root: g = g * (1.5 - 0.5 * s * g^2)
        let mut guess = s.rsqrt_seed(&wrk)?;
        let max_iter = (log2_ceil(wrk.precision()) as f64 * std::f64::consts::LOG2_10) as usize + 4;
        let mut i = 0;
        while i < max_iter {
            let t0 = guess.mul(&guess, &wrk)?;
            let t1 = half.mul(&t0, &wrk)?;
            let t2 = THREE_HALVES.sub(&t1, &wrk)?;
            let new_guess = guess.mul(&t2, &wrk)?;

            if new_guess == guess {
                break;
            }

            guess = new_guess;
            i += 1;
        }

        tracing::debug!(iterations = i, p = ctx.precision(), "sqrt");

        ONE.div(&guess, &wrk)?.scale(h).round(ctx)
    }

    // Reciprocal of the square root estimated from the most significant 60 bits of the coefficient.
    fn rsqrt_seed(&self, wrk: &Context) -> Result<Self, Error> {
        let (m, e) = self.to_raw_parts();
        let m = m.magnitude();

        // even shift, so the square root of 2^shift is an integer power of 2.
        let shift = (m.bits().saturating_sub(60) & !1) as usize;
        let approx = (m >> shift).to_f64().unwrap_or(f64::MAX);

        // sqrt(m * 10^e) = sqrt(approx) * 2^(shift/2) * 10^floor(e/2) * sqrt(10)^(e mod 2)
        let mut guess = Self::from_f64(approx.sqrt())?.scale(e.div_euclid(2));
        if shift > 0 {
            let pow2 = Self::from_biguint(BigUint::from(1u32) << (shift / 2));
            guess = guess.mul(&pow2, wrk)?;
        }
        if e.rem_euclid(2) != 0 {
            guess = guess.mul(&Self::from_f64(std::f64::consts::SQRT_2 * 2.23606797749979)?, wrk)?;
        }

        ONE.div(&guess, wrk)
    }
}
