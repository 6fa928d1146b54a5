//! Addition and subtraction.

use crate::common::util::pow10;
use crate::common::util::LOG10_2;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::num::DecNumber;
use num_bigint::BigInt;

impl DecNumber {
    /// Adds `d2` to `self` and returns the result of the addition rounded according to the context.
    ///
    /// When the operands differ in magnitude by more than the precision of the context,
    /// the smaller operand can not change the rounded result, and the exact addition is skipped.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of the allowed range.
    pub fn add(&self, d2: &Self, ctx: &Context) -> Result<Self, Error> {
        if d2.is_zero() {
            return self.round(ctx);
        }

        if self.is_zero() {
            return d2.round(ctx);
        }

        if self == d2 {
            return self.double(ctx);
        }

        let s1 = self.size_estimate();
        let s2 = d2.size_estimate();

        if (s1 - s2).abs() > (ctx.precision() + 1) as f64 {
            if s1 > s2 {
                self.add_skip(d2, ctx)
            } else {
                d2.add_skip(self, ctx)
            }
        } else {
            self.add_full_prec(d2).round(ctx)
        }
    }

    /// Subtracts `d2` from `self` and returns the result of the subtraction rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of the allowed range.
    pub fn sub(&self, d2: &Self, ctx: &Context) -> Result<Self, Error> {
        self.add(&d2.neg(), ctx)
    }

    /// Adds `d2` to `self` exactly, without checking the exponent range.
    pub fn add_full_prec(&self, d2: &Self) -> Self {
        if d2.is_zero() {
            return self.clone();
        }

        if self.is_zero() {
            return d2.clone();
        }

        let (m1, e1) = self.to_raw_parts();
        let (m2, e2) = d2.to_raw_parts();

        let e = e1.min(e2);
        let m = Self::shift_mantissa(m1, e1 - e) + Self::shift_mantissa(m2, e2 - e);

        Self::from_parts(m, e)
    }

    /// Subtracts `d2` from `self` exactly, without checking the exponent range.
    pub fn sub_full_prec(&self, d2: &Self) -> Self {
        self.add_full_prec(&d2.neg())
    }

    fn shift_mantissa(m: &BigInt, shift: Exponent) -> BigInt {
        if shift == 0 {
            m.clone()
        } else {
            m * BigInt::from(pow10(shift as usize))
        }
    }

    // self + self with a single shift of the coefficient.
    fn double(&self, ctx: &Context) -> Result<Self, Error> {
        let (m, e) = self.to_raw_parts();
        Self::from_parts(m << 1usize, e).round(ctx)
    }

    // Estimated decimal order of magnitude: exponent + bit length * log10(2).
    fn size_estimate(&self) -> f64 {
        let (m, e) = self.to_raw_parts();
        e as f64 + m.bits() as f64 * LOG10_2
    }

    // self is much larger than small.
    fn add_skip(&self, small: &Self, ctx: &Context) -> Result<Self, Error> {
        if self.digits() <= ctx.precision() {
            // small is below a fraction of the unit in the last place of the rounded result.
            return self.round(ctx);
        }

        // self itself is rounded: small affects only the direction of rounding,
        // so it is enough to replace it with a single digit below the last digit of self.
        if small.magnitude() < self.exponent() {
            let sticky = DecNumber::from_parts(
                if small.is_negative() {
                    BigInt::from(-1)
                } else {
                    BigInt::from(1)
                },
                self.exponent() - 1,
            );
            return self.add_full_prec(&sticky).round(ctx);
        }

        self.add_full_prec(small).round(ctx)
    }
}
