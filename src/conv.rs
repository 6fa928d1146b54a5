//! Conversion utilities.

use crate::common::util::pow10;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::num::DecNumber;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_traits::Pow;
use num_traits::ToPrimitive;

/// Numbers with greater magnitude convert to infinity.
const F64_MAX_MAGNITUDE: Exponent = 308;

/// Numbers with smaller magnitude convert to zero.
const F64_MIN_MAGNITUDE: Exponent = -324;

macro_rules! impl_int_conv {
    ($s:ty, $from_s:ident) => {
        impl DecNumber {
            /// Constructs a number from an integer value.
            pub fn $from_s(i: $s) -> Self {
                Self::from_parts(BigInt::from(i), 0)
            }
        }
    };
}

impl_int_conv!(i8, from_i8);
impl_int_conv!(i16, from_i16);
impl_int_conv!(i32, from_i32);
impl_int_conv!(i64, from_i64);
impl_int_conv!(i128, from_i128);

impl_int_conv!(u8, from_u8);
impl_int_conv!(u16, from_u16);
impl_int_conv!(u32, from_u32);
impl_int_conv!(u64, from_u64);
impl_int_conv!(u128, from_u128);
impl_int_conv!(usize, from_usize);

impl DecNumber {
    /// Constructs a number from an arbitrary precision integer.
    pub fn from_bigint(i: BigInt) -> Self {
        Self::from_parts(i, 0)
    }

    /// Constructs a number from an arbitrary precision unsigned integer.
    pub fn from_biguint(i: BigUint) -> Self {
        Self::from_unsigned(i, 0, false)
    }

    /// Constructs a number from `f64` exactly: every finite `f64` has a finite decimal expansion.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `f` is NaN or infinite.
    pub fn from_f64(f: f64) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::InvalidArgument);
        }

        if f == 0.0 {
            return Ok(Self::new());
        }

        let bits = f.to_bits();
        let neg = bits >> 63 != 0;
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & ((1u64 << 52) - 1);

        // f = m * 2^e2
        let (m, e2) = if biased == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), biased - 1075)
        };

        let m = BigUint::from(m);
        let ret = if e2 >= 0 {
            Self::from_unsigned(m << (e2 as usize), 0, neg)
        } else {
            // m * 2^-k = m * 5^k * 10^-k
            let k = (-e2) as usize;
            let five_pow: BigUint = Pow::pow(BigUint::from(5u32), k);
            Self::from_unsigned(m * five_pow, -(k as Exponent), neg)
        };

        Ok(ret)
    }

    /// Converts the number to `f64`. The result is the nearest `f64` to the number rounded to 17 digits.
    /// Numbers out of the `f64` range convert to infinity or to zero.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let ctx = Context::new(17, RoundingMode::ToEven).unwrap_or_default();
        let r = self.round_unchecked(&ctx);

        let f = if r.magnitude() > F64_MAX_MAGNITUDE {
            f64::INFINITY
        } else if r.magnitude() < F64_MIN_MAGNITUDE {
            0.0
        } else {
            let (m, e) = r.to_raw_parts();
            let m = m.magnitude();
            let (q, exp2, sticky) = if e >= 0 {
                let n = m * pow10(e as usize);
                let shift = n.bits().saturating_sub(64);
                let q = &n >> shift;
                let sticky = shift > 0 && (q.clone() << shift) != n;
                (q, shift as i64, sticky)
            } else {
                // m / 10^k with 63 or 64 significant bits.
                let den = pow10((-e) as usize);
                let shift = 63 + den.bits() - m.bits();
                let num = m << shift;
                let q = &num / &den;
                let sticky = &q * &den != num;
                (q, -(shift as i64), sticky)
            };

            // q is exact, or has at least 10 bits below the f64 mantissa with the lowest one marking
            // the lost bits, so the conversion of q is the only rounding of a normal result.
            let q = q.to_u64().unwrap_or(u64::MAX) | sticky as u64;
            let half = exp2 / 2;
            (q as f64) * 2f64.powi(half as i32) * 2f64.powi((exp2 - half) as i32)
        };

        if self.is_negative() {
            -f
        } else {
            f
        }
    }

    /// Converts the integer part of the number to `u64`.
    /// Returns None for negative numbers and for numbers greater than `u64::MAX`.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }

        if self.magnitude() > 20 {
            return None;
        }

        self.to_bigint().to_u64()
    }

    /// Converts the integer part of the number to `i64`.
    /// Returns None if the value is out of the range of `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        if self.magnitude() > 20 {
            return None;
        }

        self.to_bigint().to_i64()
    }

    /// Converts the integer part of the absolute value of the number to an arbitrary precision unsigned integer.
    pub fn to_biguint_abs(&self) -> BigUint {
        self.to_bigint().magnitude().clone()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::EXPONENT_MAX;
    use crate::defs::EXPONENT_MIN;

    #[test]
    fn test_conv() {
        let d1 = DecNumber::from_f64(0.5).unwrap();
        assert_eq!(d1, DecNumber::from_raw_parts(BigInt::from(5), -1).unwrap());

        let d1 = DecNumber::from_f64(-1024.0).unwrap();
        assert_eq!(d1, DecNumber::from_i32(-1024));

        let d1 = DecNumber::from_f64(0.1).unwrap();
        let (m, e) = d1.to_raw_parts();
        assert_eq!(e, -55);
        assert_eq!(
            m.to_string(),
            "1000000000000000055511151231257827021181583404541015625"
        );

        assert_eq!(DecNumber::from_f64(f64::NAN), Err(Error::InvalidArgument));
        assert_eq!(DecNumber::from_f64(f64::INFINITY), Err(Error::InvalidArgument));
        assert!(DecNumber::from_f64(f64::MIN_POSITIVE / 4.0).unwrap().is_positive());

        for f in [0.1, -2.5, 1e300, 1e-300, 123456.789, f64::MAX, 5e-324] {
            assert_eq!(DecNumber::from_f64(f).unwrap().to_f64(), f);
        }

        let d1 = DecNumber::from_raw_parts(BigInt::from(1), 400).unwrap();
        assert_eq!(d1.to_f64(), f64::INFINITY);
        let d1 = DecNumber::from_raw_parts(BigInt::from(-1), -400).unwrap();
        assert_eq!(d1.to_f64(), 0.0);

        let d1 = DecNumber::from_raw_parts(BigInt::from(9), EXPONENT_MAX).unwrap();
        assert_eq!(d1.to_f64(), f64::INFINITY);
        assert_eq!(d1.neg().to_f64(), f64::NEG_INFINITY);
        let d1 = DecNumber::from_raw_parts(BigInt::from(1), EXPONENT_MIN).unwrap();
        assert_eq!(d1.to_f64(), 0.0);

        // 17 digits, and the halfway point between two f64 values
        let d1 = DecNumber::from_raw_parts(BigInt::from(12345678901234567890u64), -10).unwrap();
        assert_eq!(d1.to_f64(), 1234567890.1234568);
        let d1 = DecNumber::from_raw_parts(BigInt::from(9007199254740993u64), 0).unwrap();
        assert_eq!(d1.to_f64(), 9007199254740992.0);
        assert_eq!(DecNumber::from_u64(u64::MAX).to_f64(), 18446744073709551615.0);

        assert_eq!(DecNumber::from_f64(12.9).unwrap().to_u64(), Some(12));
        assert_eq!(DecNumber::from_i32(-3).to_u64(), None);
        assert_eq!(DecNumber::from_f64(-3.7).unwrap().to_i64(), Some(-3));
        assert_eq!(DecNumber::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(DecNumber::from_f64(1e25).unwrap().to_u64(), None);
        assert_eq!(DecNumber::from_i32(-77).to_biguint_abs(), BigUint::from(77u32));
    }
}
