//! BigDec including finite numbers, `NaN`, and `Inf`.

use crate::common::consts::NINETY;
use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Sign;
use crate::num::DecNumber;
use crate::ops::GUARD;
use crate::ops::POW_INT_DIGITS;
use crate::worker::Controller;
use num_bigint::BigUint;
use std::cmp::Ordering;

pub const NAN: BigDec = BigDec { inner: Flavor::NaN };
pub const INF_POS: BigDec = BigDec {
    inner: Flavor::Inf(Sign::Pos),
};
pub const INF_NEG: BigDec = BigDec {
    inner: Flavor::Inf(Sign::Neg),
};

/// Number representation: a finite decimal number, a signed infinity, or NaN.
///
/// Operations never fail: domain errors and indeterminate forms give NaN,
/// and results that leave the exponent range give an infinity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigDec {
    inner: Flavor,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Flavor {
    Value(DecNumber),
    NaN,
    Inf(Sign), // signed Inf
}

impl BigDec {
    /// Returns a new BigDec with the value of zero.
    pub fn zero() -> Self {
        BigDec {
            inner: Flavor::Value(DecNumber::new()),
        }
    }

    /// Returns a new BigDec with the value of one.
    pub fn one() -> Self {
        BigDec {
            inner: Flavor::Value(ONE.clone()),
        }
    }

    /// Creates a BigDec from f64. The conversion is exact.
    /// NaN and infinite values of f64 convert to NaN and infinities.
    pub fn from_f64(f: f64) -> Self {
        if f.is_nan() {
            NAN
        } else if f.is_infinite() {
            Self::inf(if f > 0.0 { Sign::Pos } else { Sign::Neg })
        } else {
            Self::result_to_ext(DecNumber::from_f64(f))
        }
    }

    /// Converts `self` to the nearest f64.
    pub fn to_f64(&self) -> f64 {
        match &self.inner {
            Flavor::Value(v) => v.to_f64(),
            Flavor::Inf(s) => {
                if s.is_positive() {
                    f64::INFINITY
                } else {
                    f64::NEG_INFINITY
                }
            }
            Flavor::NaN => f64::NAN,
        }
    }

    /// Returns the finite value of `self`, or None if `self` is infinite or NaN.
    pub fn as_dec(&self) -> Option<&DecNumber> {
        match &self.inner {
            Flavor::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true if `self` is positive infinity.
    pub fn is_inf_pos(&self) -> bool {
        matches!(self.inner, Flavor::Inf(Sign::Pos))
    }

    /// Returns true if `self` is negative infinity.
    pub fn is_inf_neg(&self) -> bool {
        matches!(self.inner, Flavor::Inf(Sign::Neg))
    }

    /// Returns true if `self` is infinite.
    pub fn is_inf(&self) -> bool {
        matches!(self.inner, Flavor::Inf(_))
    }

    /// Return true if `self` is not a number.
    pub fn is_nan(&self) -> bool {
        matches!(self.inner, Flavor::NaN)
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        match &self.inner {
            Flavor::Value(v) => v.is_zero(),
            _ => false,
        }
    }

    /// Returns true if `self` is greater than zero.
    /// The function returns false if `self` is NaN.
    pub fn is_positive(&self) -> bool {
        match &self.inner {
            Flavor::Value(v) => v.is_positive(),
            Flavor::Inf(s) => s.is_positive(),
            Flavor::NaN => false,
        }
    }

    /// Returns true if `self` is less than zero.
    /// The function returns false if `self` is NaN.
    pub fn is_negative(&self) -> bool {
        match &self.inner {
            Flavor::Value(v) => v.is_negative(),
            Flavor::Inf(s) => s.is_negative(),
            Flavor::NaN => false,
        }
    }

    /// Returns the number with the opposite sign.
    pub fn neg(&self) -> Self {
        match &self.inner {
            Flavor::Value(v) => Self::from(v.neg()),
            Flavor::Inf(s) => Self::inf(s.invert()),
            Flavor::NaN => NAN,
        }
    }

    /// Adds `d2` to `self` and returns the result of the addition.
    pub fn add(&self, d2: &Self, ctx: &Context) -> Self {
        match &self.inner {
            Flavor::Value(v1) => match &d2.inner {
                Flavor::Value(v2) => Self::result_to_ext(v1.add(v2, ctx)),
                Flavor::Inf(s2) => Self::inf(*s2),
                Flavor::NaN => NAN,
            },
            Flavor::Inf(s1) => match &d2.inner {
                Flavor::Value(_) => Self::inf(*s1),
                Flavor::Inf(s2) => {
                    if s1 != s2 {
                        NAN
                    } else {
                        Self::inf(*s1)
                    }
                }
                Flavor::NaN => NAN,
            },
            Flavor::NaN => NAN,
        }
    }

    /// Subtracts `d2` from `self` and return the result of the subtraction.
    pub fn sub(&self, d2: &Self, ctx: &Context) -> Self {
        self.add(&d2.neg(), ctx)
    }

    /// Multiplies `self` by `d2` and returns the result of the multiplication.
    pub fn mul(&self, d2: &Self, ctx: &Context) -> Self {
        match &self.inner {
            Flavor::Value(v1) => match &d2.inner {
                Flavor::Value(v2) => Self::result_to_ext(v1.mul(v2, ctx)),
                Flavor::Inf(s2) => Self::inf_times(v1, *s2),
                Flavor::NaN => NAN,
            },
            Flavor::Inf(s1) => match &d2.inner {
                Flavor::Value(v2) => Self::inf_times(v2, *s1),
                Flavor::Inf(s2) => Self::inf(if s1 == s2 { Sign::Pos } else { Sign::Neg }),
                Flavor::NaN => NAN,
            },
            Flavor::NaN => NAN,
        }
    }

    /// Divides `self` by `d2` and returns the result of the division.
    /// Division of a non-zero number by zero gives positive infinity.
    pub fn div(&self, d2: &Self, ctx: &Context) -> Self {
        match &self.inner {
            Flavor::Value(v1) => match &d2.inner {
                Flavor::Value(v2) => {
                    if v1.is_zero() && v2.is_zero() {
                        NAN
                    } else {
                        Self::result_to_ext(v1.div(v2, ctx))
                    }
                }
                Flavor::Inf(_) => Self::zero(),
                Flavor::NaN => NAN,
            },
            Flavor::Inf(s1) => match &d2.inner {
                Flavor::Value(v2) => Self::inf_times(v2, *s1),
                Flavor::Inf(_) => NAN,
                Flavor::NaN => NAN,
            },
            Flavor::NaN => NAN,
        }
    }

    /// Returns the remainder of the truncated division of `self` by `d2`. The sign of the result follows `self`.
    /// If the integer quotient has more digits than the precision of the context, the result is NaN.
    pub fn rem(&self, d2: &Self, ctx: &Context) -> Self {
        match (&self.inner, &d2.inner) {
            (Flavor::Value(v1), Flavor::Value(v2)) => {
                if v1.is_zero() && v2.is_zero() {
                    NAN
                } else {
                    Self::result_to_ext(v1.rem(v2, ctx))
                }
            }
            _ => NAN,
        }
    }

    /// Returns `self` to the power of `d2`.
    pub fn pow(&self, d2: &Self, ctx: &Context) -> Self {
        match &self.inner {
            Flavor::Value(v1) => match &d2.inner {
                Flavor::Value(v2) => Self::result_to_ext(v1.pow(v2, ctx)),
                Flavor::Inf(s2) => {
                    // v1^inf
                    let one = &*ONE;
                    if s2.is_positive() {
                        if v1.cmp(one) > 0 {
                            INF_POS
                        } else if v1 == one {
                            Self::one()
                        } else if v1.cmp(&one.neg()) > 0 {
                            Self::zero()
                        } else {
                            NAN
                        }
                    } else if v1.abs_cmp(one) > 0 {
                        Self::zero()
                    } else if v1 == one {
                        Self::one()
                    } else if !v1.is_negative() {
                        INF_POS
                    } else {
                        NAN
                    }
                }
                Flavor::NaN => NAN,
            },
            Flavor::Inf(s1) => match &d2.inner {
                Flavor::Value(v2) => {
                    // inf^v2
                    if v2.is_zero() {
                        Self::one()
                    } else if v2.is_negative() {
                        if s1.is_negative() && !v2.is_int() {
                            NAN
                        } else {
                            Self::zero()
                        }
                    } else if s1.is_positive() {
                        INF_POS
                    } else if !v2.is_int() {
                        NAN
                    } else if v2.is_odd_int() {
                        INF_NEG
                    } else {
                        INF_POS
                    }
                }
                Flavor::Inf(s2) => {
                    // inf^inf
                    if s2.is_negative() {
                        Self::zero()
                    } else if s1.is_positive() {
                        INF_POS
                    } else {
                        NAN
                    }
                }
                Flavor::NaN => NAN,
            },
            Flavor::NaN => NAN,
        }
    }

    /// Returns the root of degree `d2` of `self`, i.e. `self` to the power of `1/d2`.
    pub fn root(&self, d2: &Self, ctx: &Context) -> Self {
        // the error of 1/d2 is multiplied by ln(self).
        let inv = Self::one().div(d2, &ctx.inc(GUARD + POW_INT_DIGITS));
        self.pow(&inv, ctx)
    }

    /// Returns the reciprocal of `self`.
    pub fn recip(&self, ctx: &Context) -> Self {
        Self::one().div(self, ctx)
    }

    /// Returns the natural logarithm of `self`. The logarithm of zero is negative infinity.
    pub fn ln(&self, ctx: &Context) -> Self {
        match &self.inner {
            Flavor::Value(v) => {
                if v.is_zero() {
                    INF_NEG
                } else {
                    Self::result_to_ext(v.ln(ctx))
                }
            }
            Flavor::Inf(s) => {
                if s.is_positive() {
                    INF_POS
                } else {
                    NAN
                }
            }
            Flavor::NaN => NAN,
        }
    }

    /// Returns the hyperbolic sine of `self`.
    pub fn sinh(&self, ctx: &Context) -> Self {
        match &self.inner {
            Flavor::Value(v) => {
                if v.is_negative() {
                    Self::result_to_ext(v.neg().sinh(ctx)).neg()
                } else {
                    Self::result_to_ext(v.sinh(ctx))
                }
            }
            Flavor::Inf(s) => Self::inf(*s),
            Flavor::NaN => NAN,
        }
    }

    /// Returns the inverse hyperbolic tangent of `self`.
    pub fn atanh(&self, ctx: &Context) -> Self {
        match &self.inner {
            Flavor::Value(v) => match v.abs_cmp(&ONE) {
                0 => Self::inf(v.sign()),
                c if c > 0 => NAN,
                _ => Self::result_to_ext(v.atanh(ctx)),
            },
            _ => NAN,
        }
    }

    /// Returns the factorial of the integer part of `self`.
    /// The computation is driven by `ctl` and gives NaN if it was stopped.
    pub fn factorial(&self, ctx: &Context, ctl: &Controller) -> Self {
        match &self.inner {
            Flavor::Value(v) => Self::long_to_ext(v.factorial(ctx, ctl)),
            Flavor::Inf(Sign::Pos) => INF_POS,
            _ => NAN,
        }
    }

    /// Returns 1 if the integer part of `self` is prime, the smallest prime factor if it is composite,
    /// and 0 if it is less than 2. The computation is driven by `ctl` and gives NaN if it was stopped.
    pub fn is_prime(&self, ctx: &Context, ctl: &Controller) -> Self {
        match &self.inner {
            Flavor::Value(v) => Self::long_to_ext(v.is_prime(ctx, ctl)),
            _ => NAN,
        }
    }

    /// Returns the power of two where the 3n+1 walk starting from the integer part of `self` arrives.
    /// The computation is driven by `ctl` and gives NaN if it was stopped.
    pub fn collatz(&self, ctl: &Controller) -> Self {
        match &self.inner {
            Flavor::Value(v) => Self::long_to_ext(v.collatz(ctl)),
            _ => NAN,
        }
    }

    /// Parses a number from the string `s`.
    /// The string is a number in plain or scientific decimal format, `NaN`, or an optionally signed `Inf` or `Infinity`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string is not a number.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = crate::parser::parse(s.trim());

        if !ps.is_valid() {
            return Err(Error::InvalidArgument);
        }

        if ps.is_inf() {
            Ok(Self::inf(ps.sign()))
        } else if ps.is_nan() {
            Ok(NAN)
        } else {
            let (digits, sign, e) = ps.raw_parts();
            if digits.is_empty() {
                return Ok(Self::zero());
            }
            let m: BigUint = digits.parse().map_err(|_| Error::InvalidArgument)?;
            let e = e - digits.len() as i64;
            let d = DecNumber::from_unsigned(m, e, sign.is_negative());
            Ok(Self::result_to_ext(d.check_exponent()))
        }
    }

    /// Returns a random number in the range [0, 1) with as many random digits as the precision of the context.
    #[cfg(feature = "random")]
    pub fn random(ctx: &Context) -> Self {
        use rand::Rng;

        const CHUNK_DIGITS: usize = 18;
        const CHUNK: u64 = 1_000_000_000_000_000_000;

        let mut rng = rand::thread_rng();
        let mut m = BigUint::default();
        let mut digits = 0;
        while digits < ctx.precision() {
            let n = CHUNK_DIGITS.min(ctx.precision() - digits);
            let bound = if n == CHUNK_DIGITS { CHUNK } else { 10u64.pow(n as u32) };
            m = m * bound + rng.gen_range(0..bound);
            digits += n;
        }

        Self::from(DecNumber::from_unsigned(m, -(digits as i64), false))
    }

    fn inf(s: Sign) -> Self {
        BigDec { inner: Flavor::Inf(s) }
    }

    // v * inf(s)
    fn inf_times(v: &DecNumber, s: Sign) -> Self {
        if v.is_zero() {
            NAN
        } else if v.sign() == s {
            INF_POS
        } else {
            INF_NEG
        }
    }

    fn result_to_ext(res: Result<DecNumber, Error>) -> Self {
        match res {
            Err(e) => match e {
                Error::ExponentOverflow(s) => Self::inf(s),
                Error::DivisionByZero => INF_POS,
                Error::InvalidArgument => NAN,
            },
            Ok(v) => BigDec { inner: Flavor::Value(v) },
        }
    }

    fn long_to_ext(res: Result<Option<DecNumber>, Error>) -> Self {
        match res {
            Ok(Some(v)) => Self::from(v),
            Ok(None) => NAN,
            Err(e) => Self::result_to_ext(Err(e)),
        }
    }
}

macro_rules! gen_wrapper {
    // exact operation
    ($comment:literal, $fname:ident, $pos_inf:block, $neg_inf:block) => {
        #[doc=$comment]
        pub fn $fname(&self) -> Self {
            match &self.inner {
                Flavor::Value(v) => Self::from(v.$fname()),
                Flavor::Inf(s) => if s.is_positive() $pos_inf else $neg_inf,
                Flavor::NaN => NAN,
            }
        }
    };
}

macro_rules! gen_wrapper_ctx {
    // rounded operation
    ($comment:literal, $fname:ident, $pos_inf:block, $neg_inf:block) => {
        #[doc=$comment]
        pub fn $fname(&self, ctx: &Context) -> Self {
            match &self.inner {
                Flavor::Value(v) => Self::result_to_ext(v.$fname(ctx)),
                Flavor::Inf(s) => if s.is_positive() $pos_inf else $neg_inf,
                Flavor::NaN => NAN,
            }
        }
    };
}

impl BigDec {
    gen_wrapper!("Returns the absolute value of `self`.", abs, { INF_POS }, { INF_POS });
    gen_wrapper!("Returns the integer part of `self`.", int, { INF_POS }, { INF_NEG });
    gen_wrapper!("Returns the fractional part of `self`.", fract, { NAN }, { NAN });
    gen_wrapper!("Returns the largest integer less than or equal to `self`.", floor, { INF_POS }, { INF_NEG });

    gen_wrapper_ctx!("Returns `self` rounded according to the context.", round, { INF_POS }, { INF_NEG });
    gen_wrapper_ctx!("Returns the square root of `self`.", sqrt, { INF_POS }, { INF_NEG });
    gen_wrapper_ctx!("Returns the logarithm base 10 of `self`.", log10, { INF_POS }, { NAN });
    gen_wrapper_ctx!("Returns `e` to the power of `self`.", exp, { INF_POS }, { Self::zero() });

    gen_wrapper_ctx!("Returns the sine of `self`. The function takes an angle in degrees as an argument.", sin, { NAN }, { NAN });
    gen_wrapper_ctx!("Returns the cosine of `self`. The function takes an angle in degrees as an argument.", cos, { NAN }, { NAN });
    gen_wrapper_ctx!("Returns the tangent of `self`. The function takes an angle in degrees as an argument.", tan, { NAN }, { NAN });
    gen_wrapper_ctx!("Returns the arcsine of `self`. The result is an angle in degrees ranging from -90 to 90.", asin, { NAN }, { NAN });
    gen_wrapper_ctx!("Returns the arccosine of `self`. The result is an angle in degrees ranging from 0 to 180.", acos, { NAN }, { NAN });
    gen_wrapper_ctx!("Returns the arctangent of `self`. The result is an angle in degrees ranging from -90 to 90.", atan, { Self::from(NINETY.clone()) }, { Self::from(NINETY.neg()) });

    gen_wrapper_ctx!("Returns the hyperbolic cosine of `self`.", cosh, { INF_POS }, { INF_POS });
    gen_wrapper_ctx!("Returns the hyperbolic tangent of `self`.", tanh, { Self::one() }, { Self::one().neg() });
    gen_wrapper_ctx!("Returns the inverse hyperbolic sine of `self`.", asinh, { INF_POS }, { INF_NEG });
    gen_wrapper_ctx!("Returns the inverse hyperbolic cosine of `self`.", acosh, { INF_POS }, { NAN });
}

macro_rules! impl_int_conv {
    ($s:ty, $from_s:ident) => {
        impl BigDec {
            /// Construct BigDec from integer value.
            pub fn $from_s(i: $s) -> Self {
                Self::from(DecNumber::$from_s(i))
            }
        }

        impl From<$s> for BigDec {
            fn from(i: $s) -> Self {
                BigDec::$from_s(i)
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

impl From<DecNumber> for BigDec {
    fn from(v: DecNumber) -> Self {
        BigDec { inner: Flavor::Value(v) }
    }
}

impl From<f64> for BigDec {
    fn from(f: f64) -> Self {
        BigDec::from_f64(f)
    }
}

impl Default for BigDec {
    fn default() -> Self {
        BigDec::zero()
    }
}

impl PartialOrd for BigDec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let c = match (&self.inner, &other.inner) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => return None,
            (Flavor::Value(v1), Flavor::Value(v2)) => v1.cmp(v2),
            (Flavor::Value(_), Flavor::Inf(s)) => -s.to_int() as i32,
            (Flavor::Inf(s), Flavor::Value(_)) => s.to_int() as i32,
            (Flavor::Inf(s1), Flavor::Inf(s2)) => s1.to_int() as i32 - s2.to_int() as i32,
        };
        Some(c.cmp(&0))
    }
}

/// Standard library features.
/// Operators use the default context.
pub mod ops {

    use super::BigDec;
    use crate::ctx::Context;
    use crate::defs::Error;
    use std::fmt::Display;
    use std::fmt::Formatter;
    use std::iter::Product;
    use std::iter::Sum;
    use std::ops::Add;
    use std::ops::AddAssign;
    use std::ops::Div;
    use std::ops::DivAssign;
    use std::ops::Mul;
    use std::ops::MulAssign;
    use std::ops::Neg;
    use std::ops::Rem;
    use std::ops::Sub;
    use std::ops::SubAssign;
    use std::str::FromStr;

    macro_rules! impl_bin_op {
        ($tr:ident, $fname:ident, $tr_assign:ident, $fname_assign:ident) => {
            impl $tr for BigDec {
                type Output = Self;
                fn $fname(self, rhs: Self) -> Self::Output {
                    BigDec::$fname(&self, &rhs, &Context::default())
                }
            }

            impl $tr<&BigDec> for BigDec {
                type Output = Self;
                fn $fname(self, rhs: &BigDec) -> Self::Output {
                    BigDec::$fname(&self, rhs, &Context::default())
                }
            }

            impl $tr_assign for BigDec {
                fn $fname_assign(&mut self, rhs: Self) {
                    *self = BigDec::$fname(self, &rhs, &Context::default())
                }
            }

            impl $tr_assign<&BigDec> for BigDec {
                fn $fname_assign(&mut self, rhs: &BigDec) {
                    *self = BigDec::$fname(self, rhs, &Context::default())
                }
            }
        };
    }

    impl_bin_op!(Add, add, AddAssign, add_assign);
    impl_bin_op!(Sub, sub, SubAssign, sub_assign);
    impl_bin_op!(Mul, mul, MulAssign, mul_assign);
    impl_bin_op!(Div, div, DivAssign, div_assign);

    impl Rem for BigDec {
        type Output = Self;
        fn rem(self, rhs: Self) -> Self::Output {
            BigDec::rem(&self, &rhs, &Context::default())
        }
    }

    impl Neg for BigDec {
        type Output = Self;
        fn neg(self) -> Self::Output {
            BigDec::neg(&self)
        }
    }

    impl Neg for &BigDec {
        type Output = BigDec;
        fn neg(self) -> Self::Output {
            BigDec::neg(self)
        }
    }

    impl Display for BigDec {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
            match self.as_dec() {
                Some(v) => f.write_str(&v.format()),
                None if self.is_nan() => f.write_str("NaN"),
                None if self.is_negative() => f.write_str("-Infinity"),
                None => f.write_str("+Infinity"),
            }
        }
    }

    impl FromStr for BigDec {
        type Err = Error;

        fn from_str(src: &str) -> Result<BigDec, Self::Err> {
            BigDec::parse(src)
        }
    }

    impl Product for BigDec {
        fn product<I: Iterator<Item = BigDec>>(iter: I) -> Self {
            let mut acc = BigDec::one();
            for v in iter {
                acc *= v;
            }
            acc
        }
    }

    impl Sum for BigDec {
        fn sum<I: Iterator<Item = BigDec>>(iter: I) -> Self {
            let mut acc = BigDec::zero();
            for v in iter {
                acc += v;
            }
            acc
        }
    }

    impl<'a> Product<&'a BigDec> for BigDec {
        fn product<I: Iterator<Item = &'a BigDec>>(iter: I) -> Self {
            let mut acc = BigDec::one();
            for v in iter {
                acc *= v;
            }
            acc
        }
    }

    impl<'a> Sum<&'a BigDec> for BigDec {
        fn sum<I: Iterator<Item = &'a BigDec>>(iter: I) -> Self {
            let mut acc = BigDec::zero();
            for v in iter {
                acc += v;
            }
            acc
        }
    }
}
