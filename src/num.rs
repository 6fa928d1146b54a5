//! DecNumber definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::util::digit_count;
use crate::common::util::pow10;
use crate::common::util::round_increment;
use crate::common::util::strip_zeroes;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Signed;
use num_traits::Zero;
use std::cmp::Ordering;

/// Finite decimal number `m * 10^e` with an arbitrary precision integer coefficient `m`.
///
/// The number is always kept in the canonical form: the coefficient has no trailing zeroes,
/// and zero is represented with the zero coefficient and the zero exponent.
/// Two numbers are equal if and only if their coefficients and exponents are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecNumber {
    m: BigInt,
    e: Exponent,
}

impl DecNumber {
    /// Returns a new number with the value of zero.
    pub fn new() -> Self {
        DecNumber {
            m: BigInt::zero(),
            e: 0,
        }
    }

    /// Creates a number in the canonical form from the coefficient `m` and the exponent `e`.
    /// The exponent range is not checked.
    pub(crate) fn from_parts(m: BigInt, e: Exponent) -> Self {
        if m.is_zero() {
            return Self::new();
        }

        let (mag, cnt) = strip_zeroes(m.magnitude());
        let m = if cnt > 0 {
            let ret = BigInt::from(mag);
            if m.is_negative() {
                -ret
            } else {
                ret
            }
        } else {
            m
        };

        DecNumber {
            m,
            e: e + cnt as Exponent,
        }
    }

    /// Creates a number from unsigned magnitude `m`, exponent `e`, and sign `neg`.
    pub(crate) fn from_unsigned(m: BigUint, e: Exponent, neg: bool) -> Self {
        let m = BigInt::from(m);
        Self::from_parts(if neg { -m } else { m }, e)
    }

    /// Constructs a number from the coefficient `m` and the exponent `e`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the canonical form is out of the allowed range.
    pub fn from_raw_parts(m: BigInt, e: Exponent) -> Result<Self, Error> {
        Self::from_parts(m, e).check_exponent()
    }

    /// Decomposes the number into the coefficient and the exponent.
    pub fn to_raw_parts(&self) -> (&BigInt, Exponent) {
        (&self.m, self.e)
    }

    /// Checks that the exponent is in the allowed range.
    pub(crate) fn check_exponent(self) -> Result<Self, Error> {
        if self.m.is_zero() {
            Ok(self)
        } else if self.e > EXPONENT_MAX {
            Err(Error::ExponentOverflow(Sign::Pos))
        } else if self.e < EXPONENT_MIN {
            Err(Error::ExponentOverflow(Sign::Neg))
        } else {
            Ok(self)
        }
    }

    /// Returns the coefficient.
    pub fn mantissa(&self) -> &BigInt {
        &self.m
    }

    /// Returns the exponent.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the sign of the number. Zero is positive.
    pub fn sign(&self) -> Sign {
        if self.m.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if `self` is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.m.is_positive()
    }

    /// Returns true if `self` is less than zero.
    pub fn is_negative(&self) -> bool {
        self.m.is_negative()
    }

    /// Returns true if `self` is an integer.
    pub fn is_int(&self) -> bool {
        self.e >= 0
    }

    /// Returns true if `self` is one.
    pub fn is_one(&self) -> bool {
        self.e == 0 && self.m == BigInt::from(1)
    }

    /// Returns the number of decimal digits in the coefficient.
    pub fn digits(&self) -> usize {
        digit_count(self.m.magnitude())
    }

    /// Returns the decimal exponent of the most significant digit, i.e. `floor(log10(|self|))`.
    /// For zero returns 0.
    pub fn magnitude(&self) -> Exponent {
        self.e + self.digits() as Exponent - 1
    }

    /// Returns the number with the opposite sign.
    pub fn neg(&self) -> Self {
        DecNumber {
            m: -&self.m,
            e: self.e,
        }
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        DecNumber {
            m: self.m.abs(),
            e: self.e,
        }
    }

    /// Multiplies `self` by `10^n` without checking the exponent range.
    pub(crate) fn scale(&self, n: Exponent) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        DecNumber {
            m: self.m.clone(),
            e: self.e + n,
        }
    }

    /// Returns the coefficient of `self` multiplied by `10^(self.e - e)`, where `e <= self.e`.
    fn aligned(&self, e: Exponent) -> BigInt {
        let shift = (self.e - e) as usize;
        if shift == 0 {
            self.m.clone()
        } else {
            &self.m * BigInt::from(pow10(shift))
        }
    }

    /// Compares `self` to `d2`.
    /// Returns positive if `self` is greater than `d2`, negative if `self` is smaller than `d2`, 0 otherwise.
    pub fn cmp(&self, d2: &Self) -> i32 {
        let s1 = self.m.signum();
        let s2 = d2.m.signum();
        if s1 != s2 {
            return if s1 > s2 { 1 } else { -1 };
        }

        if s1.is_zero() {
            return 0;
        }

        let ret = self.abs_cmp(d2);
        if self.is_negative() {
            -ret
        } else {
            ret
        }
    }

    /// Compares absolute values of `self` and `d2`.
    pub fn abs_cmp(&self, d2: &Self) -> i32 {
        match (self.is_zero(), d2.is_zero()) {
            (true, true) => return 0,
            (true, false) => return -1,
            (false, true) => return 1,
            (false, false) => {}
        }

        let mg1 = self.magnitude();
        let mg2 = d2.magnitude();
        if mg1 != mg2 {
            return if mg1 > mg2 { 1 } else { -1 };
        }

        // the same magnitude: the exponent difference is bounded by the number of digits.
        let e = self.e.min(d2.e);
        let m1 = self.aligned(e);
        let m2 = d2.aligned(e);
        match m1.magnitude().cmp(m2.magnitude()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Rounds the coefficient of `self` to `ctx.precision()` digits without checking the exponent range.
    pub(crate) fn round_unchecked(&self, ctx: &Context) -> Self {
        let p = ctx.precision();
        let d = self.digits();
        if d <= p {
            return self.clone();
        }

        let k = d - p;
        let neg = self.m.is_negative();
        let div = pow10(k);
        let half = &div >> 1usize;
        let (mut q, r) = self.m.magnitude().div_rem(&div);
        if round_increment(&q, &r, &half, neg, ctx.rounding_mode()) {
            q += 1u32;
        }

        Self::from_unsigned(q, self.e + k as Exponent, neg)
    }

    /// Rounds `self` to the precision of the context using the rounding mode of the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of the allowed range.
    pub fn round(&self, ctx: &Context) -> Result<Self, Error> {
        self.round_unchecked(ctx).check_exponent()
    }

    /// Multiplies `self` by `d2` without rounding, and without checking the exponent range.
    pub(crate) fn mul_full_prec(&self, d2: &Self) -> Self {
        if self.is_zero() || d2.is_zero() {
            return Self::new();
        }

        // product of two canonical coefficients can have trailing zeroes, e.g. 2*5.
        Self::from_parts(&self.m * &d2.m, self.e + d2.e)
    }

    /// Multiplies `self` by `d2` and rounds the result according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of the allowed range.
    pub fn mul(&self, d2: &Self, ctx: &Context) -> Result<Self, Error> {
        self.mul_full_prec(d2).round(ctx)
    }

    /// Divides `self` by `d2` and rounds the result according to the context.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - ExponentOverflow: the exponent of the result is out of the allowed range.
    pub fn div(&self, d2: &Self, ctx: &Context) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.is_zero() {
            return Ok(Self::new());
        }

        // the quotient has at least p + 1 digits, the rest goes into a sticky digit.
        let k = (ctx.precision() + 1 + d2.digits()).saturating_sub(self.digits());
        let a = self.m.magnitude() * pow10(k);
        let (mut q, r) = a.div_rem(d2.m.magnitude());
        let mut e = self.e - d2.e - k as Exponent;

        if !r.is_zero() {
            q = q * 10u32 + 1u32;
            e -= 1;
        }

        let neg = self.m.is_negative() != d2.m.is_negative();

        Self::from_unsigned(q, e, neg).round(ctx)
    }

    /// Returns the reciprocal of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    ///  - ExponentOverflow: the exponent of the result is out of the allowed range.
    pub fn recip(&self, ctx: &Context) -> Result<Self, Error> {
        Self::from_u64(1).div(self, ctx)
    }

    /// Computes the remainder of the truncated division of `self` by `d2`.
    /// The sign of the result follows the sign of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - InvalidArgument: the integer quotient has more digits than the precision of the context.
    ///  - ExponentOverflow: the exponent of the result is out of the allowed range.
    pub fn rem(&self, d2: &Self, ctx: &Context) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.abs_cmp(d2) < 0 {
            return self.round(ctx);
        }

        // |self| >= |d2|, the integer quotient has at least magnitude difference + 1 digits.
        if self.magnitude() - d2.magnitude() >= ctx.precision() as Exponent {
            return Err(Error::InvalidArgument);
        }

        let e = self.e.min(d2.e);
        let a = self.aligned(e);
        let b = d2.aligned(e);

        let q = &a / &b;
        if digit_count(q.magnitude()) > ctx.precision() {
            return Err(Error::InvalidArgument);
        }

        // remainder of truncated division keeps the sign of the dividend.
        let r = a - q * b;

        Self::from_parts(r, e).round(ctx)
    }

    /// Returns the integer part of `self` (truncation toward zero).
    pub fn int(&self) -> Self {
        if self.e >= 0 {
            return self.clone();
        }

        let shift = (-self.e) as usize;
        if shift >= self.digits() {
            return Self::new();
        }

        let q = self.m.magnitude() / pow10(shift);

        Self::from_unsigned(q, 0, self.is_negative())
    }

    /// Returns the fractional part of `self`.
    pub fn fract(&self) -> Self {
        if self.e >= 0 {
            return Self::new();
        }

        let shift = (-self.e) as usize;
        if shift >= self.digits() {
            return self.clone();
        }

        let r = self.m.magnitude() % pow10(shift);

        Self::from_unsigned(r, self.e, self.is_negative())
    }

    /// Returns the largest integer less than or equal to `self`.
    pub fn floor(&self) -> Self {
        let int = self.int();
        if self.is_negative() && !self.fract().is_zero() {
            int.sub_one()
        } else {
            int
        }
    }

    fn sub_one(&self) -> Self {
        let e = self.e.min(0);
        Self::from_parts(self.aligned(e) - BigInt::from(pow10((-e) as usize)), e)
    }

    /// Returns the integer part of `self` as an arbitrary precision integer.
    pub fn to_bigint(&self) -> BigInt {
        let int = self.int();
        int.aligned(0)
    }

    /// Returns `true` if `self` is an odd integer.
    pub fn is_odd_int(&self) -> bool {
        // canonical odd integers have zero exponent
        self.e == 0 && self.m.is_odd()
    }
}

impl Default for DecNumber {
    fn default() -> Self {
        Self::new()
    }
}
