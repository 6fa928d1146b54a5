//! Auxiliary functions.

use crate::defs::RoundingMode;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use num_traits::Pow;
use num_traits::Zero;
use std::cmp::Ordering;

/// log10(2)
pub const LOG10_2: f64 = std::f64::consts::LOG10_2;

// powers of ten below this one are kept precomputed.
const POW10_CACHED: usize = 128;

lazy_static! {
    static ref POW10: Vec<BigUint> = {
        let mut v = Vec::with_capacity(POW10_CACHED);
        let mut n = BigUint::one();
        for _ in 0..POW10_CACHED {
            v.push(n.clone());
            n *= 10u32;
        }
        v
    };
}

/// Returns 10 to the power of `k`.
pub fn pow10(k: usize) -> BigUint {
    if k < POW10_CACHED {
        POW10[k].clone()
    } else {
        Pow::pow(BigUint::from(10u32), k)
    }
}

/// Number of decimal digits in `n`. Zero has one digit.
pub fn digit_count(n: &BigUint) -> usize {
    let bits = n.bits();
    if bits <= 1 {
        return 1;
    }

    // lower estimate of floor(log10(n)) + 1, corrected upward.
    let mut d = ((bits - 1) as f64 * LOG10_2) as usize;
    d = d.saturating_sub(1).max(1);
    while *n >= pow10(d) {
        d += 1;
    }
    d
}

/// Removes trailing decimal zeroes of `n`, and returns the number of zeroes removed.
pub fn strip_zeroes(n: &BigUint) -> (BigUint, usize) {
    if n.is_zero() {
        return (BigUint::zero(), 0);
    }

    let mut cnt = 0;
    let mut m = n.clone();

    // strip in large chunks first.
    let mut step = 16;
    while step > 0 {
        let div = pow10(step);
        loop {
            let (q, r) = m.div_rem(&div);
            if r.is_zero() {
                m = q;
                cnt += step;
            } else {
                break;
            }
        }
        step >>= 2;
    }

    (m, cnt)
}

/// Decides whether the truncated value `q` must be incremented in absolute value,
/// given the discarded part `rem` and the half of the unit of the discarded part `half`.
/// `neg` is true for negative numbers.
pub fn round_increment(q: &BigUint, rem: &BigUint, half: &BigUint, neg: bool, rm: RoundingMode) -> bool {
    match rem.cmp(half) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => match rm {
            RoundingMode::Up => !neg,
            RoundingMode::Down => neg,
            RoundingMode::ToZero => false,
            RoundingMode::FromZero => true,
            RoundingMode::ToEven => q.is_odd(),
            RoundingMode::ToOdd => q.is_even(),
        },
    }
}

/// integer logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// Number of decimal digits in `n`.
pub fn digits_u64(mut n: u64) -> usize {
    let mut ret = 1;
    while n >= 10 {
        n /= 10;
        ret += 1;
    }
    ret
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(&BigUint::zero()), 1);
        assert_eq!(digit_count(&BigUint::from(9u32)), 1);
        assert_eq!(digit_count(&BigUint::from(10u32)), 2);
        assert_eq!(digit_count(&BigUint::from(99u32)), 2);
        assert_eq!(digit_count(&BigUint::from(u64::MAX)), 20);
        for k in [1, 17, 100, 127, 128, 129, 500, 1000] {
            let n = pow10(k);
            assert_eq!(digit_count(&n), k + 1);
            assert_eq!(digit_count(&(n - 1u32)), k);
        }
        assert_eq!(digits_u64(0), 1);
        assert_eq!(digits_u64(999_999_999), 9);
        assert_eq!(digits_u64(u64::MAX), 20);
    }

    #[test]
    fn test_strip_zeroes() {
        let (m, n) = strip_zeroes(&BigUint::from(1200u32));
        assert_eq!(m, BigUint::from(12u32));
        assert_eq!(n, 2);

        let (m, n) = strip_zeroes(&(pow10(253) * 7u32));
        assert_eq!(m, BigUint::from(7u32));
        assert_eq!(n, 253);

        let (m, n) = strip_zeroes(&BigUint::from(7u32));
        assert_eq!(m, BigUint::from(7u32));
        assert_eq!(n, 0);
    }

    #[test]
    fn test_round_increment() {
        let half = BigUint::from(5u32);
        let q_even = BigUint::from(2u32);
        let q_odd = BigUint::from(3u32);
        assert!(!round_increment(&q_even, &BigUint::from(4u32), &half, false, RoundingMode::FromZero));
        assert!(round_increment(&q_even, &BigUint::from(6u32), &half, false, RoundingMode::ToZero));
        assert!(round_increment(&q_even, &half, &half, false, RoundingMode::FromZero));
        assert!(!round_increment(&q_even, &half, &half, false, RoundingMode::ToZero));
        assert!(!round_increment(&q_even, &half, &half, false, RoundingMode::ToEven));
        assert!(round_increment(&q_odd, &half, &half, false, RoundingMode::ToEven));
        assert!(round_increment(&q_even, &half, &half, false, RoundingMode::ToOdd));
        assert!(round_increment(&q_even, &half, &half, false, RoundingMode::Up));
        assert!(!round_increment(&q_even, &half, &half, true, RoundingMode::Up));
        assert!(round_increment(&q_even, &half, &half, true, RoundingMode::Down));
        assert_eq!(log2_ceil(1), 0);
        assert_eq!(log2_ceil(8), 3);
        assert_eq!(log2_ceil(9), 4);
    }
}
