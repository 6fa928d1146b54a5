//! π number

use crate::common::util::pow10;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::DecNumber;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_integer::Roots;

// Each term of the Chudnovsky series adds more than 14 decimal digits.
const DIGITS_PER_TERM: usize = 14;

fn pqr(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let n0 = BigInt::from(6 * b - 5);
        let n1 = BigInt::from(2 * b - 1);
        let n2 = BigInt::from(6 * b - 1);

        let r = n0 * n1 * n2;

        let n1 = BigInt::from(b);
        let q = BigInt::from(10939058860032000u64) * &n1 * &n1 * &n1;

        let n0 = BigInt::from(13591409 + 545140134 * b);
        let mut p = &r * n0;

        if b & 1 != 0 {
            p = -p;
        }

        (p, q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m);
        let (pb, qb, rb) = pqr(m, b);

        let r = &ra * rb;
        let q = &qa * &qb;
        let p = pa * qb + pb * ra;

        (p, q, r)
    }
}

/// Computes π with precision `p` digits.
pub(super) fn calc_pi(p: usize) -> Result<DecNumber, Error> {
    // q*4270934400 / ((p + q*13591409) * sqrt(10005))
    let ctx = Context::new(p, RoundingMode::ToEven)?;
    let wrk = ctx.inc(10);

    let n = (p / DIGITS_PER_TERM) as u64 + 2;
    let (pk, qk, _) = pqr(0, n);

    let q0 = &qk * BigInt::from(4270934400u64);
    let p0 = pk + qk * BigInt::from(13591409u64);

    // sqrt(10005) with k fractional digits as an exact integer square root.
    let k = wrk.precision();
    let s = (BigUint::from(10005u32) * pow10(2 * k)).sqrt();
    let sqrt10005 = DecNumber::from_unsigned(s, -(k as i64), false);

    let f0 = DecNumber::from_bigint(q0);
    let f1 = DecNumber::from_bigint(p0).mul(&sqrt10005, &wrk)?;

    f0.div(&f1, &wrk)?.round(&ctx)
}
