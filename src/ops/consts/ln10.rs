//! ln(10)

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::DecNumber;
use num_bigint::BigUint;

// ln(10) = 2*atanh(9/11), the terms decrease by the factor of (9/11)^2.
const DIGITS_PER_TERM: f64 = 0.174;

fn pqr(a: u64, b: u64) -> (BigUint, BigUint, BigUint) {
    if a == b - 1 {
        let p = BigUint::from(81u32);
        let q = BigUint::from((2 * b + 1) * 121);
        let r = BigUint::from((2 * b + 1) * 81);

        (p, q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m);
        let (pb, qb, rb) = pqr(m, b);

        let p = pa * &qb + pb * &ra;
        let q = qa * qb;
        let r = ra * rb;

        (p, q, r)
    }
}

/// Computes ln(10) with precision `p` digits.
pub(super) fn calc_ln10(p: usize) -> Result<DecNumber, Error> {
    // 18 * (1 + p / q) / 11
    let ctx = Context::new(p, RoundingMode::ToEven)?;
    let wrk = ctx.inc(10);

    let n = (wrk.precision() as f64 / DIGITS_PER_TERM) as u64 + 2;
    let (pk, qk, _) = pqr(0, n);

    let mut val = DecNumber::from_biguint(pk).div(&DecNumber::from_biguint(qk), &wrk)?;
    val = val.add(&ONE, &wrk)?;
    val = val.mul(&DecNumber::from_u8(18), &wrk)?;
    val.div(&DecNumber::from_u8(11), &wrk)?.round(&ctx)
}
