//! Euler's number

use crate::common::consts::ONE;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::DecNumber;
use num_bigint::BigUint;

fn pq(a: u64, b: u64) -> (BigUint, BigUint) {
    if a == b - 1 {
        (BigUint::from(1u32), BigUint::from(b))
    } else {
        let m = (a + b) / 2;

        let (pa, qa) = pq(a, m);
        let (pb, qb) = pq(m, b);

        let q = &qa * &qb;
        let p = pa * qb + pb;

        (p, q)
    }
}

// Number of terms n of the series 1 + 1/1! + 1/2! + ... such that 1/n! < 10^-p.
fn terms(p: usize) -> u64 {
    let mut n = 1u64;
    let mut log10_fct = 0.0;
    while log10_fct < p as f64 {
        n += 1;
        log10_fct += (n as f64).log10();
    }
    n
}

/// Computes e with precision `p` digits.
pub(super) fn calc_e(p: usize) -> Result<DecNumber, Error> {
    // 1 + pk / qk
    let ctx = Context::new(p, RoundingMode::ToEven)?;
    let wrk = ctx.inc(10);

    let (pk, qk) = pq(0, terms(wrk.precision()));

    let f0 = DecNumber::from_biguint(pk).div(&DecNumber::from_biguint(qk), &wrk)?;

    f0.add(&ONE, &wrk)?.round(&ctx)
}
