//! Factorial.

use crate::common::util::digits_u64;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Sign;
use crate::num::DecNumber;
use crate::ops::GUARD;
use crate::worker::Controller;
use num_bigint::BigUint;
use num_traits::One;

/// Largest argument with the factorial in the exponent range.
const FACTORIAL_MAX: u64 = 268609168;

/// Largest argument with the factorial fitting in `u128`.
const NATIVE_MAX: u64 = 34;

// Partial product: exact while small, rounded decimal after it outgrows the precision.
enum Part {
    Int(BigUint),
    Dec(DecNumber),
}

impl Part {
    fn into_dec(self) -> DecNumber {
        match self {
            Part::Int(i) => DecNumber::from_biguint(i),
            Part::Dec(d) => d,
        }
    }
}

impl DecNumber {
    /// Computes the factorial of the integer part of `self`. The result is rounded according to the context.
    /// Large arguments are computed in steps driven by `ctl`.
    /// Returns `None` if the computation was stopped.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is negative.
    ///  - ExponentOverflow: the integer part of the argument is greater than 268609168.
    pub fn factorial(&self, ctx: &Context, ctl: &Controller) -> Result<Option<Self>, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        let n = match self.to_u64() {
            Some(n) if n <= FACTORIAL_MAX => n,
            _ => return Err(Error::ExponentOverflow(Sign::Pos)),
        };

        if n <= NATIVE_MAX {
            let f: u128 = (2..=n as u128).product();
            return Self::from_u128(f).round(ctx).map(Some);
        }

        let bits = 64 - n.leading_zeros() as usize;
        let pieces = 1u64 << bits.saturating_sub(3);

        // each rounded multiplication loses a fraction of the last working digit.
        let wrk = ctx.inc(GUARD + digits_u64(pieces));
        let bit_limit = 1 + (std::f64::consts::LOG2_10 * wrk.precision() as f64) as u64;

        let mut stack: Vec<Part> = Vec::with_capacity(bits);
        let title = format!("{}!", n);

        let ret = ctl.run(
            &title,
            |i| {
                let i = i as u64;
                let start = 2 + i * (n - 1) / pieces;
                let end = 2 + (i + 1) * (n - 1) / pieces;
                stack.push(Part::Int(segment_product(start, end)));

                // binary tree of products in segment order
                let mut mask = 1;
                while i & mask == mask {
                    if let Err(e) = combine_top(&mut stack, bit_limit, &wrk) {
                        return Some(Err(e));
                    }
                    mask = (mask << 1) | 1;
                }

                if i + 1 == pieces {
                    Some(match stack.pop() {
                        Some(p) => p.into_dec().round(ctx),
                        None => Err(Error::InvalidArgument),
                    })
                } else {
                    None
                }
            },
            |i| format!("{}/{}", i, pieces),
        );

        ret.transpose()
    }
}

// Product of the integers in [start, end).
fn segment_product(start: u64, end: u64) -> BigUint {
    let mut ret = BigUint::one();
    let mut acc = 1u64;
    for j in start..end {
        match acc.checked_mul(j) {
            Some(v) => acc = v,
            None => {
                ret *= acc;
                acc = j;
            }
        }
    }
    ret * acc
}

// Replaces the two top entries of the stack with their product.
fn combine_top(stack: &mut Vec<Part>, bit_limit: u64, wrk: &Context) -> Result<(), Error> {
    if let (Some(b), Some(a)) = (stack.pop(), stack.pop()) {
        let p = match (a, b) {
            (Part::Int(a), Part::Int(b)) if a.bits() + b.bits() < bit_limit => Part::Int(a * b),
            (a, b) => Part::Dec(a.into_dec().mul(&b.into_dec(), wrk)?),
        };
        stack.push(p);
    }
    Ok(())
}
