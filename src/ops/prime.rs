//! Trial division primality test and the 3n+1 walk.

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::DecNumber;
use crate::worker::Controller;
use num_bigint::BigUint;
use num_integer::Roots;
use num_traits::ToPrimitive;
use num_traits::Zero;
use std::cell::Cell;

/// Numbers below this value are tested without the controller.
const DIRECT_LIMIT: u64 = 1 << 50;

/// Number of odd candidates tested in one controller step.
const CANDIDATES_PER_STEP: u64 = 200_000;

impl DecNumber {
    /// Tests the integer part of `self` for primality by trial division.
    /// Returns 1 for a prime number, 0 for 0 and 1, and the smallest prime factor otherwise.
    /// Large numbers are tested in steps driven by `ctl`.
    /// Returns `None` if the computation was stopped.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is zero or negative.
    pub fn is_prime(&self, ctx: &Context, ctl: &Controller) -> Result<Option<Self>, Error> {
        if self.is_zero() || self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        // a positive exponent means a multiple of 10
        if self.exponent() > 0 {
            return Ok(Some(Self::from_u8(2)));
        }

        let n = self.to_biguint_abs();

        let factor = match n.to_u64() {
            Some(0) | Some(1) => Some(0),
            Some(2) => Some(1),
            Some(v) if v % 2 == 0 => Some(2),
            Some(v) if v < DIRECT_LIMIT => Some(smallest_factor(v.sqrt(), 3, u64::MAX, |d| v % d == 0)),
            Some(v) => trial_division(ctl, v.sqrt(), |d| v % d == 0),
            None if !(&n % 2u32).is_zero() => {
                let limit = n.sqrt().to_u64().unwrap_or(u64::MAX);
                trial_division(ctl, limit, |d| (&n % d).is_zero())
            }
            None => Some(2),
        };

        factor.map(|f| Self::from_u64(f).round(ctx)).transpose()
    }

    /// Applies `n -> n/2` for even and `n -> 3n+1` for odd values to the integer part of `self`
    /// at least once, and until the value is a power of two. Returns the power of two.
    /// Each step is driven by `ctl`. Returns `None` if the computation was stopped.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the integer part of the argument is zero or negative.
    pub fn collatz(&self, ctl: &Controller) -> Result<Option<Self>, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        let mut n = self.to_biguint_abs();
        if n.is_zero() {
            return Err(Error::InvalidArgument);
        }

        let bits = Cell::new(n.bits());

        let ret = ctl.run(
            "3n+1",
            |_| {
                if n.bit(0) {
                    n = &n * 3u32 + 1u32;
                } else {
                    n >>= 1;
                }
                bits.set(n.bits());

                if n.count_ones() == 1 {
                    Some(Self::from_biguint(n.clone()))
                } else {
                    None
                }
            },
            |i| format!("Remaining: {} bits (#{})", bits.get(), i),
        );

        Ok(ret)
    }
}

// Runs the trial division in controller steps.
fn trial_division<F: Fn(u64) -> bool>(ctl: &Controller, limit: u64, divides: F) -> Option<u64> {
    let step = 2 * CANDIDATES_PER_STEP;
    ctl.run(
        "prime",
        |i| {
            let from = (i as u64).saturating_mul(step).saturating_add(3);
            if from > limit {
                return Some(1);
            }
            let to = from.saturating_add(step - 2);
            match smallest_factor(limit, from, to, &divides) {
                1 => None,
                d => Some(d),
            }
        },
        |i| {
            let done = (i as u64).saturating_mul(step).saturating_add(3);
            format!("{} of {} divisors tested", done.min(limit) / 2, limit / 2)
        },
    )
}

// Smallest odd divisor in [from, min(to, limit)], or 1 if there is none.
fn smallest_factor<F: Fn(u64) -> bool>(limit: u64, from: u64, to: u64, divides: F) -> u64 {
    let to = to.min(limit);
    let mut d = from;
    while d <= to {
        if divides(d) {
            return d;
        }
        match d.checked_add(2) {
            Some(v) => d = v,
            None => break,
        }
    }
    1
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use crate::worker::Decision;
    use crate::worker::Event;
    use crate::worker::LoopConfig;
    use num_bigint::BigInt;
    use std::time::Duration;

    fn prime(d: &DecNumber) -> DecNumber {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();
        d.is_prime(&ctx, &Controller::unattended()).unwrap().unwrap()
    }

    #[test]
    fn test_is_prime() {
        for (n, expected) in [(1u64, 0u64), (2, 1), (3, 1), (4, 2), (9, 3), (91, 7), (97, 1), (100, 2), (7919, 1)] {
            assert_eq!(prime(&DecNumber::from_u64(n)), DecNumber::from_u64(expected), "{}", n);
        }

        assert_eq!(prime(&DecNumber::from_parts(BigInt::from(5), -1)), DecNumber::new());
        assert_eq!(prime(&DecNumber::from_parts(BigInt::from(975), -1)), DecNumber::from_u8(1));
        assert_eq!(prime(&DecNumber::from_parts(BigInt::from(3), 40)), DecNumber::from_u8(2));

        // stepped u64 path
        assert_eq!(prime(&DecNumber::from_u64(17592238820981133269)), DecNumber::from_u32(1000003));

        // stepped big integer path
        let n = BigInt::parse_bytes(b"1152924963371360829541027", 10).unwrap();
        assert_eq!(prime(&DecNumber::from_parts(n, 0)), DecNumber::from_u32(1000003));

        let ctx = Context::default();
        let ctl = Controller::unattended();
        assert_eq!(DecNumber::new().is_prime(&ctx, &ctl), Err(Error::InvalidArgument));
        assert_eq!(DecNumber::from_i8(-7).is_prime(&ctx, &ctl), Err(Error::InvalidArgument));
    }

    #[test]
    fn test_is_prime_stop() {
        let config = LoopConfig {
            ask_timeout: Duration::from_millis(1),
            ..Default::default()
        };
        let (ctl, front) = Controller::new(config);

        // 2^61 - 1 is prime and takes thousands of steps
        let h = ctl
            .spawn("prime", |ctl| {
                let ctx = Context::default();
                DecNumber::from_u64((1 << 61) - 1).is_prime(&ctx, ctl)
            })
            .unwrap();

        for ev in front.events().iter() {
            match ev {
                Event::Ask { .. } => front.decide(Decision::Stop),
                Event::Done(_) => break,
                Event::Progress(_) => {}
            }
        }

        assert_eq!(h.join().unwrap(), Ok(None));
    }

    #[test]
    fn test_collatz() {
        let ctl = Controller::unattended();

        for (n, expected) in [(1u64, 4u64), (2, 1), (3, 16), (7, 16), (27, 16)] {
            assert_eq!(
                DecNumber::from_u64(n).collatz(&ctl).unwrap().unwrap(),
                DecNumber::from_u64(expected)
            );
        }

        let n = DecNumber::from_biguint((BigUint::from(1u32) << 100u32) + 1u32);
        assert_eq!(n.collatz(&ctl).unwrap().unwrap(), DecNumber::from_u8(16));

        assert_eq!(DecNumber::from_parts(BigInt::from(5), -1).collatz(&ctl), Err(Error::InvalidArgument));
        assert_eq!(DecNumber::from_i8(-3).collatz(&ctl), Err(Error::InvalidArgument));
    }
}
