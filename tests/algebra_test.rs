//! This test suite checks the canonical form, the addition shortcuts, and the algebra of special values.

use exdec::{BigDec, Context, DecNumber, RoundingMode, INF_NEG, INF_POS, NAN};
use num_bigint::BigInt;
use rand::random;

const RMS: [RoundingMode; 6] = [
    RoundingMode::Up,
    RoundingMode::Down,
    RoundingMode::ToZero,
    RoundingMode::FromZero,
    RoundingMode::ToEven,
    RoundingMode::ToOdd,
];

fn random_dec(max_digits: u32, e_rng: i64) -> DecNumber {
    let digits = random::<u32>() % max_digits + 1;
    let mut m = BigInt::from(0);
    for _ in 0..digits {
        m = m * 10 + random::<u8>() % 10;
    }
    if random::<bool>() {
        m = -m;
    }
    let e = random::<i64>() % e_rng;
    DecNumber::from_raw_parts(m, e).unwrap()
}

#[test]
fn canonical_form() {
    for e in -30..=30 {
        for m in [1i64, 10, 100, 120, -5000, 123456789] {
            let d = DecNumber::from_raw_parts(BigInt::from(m), e).unwrap();
            let (m2, e2) = d.to_raw_parts();
            assert_ne!(m2 % 10, BigInt::from(0));

            // canonicalization is idempotent
            let d2 = DecNumber::from_raw_parts(m2.clone(), e2).unwrap();
            assert_eq!(d, d2);

            // and string conversion preserves the value
            let s = BigDec::from(d.clone()).to_string();
            assert_eq!(BigDec::parse(&s).unwrap(), BigDec::from(d));
        }
    }

    let z = DecNumber::from_raw_parts(BigInt::from(0), 1234).unwrap();
    assert_eq!(z.to_raw_parts(), (&BigInt::from(0), 0));
}

#[test]
fn add_shortcuts() {
    for _ in 0..2000 {
        let p = random::<usize>() % 40 + 1;
        let rm = RMS[random::<usize>() % RMS.len()];
        let ctx = Context::new(p, rm).unwrap();

        let d1 = random_dec(60, 100);

        // the second operand is placed around the skip threshold
        let gap = p as i64 + random::<i64>().rem_euclid(5) - 2;
        let d2 = random_dec(60, 3);
        let (m2, e2) = d2.to_raw_parts();
        let d2 = DecNumber::from_raw_parts(m2.clone(), e2 + d1.magnitude() - d2.magnitude() - gap).unwrap();

        let fast = d1.add(&d2, &ctx).unwrap();
        let full = d1.add_full_prec(&d2).round(&ctx).unwrap();
        assert_eq!(fast, full, "{:?} + {:?} at {} {:?}", d1, d2, p, rm);

        let fast = d2.sub(&d1, &ctx).unwrap();
        let full = d2.sub_full_prec(&d1).round(&ctx).unwrap();
        assert_eq!(fast, full);

        // doubling
        let fast = d1.add(&d1, &ctx).unwrap();
        let full = d1.add_full_prec(&d1.clone()).round(&ctx).unwrap();
        assert_eq!(fast, full);
    }
}

#[test]
fn special_value_closure() {
    let ctx = Context::new(20, RoundingMode::ToEven).unwrap();
    let x = BigDec::parse("3.75").unwrap();
    let values = [NAN, INF_POS, INF_NEG, x.clone(), x.neg(), BigDec::zero()];

    for a in values.iter() {
        for b in values.iter() {
            for r in [a.add(b, &ctx), a.sub(b, &ctx), a.mul(b, &ctx), a.div(b, &ctx)] {
                if a.is_nan() || b.is_nan() {
                    assert!(r.is_nan());
                }

                // the result is always one of the three flavors
                assert!(r.is_nan() || r.is_inf() || r.as_dec().is_some());
            }

            // addition and multiplication commute, including specials
            assert_eq!(a.add(b, &ctx), b.add(a, &ctx));
            assert_eq!(a.mul(b, &ctx), b.mul(a, &ctx));
        }
    }

    // finite results of finite operands
    let y = BigDec::parse("-0.5").unwrap();
    assert_eq!(x.add(&y, &ctx), BigDec::parse("3.25").unwrap());
    assert_eq!(x.sub(&y, &ctx), BigDec::parse("4.25").unwrap());
    assert_eq!(x.mul(&y, &ctx), BigDec::parse("-1.875").unwrap());
    assert_eq!(x.div(&y, &ctx), BigDec::parse("-7.5").unwrap());
}

#[test]
fn exponent_range() {
    let ctx = Context::new(20, RoundingMode::ToEven).unwrap();
    let max = BigDec::from(DecNumber::from_raw_parts(BigInt::from(9), exdec::EXPONENT_MAX).unwrap());
    let min = BigDec::from(DecNumber::from_raw_parts(BigInt::from(1), exdec::EXPONENT_MIN).unwrap());

    assert!(DecNumber::from_raw_parts(BigInt::from(1), exdec::EXPONENT_MAX + 1).is_err());
    assert!(DecNumber::from_raw_parts(BigInt::from(1), exdec::EXPONENT_MIN - 1).is_err());

    // overflow gives positive infinity regardless of the sign of the result
    assert_eq!(max.mul(&BigDec::from_u8(10), &ctx), INF_POS);
    assert_eq!(max.neg().mul(&BigDec::from_u8(10), &ctx), INF_POS);

    // underflow gives negative infinity
    assert_eq!(min.div(&BigDec::from_u8(10), &ctx), INF_NEG);

    // 9e2147483648 * 10 / 10 overflows at the intermediate step
    let r = max.mul(&BigDec::from_u8(10), &ctx).div(&BigDec::from_u8(10), &ctx);
    assert_eq!(r, INF_POS);
}

#[test]
fn rounding_modes() {
    let d = |s: &str| BigDec::parse(s).unwrap();
    let cases = [
        ("2.5", ["3", "2", "2", "3", "2", "3"]),
        ("-2.5", ["-2", "-3", "-2", "-3", "-2", "-3"]),
        ("3.5", ["4", "3", "3", "4", "4", "3"]),
        ("2.51", ["3", "3", "3", "3", "3", "3"]),
        ("-2.49", ["-2", "-2", "-2", "-2", "-2", "-2"]),
    ];

    for (s, expected) in cases {
        for (rm, e) in RMS.iter().zip(expected) {
            let ctx = Context::new(1, *rm).unwrap();
            assert_eq!(d(s).round(&ctx), d(e), "{} {:?}", s, rm);
        }
    }
}
