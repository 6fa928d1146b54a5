//! Power series computation appliance.

use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::num::DecNumber;

/// Generator of polynomial coefficients.
pub trait PolycoeffGen {
    /// Returns the next polynomial coefficient value.
    fn next(&mut self, ctx: &Context) -> Result<&DecNumber, Error>;
}

/// Sums the series `acc + c1*x_first + c2*x_first*x_step + c3*x_first*x_step^2 + ...`
/// until the next term can not change the accumulated value at the precision of the context.
/// The coefficients `c1, c2, ...` are produced by `polycoeff_gen`.
pub fn series_run<T: PolycoeffGen>(
    mut acc: DecNumber,
    x_first: DecNumber,
    x_step: &DecNumber,
    polycoeff_gen: &mut T,
    ctx: &Context,
) -> Result<DecNumber, Error> {
    let mut x_pow = x_first;
    let mut niter = 0usize;
    loop {
        let coeff = polycoeff_gen.next(ctx)?;
        // powers may leave the exponent range before they become negligible.
        let part = x_pow.mul_full_prec(coeff).round_unchecked(ctx);
        if part.is_zero()
            || (!acc.is_zero() && part.magnitude() < acc.magnitude() - ctx.precision() as Exponent - 1)
        {
            break;
        }
        acc = acc.add(&part, ctx)?;
        x_pow = x_pow.mul_full_prec(x_step).round_unchecked(ctx);
        niter += 1;
    }

    tracing::debug!(iterations = niter, p = ctx.precision(), "series");

    Ok(acc)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;

    // 1, 1/2, 1/3, ...
    struct HarmonicPolycoeffGen {
        k: u64,
        val: DecNumber,
    }

    impl PolycoeffGen for HarmonicPolycoeffGen {
        fn next(&mut self, ctx: &Context) -> Result<&DecNumber, Error> {
            self.k += 1;
            self.val = DecNumber::from_u8(1).div(&DecNumber::from_u64(self.k), ctx)?;
            Ok(&self.val)
        }
    }

    #[test]
    fn test_series() {
        let ctx = Context::new(30, RoundingMode::ToEven).unwrap();
        let wrk = ctx.inc(5);

        // -ln(1 - x) = x + x^2/2 + x^3/3 + ..., x = 0.1
        let x = DecNumber::from_raw_parts(1.into(), -1).unwrap();
        let mut coeffs = HarmonicPolycoeffGen {
            k: 0,
            val: DecNumber::new(),
        };
        let r = series_run(DecNumber::new(), x.clone(), &x, &mut coeffs, &wrk).unwrap();
        let r = r.round(&ctx).unwrap();
        assert_eq!(r.to_raw_parts().0.to_string(), "105360515657826301227500980839");

        // the first term is already negligible
        let one = DecNumber::from_u8(1);
        let tiny = DecNumber::from_raw_parts(1.into(), -100).unwrap();
        let mut coeffs = HarmonicPolycoeffGen {
            k: 0,
            val: DecNumber::new(),
        };
        let r = series_run(one.clone(), tiny.clone(), &tiny, &mut coeffs, &ctx).unwrap();
        assert_eq!(r, one);
        assert_eq!(coeffs.k, 1);
    }
}
