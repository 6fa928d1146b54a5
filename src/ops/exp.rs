//! Exponent.

use crate::common::consts::EXP_MAX;
use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::util::digits_u64;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::num::DecNumber;
use crate::ops::consts::CONSTS;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;
use crate::ops::GUARD;

// Polynomial coefficient generator: 1/1!, 1/2!, 1/3!, ...
struct ExpPolycoeffGen {
    fct: DecNumber,
    inc: u64,
}

impl ExpPolycoeffGen {
    fn new() -> Self {
        ExpPolycoeffGen {
            fct: ONE.clone(),
            inc: 0,
        }
    }
}

impl PolycoeffGen for ExpPolycoeffGen {
    fn next(&mut self, ctx: &Context) -> Result<&DecNumber, Error> {
        self.inc += 1;
        self.fct = self.fct.div(&DecNumber::from_u64(self.inc), ctx)?;
        Ok(&self.fct)
    }
}

impl DecNumber {
    /// Computes `e` to the power of `self`. The result is rounded according to the context.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the argument is greater than or equal to 999999999.4999.
    pub fn exp(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(ONE.clone());
        }

        // exp(x) = 1 + x + x^2/2 + ..., and x^2 is beyond the last digit of the working precision.
        if self.magnitude() < -((ctx.precision() + GUARD) as Exponent) {
            return ONE.add(self, ctx);
        }

        if self.cmp(&EXP_MAX) >= 0 {
            return Err(Error::ExponentOverflow(Sign::Pos));
        }

        if self.is_negative() {
            if self.cmp(&EXP_MAX.neg()) <= 0 {
                return Ok(Self::new());
            }

            let wrk = ctx.inc(GUARD);
            let r = self.neg().exp(&wrk)?;
            return ONE.div(&r, ctx);
        }

        // x = n + f, -0.5 <= f < 0.5
        let n = self.add_full_prec(&HALF).floor();
        let f = self.sub_full_prec(&n);
        let n = n.to_u64().unwrap_or(0);

        let wrk = ctx.inc(GUARD + digits_u64(n));

        let e_int = if n > 0 {
            CONSTS.e(&wrk)?.powi(n, &wrk)?
        } else {
            ONE.clone()
        };

        let f = f.round(&wrk)?;
        let e_fract = series_run(ONE.clone(), f.clone(), &f, &mut ExpPolycoeffGen::new(), &wrk)?;

        e_int.mul(&e_fract, ctx)
    }
}
