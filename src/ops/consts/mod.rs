//! Mathematical constants.

mod e;
mod ln10;
mod pi;

use crate::common::consts::ONE;
use crate::common::consts::ONE_EIGHTY;
use crate::common::consts::TWO;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::CONST_P;
use crate::num::DecNumber;
use lazy_static::lazy_static;

lazy_static! {
    /// Constants computed once with the precision of 500 digits.
    pub static ref CONSTS: Consts = Consts::new(CONST_P).expect("Constants initialization.");
}

/// Constants cache contains arbitrary-precision mathematical constants.
#[derive(Debug)]
pub struct Consts {
    p: usize,
    pi: DecNumber,
    half_pi: DecNumber,
    tau: DecNumber,
    deg2rad: DecNumber,
    rad2deg: DecNumber,
    e: DecNumber,
    ln10: DecNumber,
    ln10_inv: DecNumber,
}

impl Consts {
    /// Computes all constants with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn new(p: usize) -> Result<Self, Error> {
        let ctx = Context::consts().with_precision(p)?;
        let wrk = ctx.inc(10);
        let pi = pi::calc_pi(wrk.precision())?;
        let ln10 = ln10::calc_ln10(wrk.precision())?;

        Ok(Consts {
            p,
            half_pi: Self::calc_half_pi(&pi, &wrk)?.round(&ctx)?,
            tau: pi.mul(&TWO, &ctx)?,
            deg2rad: Self::calc_deg2rad(&pi, &wrk)?.round(&ctx)?,
            rad2deg: Self::calc_rad2deg(&pi, &wrk)?.round(&ctx)?,
            e: e::calc_e(p)?,
            ln10_inv: ONE.div(&ln10, &wrk)?.round(&ctx)?,
            ln10: ln10.round(&ctx)?,
            pi: pi.round(&ctx)?,
        })
    }

    fn calc_half_pi(pi: &DecNumber, ctx: &Context) -> Result<DecNumber, Error> {
        pi.div(&TWO, ctx)
    }

    fn calc_deg2rad(pi: &DecNumber, ctx: &Context) -> Result<DecNumber, Error> {
        pi.div(&ONE_EIGHTY, ctx)
    }

    fn calc_rad2deg(pi: &DecNumber, ctx: &Context) -> Result<DecNumber, Error> {
        ONE_EIGHTY.div(pi, ctx)
    }

    // Returns the cached value rounded to the context,
    // or computes the value if the context requires more digits than cached.
    fn get(
        &self,
        val: &DecNumber,
        ctx: &Context,
        calc: impl FnOnce(&Context) -> Result<DecNumber, Error>,
    ) -> Result<DecNumber, Error> {
        if ctx.precision() <= self.p {
            val.round(ctx)
        } else {
            let wrk = ctx.inc(10);
            calc(&wrk)?.round(ctx)
        }
    }

    /// Returns the value of the pi number.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    pub fn pi(&self, ctx: &Context) -> Result<DecNumber, Error> {
        self.get(&self.pi, ctx, |wrk| pi::calc_pi(wrk.precision()))
    }

    /// Returns the value of pi/2.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    pub fn half_pi(&self, ctx: &Context) -> Result<DecNumber, Error> {
        self.get(&self.half_pi, ctx, |wrk| {
            Self::calc_half_pi(&pi::calc_pi(wrk.precision())?, wrk)
        })
    }

    /// Returns the value of 2*pi.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    pub fn tau(&self, ctx: &Context) -> Result<DecNumber, Error> {
        self.get(&self.tau, ctx, |wrk| pi::calc_pi(wrk.precision())?.mul(&TWO, wrk))
    }

    /// Returns the number of radians in one degree, pi/180.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    pub fn deg2rad(&self, ctx: &Context) -> Result<DecNumber, Error> {
        self.get(&self.deg2rad, ctx, |wrk| {
            Self::calc_deg2rad(&pi::calc_pi(wrk.precision())?, wrk)
        })
    }

    /// Returns the number of degrees in one radian, 180/pi.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    pub fn rad2deg(&self, ctx: &Context) -> Result<DecNumber, Error> {
        self.get(&self.rad2deg, ctx, |wrk| {
            Self::calc_rad2deg(&pi::calc_pi(wrk.precision())?, wrk)
        })
    }

    /// Returns the value of the Euler number.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    pub fn e(&self, ctx: &Context) -> Result<DecNumber, Error> {
        self.get(&self.e, ctx, |wrk| e::calc_e(wrk.precision()))
    }

    /// Returns the value of the natural logarithm of 10.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    pub fn ln_10(&self, ctx: &Context) -> Result<DecNumber, Error> {
        self.get(&self.ln10, ctx, |wrk| ln10::calc_ln10(wrk.precision()))
    }

    /// Returns the value of 1/ln(10).
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    pub fn ln_10_inv(&self, ctx: &Context) -> Result<DecNumber, Error> {
        self.get(&self.ln10_inv, ctx, |wrk| {
            ONE.div(&ln10::calc_ln10(wrk.precision())?, wrk)
        })
    }
}
