//! Exdec (extended decimal) is a library of arbitrary precision decimal numbers for calculators.
//!
//! Numbers are kept as an arbitrary precision integer coefficient and a decimal exponent.
//! Each operation rounds its result to the precision and with the rounding mode of a [`Context`].
//! [`BigDec`] extends finite numbers with `NaN` and signed infinities, so that arithmetic never fails.
//!
//! Elementary functions take and return angles in degrees. Factorial, primality test, and the 3n+1 walk
//! can take unbounded time: they run in steps driven by a [`Controller`], which reports progress
//! to a front end and can be stopped by it.
//!
//! ## Examples
//!
//! ```
//! use exdec::{BigDec, Context, RoundingMode};
//!
//! let ctx = Context::new(50, RoundingMode::ToEven).unwrap();
//!
//! let two = BigDec::from_u8(2);
//! let s = two.sqrt(&ctx);
//! assert!(s.to_string().starts_with("1.4142135623730950488"));
//!
//! // Division by zero and domain errors give special values.
//! assert!(BigDec::one().div(&BigDec::zero(), &ctx).is_inf_pos());
//! assert!(two.neg().ln(&ctx).is_nan());
//! ```
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod conv;
pub mod ctx;
mod defs;
mod ext;
mod func;
mod num;
mod ops;
mod parser;
mod strop;
pub mod worker;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;

pub use crate::ctx::Context;
pub use crate::num::DecNumber;

pub use crate::ext::BigDec;
pub use crate::ext::INF_NEG;
pub use crate::ext::INF_POS;
pub use crate::ext::NAN;

pub use crate::func::Function;
pub use crate::func::Operator;

pub use crate::ops::consts::Consts;

pub use crate::worker::Controller;
pub use crate::worker::Decision;
pub use crate::worker::Event;
pub use crate::worker::Frontend;
pub use crate::worker::Interaction;
pub use crate::worker::LoopConfig;

pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;

#[cfg(test)]
mod tests {

    #[test]
    fn test_bigdec() {
        use crate::BigDec;
        use crate::Context;
        use crate::RoundingMode;

        let ctx = Context::new(40, RoundingMode::ToEven).unwrap();

        // angles are in degrees
        let half = BigDec::parse("0.5").unwrap();
        assert_eq!(half.asin(&ctx), BigDec::from_u8(30));

        // 4*atan(1) converted to radians
        let cc = crate::Consts::new(40).unwrap();
        let pi = BigDec::from(cc.pi(&ctx).unwrap());
        let deg = BigDec::one().atan(&ctx);
        let rad = deg.mul(&pi, &ctx).div(&BigDec::from_u8(180), &ctx);
        let pi2 = rad.mul(&BigDec::from_u8(4), &ctx);
        let diff = pi2.sub(&pi, &ctx).abs();
        assert!(diff < BigDec::parse("1e-38").unwrap());
        assert!(pi.to_string().starts_with("3.141592653589793238462643383279502884197"));
    }
}
