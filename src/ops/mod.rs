//! High-level operations on the numbers.

use crate::defs::Exponent;
use crate::num::DecNumber;

mod acos;
mod acosh;
mod add;
mod asin;
mod asinh;
mod atan;
mod atanh;
pub mod consts;
mod cos;
mod cosh;
mod exp;
mod factorial;
mod ln;
mod log;
mod newton;
mod pow;
mod prime;
mod series;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;

/// Number of guard digits added to the working precision of the elementary functions.
pub(crate) const GUARD: usize = 6;

/// Number of integer digits of the natural logarithm of the largest number.
pub(crate) const POW_INT_DIGITS: usize = 10;

impl DecNumber {
    /// True if `|x| < 10^-(p+1)`. Then `x^2` is far below the last digit of a `p` digit number,
    /// and functions with `f(x) = x + O(x^3)` round to `x`.
    pub(crate) fn is_first_order(&self, p: usize) -> bool {
        self.magnitude() < -(p as Exponent) - 1
    }
}
