//! Static constants.

use crate::num::DecNumber;
use lazy_static::lazy_static;
use num_bigint::BigInt;

lazy_static! {
    pub static ref ONE: DecNumber = DecNumber::from_u8(1);
    pub static ref TWO: DecNumber = DecNumber::from_u8(2);
    pub static ref NINETY: DecNumber = DecNumber::from_u16(90);
    pub static ref ONE_EIGHTY: DecNumber = DecNumber::from_u16(180);
    pub static ref THREE_SIXTY: DecNumber = DecNumber::from_u16(360);
    pub static ref HALF: DecNumber = DecNumber::from_parts(BigInt::from(5), -1);
    pub static ref QUARTER: DecNumber = DecNumber::from_parts(BigInt::from(25), -2);
    pub static ref NINE_TENTHS: DecNumber = DecNumber::from_parts(BigInt::from(9), -1);
    pub static ref THREE_HALVES: DecNumber = DecNumber::from_parts(BigInt::from(15), -1);

    /// Hyperbolic arctangent of arguments above this value is seeded from `ln((1 - x)/2)`.
    pub static ref ATANH_THRESHOLD: DecNumber = DecNumber::from_parts(BigInt::from(999), -3);

    /// Exponent of arguments greater than or equal to this value is infinite,
    /// and exponent of arguments less than or equal to its negation is zero.
    pub static ref EXP_MAX: DecNumber = DecNumber::from_parts(BigInt::from(9999999994999i64), -4);
}
