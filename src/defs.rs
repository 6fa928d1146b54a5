//! Definitions.

use core::fmt::Display;

/// A decimal exponent.
pub type Exponent = i64;

/// Maximum exponent value of a finite number.
pub const EXPONENT_MAX: Exponent = -(i32::MIN as Exponent);

/// Minimum exponent value of a finite number.
pub const EXPONENT_MIN: Exponent = -(i32::MAX as Exponent);

/// Default number of significant decimal digits.
pub const DEFAULT_P: usize = 64;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::FromZero;

/// Precision of the built-in mathematical constants.
pub(crate) const CONST_P: usize = 500;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Neg = -1,
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if the sign is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if the sign is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Exponent value leaves the allowed range.
    /// `Sign::Pos` means the exponent is above the upper bound,
    /// and `Sign::Neg` means it is below the lower bound.
    ExponentOverflow(Sign),

    /// Divizor is zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::ExponentOverflow(s) => {
                if s.is_positive() {
                    "exponent overflow"
                } else {
                    "exponent underflow"
                }
            }
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
        };
        f.write_str(repr)
    }
}

impl std::error::Error for Error {}

/// Rounding modes. All modes round to the nearest value,
/// and differ in the way a tie is broken.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Round half toward positive infinity.
    Up,

    /// Round half toward negative infinity.
    Down,

    /// Round half toward zero.
    ToZero,

    /// Round half away from zero.
    FromZero,

    /// Round half to even.
    ToEven,

    /// Round half to odd.
    ToOdd,
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_defs() {
        assert_eq!(EXPONENT_MAX, 2147483648);
        assert_eq!(EXPONENT_MIN, -2147483647);
        assert_eq!(Sign::Pos.invert(), Sign::Neg);
        assert_eq!(Sign::Neg.to_int(), -1);
        assert_eq!(Error::ExponentOverflow(Sign::Neg).to_string(), "exponent underflow");
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
    }
}
