//! All operations on numbers are performed in some context.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::CONST_P;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;

/// Context contains the precision and the rounding mode of operations.
/// A context is immutable, and can be shared between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Context {
    p: usize,
    rm: RoundingMode,
}

impl Context {
    /// Creates a new context with precision `p` decimal digits and rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn new(p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        Ok(Context { p, rm })
    }

    /// Returns the precision of the context in decimal digits.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the rounding mode of the context.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns a context with the same rounding mode and precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn with_precision(&self, p: usize) -> Result<Self, Error> {
        Self::new(p, self.rm)
    }

    /// Context with `n` more digits of precision and rounding half to even, used for intermediate results.
    pub(crate) fn inc(&self, n: usize) -> Self {
        Context {
            p: self.p + n,
            rm: RoundingMode::ToEven,
        }
    }

    /// Context in which the mathematical constants are computed.
    pub(crate) fn consts() -> Self {
        Context {
            p: CONST_P,
            rm: RoundingMode::ToEven,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context {
            p: DEFAULT_P,
            rm: DEFAULT_RM,
        }
    }
}
