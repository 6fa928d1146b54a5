//! Calculator operators and functions.

use crate::ctx::Context;
use crate::defs::Error;
use crate::ext::BigDec;
use crate::worker::Controller;
use core::fmt::Display;
use core::fmt::Formatter;
use std::str::FromStr;

/// Binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,

    /// Remainder of the truncated division.
    Rem,

    /// `x` to the power of `y`.
    Pow,

    /// Root of degree `y` of `x`.
    Root,
}

/// Unary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Sin,
    Asin,
    Sinh,
    Asinh,
    Cos,
    Acos,
    Cosh,
    Acosh,
    Tan,
    Atan,
    Tanh,
    Atanh,
    Collatz,
    Prime,
    Log10,
    Exp,
    Ln,
    Factorial,
    Recip,

    /// Random number in the range [0, 1). The argument is ignored.
    #[cfg(feature = "random")]
    Rand,
}

impl Operator {
    /// All operators.
    pub const ALL: [Operator; 7] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
        Operator::Pow,
        Operator::Root,
    ];

    /// Returns the symbol of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Pow => "^",
            Operator::Root => "^1/",
        }
    }

    /// Applies the operator to `a` and `b`.
    pub fn apply(&self, a: &BigDec, b: &BigDec, ctx: &Context) -> BigDec {
        match self {
            Operator::Add => a.add(b, ctx),
            Operator::Sub => a.sub(b, ctx),
            Operator::Mul => a.mul(b, ctx),
            Operator::Div => a.div(b, ctx),
            Operator::Rem => a.rem(b, ctx),
            Operator::Pow => a.pow(b, ctx),
            Operator::Root => a.root(b, ctx),
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    /// Parses an operator symbol.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: unknown symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::Div,
            "%" => Operator::Rem,
            "^" | "x^y" => Operator::Pow,
            "^1/" | "y√x" => Operator::Root,
            _ => return Err(Error::InvalidArgument),
        })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Function {
    /// All functions.
    pub fn all() -> Vec<Function> {
        #[allow(unused_mut)]
        let mut ret = vec![
            Function::Sqrt,
            Function::Sin,
            Function::Asin,
            Function::Sinh,
            Function::Asinh,
            Function::Cos,
            Function::Acos,
            Function::Cosh,
            Function::Acosh,
            Function::Tan,
            Function::Atan,
            Function::Tanh,
            Function::Atanh,
            Function::Collatz,
            Function::Prime,
            Function::Log10,
            Function::Exp,
            Function::Ln,
            Function::Factorial,
            Function::Recip,
        ];

        #[cfg(feature = "random")]
        ret.push(Function::Rand);

        ret
    }

    /// Returns the symbol of the function.
    pub fn symbol(&self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Sin => "sin",
            Function::Asin => "asin",
            Function::Sinh => "sinh",
            Function::Asinh => "asinh",
            Function::Cos => "cos",
            Function::Acos => "acos",
            Function::Cosh => "cosh",
            Function::Acosh => "acosh",
            Function::Tan => "tan",
            Function::Atan => "atan",
            Function::Tanh => "tanh",
            Function::Atanh => "atanh",
            Function::Collatz => "3n+1",
            Function::Prime => "prime",
            Function::Log10 => "log10",
            Function::Exp => "exp",
            Function::Ln => "ln",
            Function::Factorial => "n!",
            Function::Recip => "1/x",
            #[cfg(feature = "random")]
            Function::Rand => "rand",
        }
    }

    /// Returns true if the function runs through the controller and can be stopped.
    pub fn is_long(&self) -> bool {
        matches!(self, Function::Collatz | Function::Prime | Function::Factorial)
    }

    /// Applies the function to `x`. Long computations are driven by `ctl`.
    pub fn apply(&self, x: &BigDec, ctx: &Context, ctl: &Controller) -> BigDec {
        match self {
            Function::Sqrt => x.sqrt(ctx),
            Function::Sin => x.sin(ctx),
            Function::Asin => x.asin(ctx),
            Function::Sinh => x.sinh(ctx),
            Function::Asinh => x.asinh(ctx),
            Function::Cos => x.cos(ctx),
            Function::Acos => x.acos(ctx),
            Function::Cosh => x.cosh(ctx),
            Function::Acosh => x.acosh(ctx),
            Function::Tan => x.tan(ctx),
            Function::Atan => x.atan(ctx),
            Function::Tanh => x.tanh(ctx),
            Function::Atanh => x.atanh(ctx),
            Function::Collatz => x.collatz(ctl),
            Function::Prime => x.is_prime(ctx, ctl),
            Function::Log10 => x.log10(ctx),
            Function::Exp => x.exp(ctx),
            Function::Ln => x.ln(ctx),
            Function::Factorial => x.factorial(ctx, ctl),
            Function::Recip => x.recip(ctx),
            #[cfg(feature = "random")]
            Function::Rand => BigDec::random(ctx),
        }
    }
}

impl FromStr for Function {
    type Err = Error;

    /// Parses a function symbol.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: unknown symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::all()
            .into_iter()
            .find(|f| f.symbol() == s)
            .ok_or(Error::InvalidArgument)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}
