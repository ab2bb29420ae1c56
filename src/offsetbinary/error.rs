//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Represents a storage value, magnitude or conversion result which
/// falls outside the 24-bit range.  There is no clamping anywhere in
/// this crate: an out-of-range result always surfaces as this error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    TooLarge,
    TooSmall,
}

impl Error for RangeError {}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            RangeError::TooLarge => f.write_str("value is too large"),
            RangeError::TooSmall => f.write_str("value is too small"),
        }
    }
}

/// Failure of a checked arithmetic operation.  Division and remainder
/// can fail in two distinguishable ways, so their errors carry the
/// kind rather than collapsing both into one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    Range(RangeError),
    DivisionByZero,
}

impl From<RangeError> for ArithmeticError {
    fn from(e: RangeError) -> ArithmeticError {
        ArithmeticError::Range(e)
    }
}

impl Error for ArithmeticError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArithmeticError::Range(e) => Some(e),
            ArithmeticError::DivisionByZero => None,
        }
    }
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ArithmeticError::Range(e) => Display::fmt(e, f),
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
        }
    }
}
