//! Error types for exact arithmetic.

use thiserror::Error;

/// Errors that can occur during construction or arithmetic.
///
/// All three conditions are signaled to the immediate caller; the engine
/// performs no internal recovery or retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The input string is not a valid decimal number for the target type,
    /// including a sign marker on an unsigned magnitude.
    #[error("invalid decimal string")]
    InvalidFormat,

    /// Unsigned subtraction where the minuend is smaller than the
    /// subtrahend.
    #[error("unsigned subtraction would underflow")]
    Underflow,

    /// Division or remainder by a zero magnitude, integer, or rational.
    #[error("division by zero")]
    DivisionByZero,
}
