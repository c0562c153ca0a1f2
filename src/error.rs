/// Errors surfaced by the fallible `BigInt` operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The decimal literal was empty, a bare sign, or contained a non-digit.
    #[error("invalid decimal integer literal: {0:?}")]
    InvalidFormat(String),
    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Shift amounts must be non-negative.
    #[error("invalid shift amount: {0}")]
    InvalidShiftAmount(i32),
}
