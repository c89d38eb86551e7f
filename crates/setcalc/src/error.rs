//! Errors reported for rejected lines.

use crate::commands::Operation;

/// Why a line was rejected. Exactly one reason is reported per line.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Comma before the operation.")]
    CommaBeforeOperation,
    #[error("Comma after the operation.")]
    CommaAfterOperation,
    #[error("Two or more consecutive commas.")]
    ConsecutiveCommas,
    #[error("Comma after the last operand.")]
    TrailingComma,
    #[error("Missing comma.")]
    CommaCountMismatch,
    #[error("Invalid operation.")]
    UnknownOperation,
    #[error("{}", .0.arity_message())]
    WrongOperandCount(Operation),
    #[error("Invalid set name.")]
    InvalidRegisterName,
    #[error("Set members should be integers only.")]
    NonIntegerOperand,
    #[error("Set members should only be integers in the range 0-127.")]
    OperandOutOfRange,
    #[error("A read_set command should be terminated with a -1.")]
    MissingOrMisplacedTerminator,
}

/// Errors from driving a [`Session`](crate::Session).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),
    #[error("The calculator has already stopped.")]
    Terminated,
}
