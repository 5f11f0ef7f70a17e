//! Errors for parsing instruction mnemonics.

use thiserror::Error;

/// Errors that occur when turning text into an [`Opcode`](crate::Opcode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpcodeError {
    /// The text is not one of the six supported mnemonics.
    #[error("unknown instruction '{0}'")]
    Unknown(String),
}
