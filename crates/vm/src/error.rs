//! Runtime errors for the simulator engine.
//!
//! Every engine operation reports failure through [`RuntimeError`]. None of
//! them are fatal: the parser forwards the rendered message and carries on.

use compsim_common::Opcode;
use thiserror::Error;

/// Errors returned by [`CellStore`](crate::CellStore) and
/// [`Computer`](crate::Computer) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A write targeted an index past the end of the store.
    #[error("address {index} is out of bounds (store length {len})")]
    AddressOutOfBounds { index: usize, len: usize },

    /// `set_address` was given an address outside `[0, size)`.
    #[error("program counter {address} is out of bounds (size {size})")]
    ProgramCounterOutOfBounds { address: i64, size: usize },

    /// `CALL` or `PUSH` was inserted without an argument.
    #[error("{opcode} requires an argument")]
    MissingArgument { opcode: Opcode },

    /// `insert` was given a mnemonic outside the instruction set.
    #[error("invalid instruction '{mnemonic}'")]
    InvalidInstruction { mnemonic: String },

    /// The run loop reached a bare value cell instead of an instruction.
    #[error("invalid instruction at address {at}")]
    NotAnInstruction { at: usize },

    /// `execute` started on an empty cell.
    #[error("no instruction at address {at}")]
    NoInstructionAtAddress { at: usize },

    /// `MULT` could not pop two bare values.
    #[error("MULT needs two pushed values at address {at}")]
    InvalidMultiplicationOperands { at: usize },

    /// A `CALL` cell had no target address.
    #[error("CALL without an address at address {at}")]
    MissingCallArgument { at: usize },

    /// A `CALL` target fell outside `[0, size)`.
    #[error("CALL target {address} is out of bounds at address {at}")]
    InvalidCallAddress { at: usize, address: i64 },

    /// `RET` could not pop a bare value.
    #[error("RET needs a pushed return address at address {at}")]
    InvalidReturnValue { at: usize },

    /// The popped `RET` target fell outside `[0, size)`.
    #[error("RET target {address} is out of bounds at address {at}")]
    InvalidReturnAddress { at: usize, address: i64 },

    /// `PRINT` could not pop a bare value.
    #[error("PRINT needs a pushed value at address {at}")]
    InvalidPrintOperand { at: usize },
}
