//! Opcode definitions for the simulator's instruction set.

use std::fmt;
use std::str::FromStr;

use crate::error::OpcodeError;

/// Identifies the operation stored in an instruction cell.
///
/// Operands for `MULT`, `RET` and `PRINT` are read from the store at run
/// time; `CALL` and `PUSH` carry their operand in the cell itself.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Pop two bare values, push their product.
    Mult = 0x01,
    /// Jump to the address held in the cell's argument.
    Call = 0x02,
    /// Pop a bare value and jump to it.
    Ret = 0x03,
    /// Stop execution.
    Stop = 0x04,
    /// Pop a bare value and emit it on the output channel.
    Print = 0x05,
    /// Push the cell's argument as a bare value.
    Push = 0x06,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 6] = [
    Opcode::Mult,
    Opcode::Call,
    Opcode::Ret,
    Opcode::Stop,
    Opcode::Print,
    Opcode::Push,
];

impl Opcode {
    /// Returns the textual mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Mult => "MULT",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Stop => "STOP",
            Opcode::Print => "PRINT",
            Opcode::Push => "PUSH",
        }
    }

    /// Whether an instruction cell for this opcode must carry an argument.
    pub fn takes_argument(&self) -> bool {
        matches!(self, Opcode::Call | Opcode::Push)
    }
}

impl FromStr for Opcode {
    type Err = OpcodeError;

    /// Mnemonics are matched exactly; `push` is not `PUSH`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == s)
            .copied()
            .ok_or_else(|| OpcodeError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
