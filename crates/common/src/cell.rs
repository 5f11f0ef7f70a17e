//! Cell representation for the simulator's store.
//!
//! A cell is either an instruction (`opcode` present) or a bare value pushed
//! at run time (`opcode` absent). Only bare values are valid operands.

use std::fmt;

use crate::opcode::Opcode;

/// A single addressable unit of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The operation, or `None` for a bare pushed value.
    pub opcode: Option<Opcode>,
    /// Integer payload. Instructions like `STOP` carry none.
    pub argument: Option<i64>,
}

impl Cell {
    /// Create an instruction cell.
    pub fn instruction(opcode: Opcode, argument: Option<i64>) -> Self {
        Self {
            opcode: Some(opcode),
            argument,
        }
    }

    /// Create a bare value cell, as produced by `PUSH` and `MULT`.
    pub fn value(value: i64) -> Self {
        Self {
            opcode: None,
            argument: Some(value),
        }
    }

    /// The integer carried by a bare value cell.
    ///
    /// Returns `None` for instruction cells even when their argument slot is
    /// populated, so a `CALL 2` is never mistaken for the operand `2`.
    pub fn as_value(&self) -> Option<i64> {
        match self.opcode {
            None => self.argument,
            Some(_) => None,
        }
    }

    /// Whether this cell is a bare value rather than an instruction.
    pub fn is_value(&self) -> bool {
        self.opcode.is_none()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.opcode, self.argument) {
            (Some(op), Some(arg)) => write!(f, "{op} {arg}"),
            (Some(op), None) => write!(f, "{op}"),
            (None, Some(arg)) => write!(f, "{arg}"),
            (None, None) => f.write_str("-"),
        }
    }
}
