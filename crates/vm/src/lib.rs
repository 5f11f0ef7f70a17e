//! Computer simulator engine: a cell store driven by a program counter.
//!
//! The machine has:
//! - A [`CellStore`] of fixed addressable size, growable only by appending
//! - A program counter into that region
//! - Six instructions: `MULT`, `CALL`, `RET`, `STOP`, `PRINT`, `PUSH`
//!
//! # Usage
//!
//! ```
//! use compsim_common::{Opcode, Output};
//! use compsim_vm::Computer;
//!
//! let mut computer = Computer::new(10);
//! computer.insert_op(Opcode::Push, Some(6)).unwrap();
//! computer.insert_op(Opcode::Push, Some(2)).unwrap();
//! computer.insert_op(Opcode::Mult, None).unwrap();
//! computer.insert_op(Opcode::Print, None).unwrap();
//! computer.insert_op(Opcode::Stop, None).unwrap();
//! computer.set_address(0).unwrap();
//!
//! let mut output: Vec<Output> = Vec::new();
//! assert_eq!(computer.execute(&mut output), Ok(Some(12)));
//! assert_eq!(output, vec![Output::Printed(12)]);
//! ```

pub mod error;
pub mod execute;
pub mod machine;
pub mod store;

pub use error::RuntimeError;
pub use machine::Computer;
pub use store::{CellStore, DEFAULT_STACK_SIZE};

use compsim_common::{Opcode, Output};

/// What a completed [`run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Payload of the last instruction that produced one.
    pub payload: Option<i64>,
    /// Values emitted by `PRINT`, in order.
    pub printed: Vec<i64>,
    /// Program counter when the run stopped.
    pub program_counter: usize,
}

/// Load `program` from address 0 of a fresh computer and execute it.
///
/// # Errors
///
/// Returns the first [`RuntimeError`] from loading or execution.
pub fn run(size: i64, program: &[(Opcode, Option<i64>)]) -> Result<RunOutcome, RuntimeError> {
    let mut computer = Computer::new(size);
    for &(opcode, argument) in program {
        computer.insert_op(opcode, argument)?;
    }
    computer.set_address(0)?;

    let mut output: Vec<Output> = Vec::new();
    let payload = computer.execute(&mut output)?;
    let printed = output
        .into_iter()
        .filter_map(|o| match o {
            Output::Printed(value) => Some(value),
            _ => None,
        })
        .collect();

    Ok(RunOutcome {
        payload,
        printed,
        program_counter: computer.program_counter(),
    })
}
