//! Computer state: cell store, program counter, and program loading.

use compsim_common::{Cell, Opcode};

use crate::error::RuntimeError;
use crate::store::CellStore;

/// A simulated computer.
///
/// Owns exactly one [`CellStore`] and one program counter. There is no
/// other hidden state: output produced while running goes straight to the
/// sink handed to [`Computer::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    /// Instructions and pushed values.
    pub(crate) store: CellStore,
    /// Address of the next instruction to insert or execute.
    pub(crate) pc: usize,
}

impl Computer {
    /// Create a computer with a store of `size` cells (see [`CellStore::new`]).
    /// The program counter starts at 0.
    pub fn new(size: i64) -> Self {
        Self {
            store: CellStore::new(size),
            pc: 0,
        }
    }

    /// Current program counter.
    pub fn program_counter(&self) -> usize {
        self.pc
    }

    /// Size of the addressable region.
    pub fn size(&self) -> usize {
        self.store.capacity()
    }

    /// Read-only view of the store.
    pub fn store(&self) -> &CellStore {
        &self.store
    }

    /// Set the program counter.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::ProgramCounterOutOfBounds`] if `address` is
    /// outside `[0, size)`; the program counter is left unchanged.
    pub fn set_address(&mut self, address: i64) -> Result<usize, RuntimeError> {
        let pc = self
            .address_in_bounds(address)
            .ok_or(RuntimeError::ProgramCounterOutOfBounds {
                address,
                size: self.size(),
            })?;
        self.pc = pc;
        Ok(pc)
    }

    /// Insert the instruction named by `mnemonic` at the program counter.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidInstruction`] for an unknown mnemonic,
    /// otherwise whatever [`Computer::insert_op`] returns.
    pub fn insert(&mut self, mnemonic: &str, argument: Option<i64>) -> Result<(), RuntimeError> {
        let opcode: Opcode = mnemonic
            .parse()
            .map_err(|_| RuntimeError::InvalidInstruction {
                mnemonic: mnemonic.to_string(),
            })?;
        self.insert_op(opcode, argument)
    }

    /// Insert an instruction at the program counter and advance it by one.
    ///
    /// `CALL` and `PUSH` require an argument. The other opcodes read their
    /// operands at run time; an argument supplied for them is discarded.
    /// On failure the program counter does not move.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::MissingArgument`] for `CALL`/`PUSH` without argument
    /// - [`RuntimeError::AddressOutOfBounds`] if the program counter has
    ///   been advanced past the end of the store
    pub fn insert_op(&mut self, opcode: Opcode, argument: Option<i64>) -> Result<(), RuntimeError> {
        let argument = if opcode.takes_argument() {
            Some(argument.ok_or(RuntimeError::MissingArgument { opcode })?)
        } else {
            None
        };

        self.store
            .insert(Cell::instruction(opcode, argument), self.pc)?;
        self.pc += 1;
        Ok(())
    }

    /// Convert `address` to an index if it lies in `[0, size)`.
    pub(crate) fn address_in_bounds(&self, address: i64) -> Option<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&index| index < self.size())
    }

    /// Pop the top of the store and return it if it is a bare value.
    pub(crate) fn pop_value(&mut self) -> Option<i64> {
        self.store.pop().and_then(|cell| cell.as_value())
    }
}
