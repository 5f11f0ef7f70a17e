//! Main execution loop and opcode dispatch.

use compsim_common::{Cell, Opcode, Output, OutputSink};

use crate::error::RuntimeError;
use crate::machine::Computer;

impl Computer {
    /// Run from the current program counter until `STOP` or until the
    /// program counter leaves the addressable region.
    ///
    /// Returns the payload of the last instruction that produced one:
    /// the product for `MULT`, the target for `CALL`/`RET`, the value for
    /// `PRINT`. `PUSH` leaves the payload unchanged. Values printed by
    /// `PRINT` are delivered to `out` as they happen.
    ///
    /// Empty cells inside the region are skipped. A program whose `CALL`s
    /// and `RET`s cycle without reaching `STOP` never returns.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NoInstructionAtAddress`] if the program
    /// counter does not point at an instruction when called. Any instruction
    /// failure aborts the run with the program counter left on the failing
    /// instruction.
    pub fn execute(&mut self, out: &mut impl OutputSink) -> Result<Option<i64>, RuntimeError> {
        if self.pc >= self.size() || self.store.peek(self.pc).is_none() {
            return Err(RuntimeError::NoInstructionAtAddress { at: self.pc });
        }

        let mut result = None;

        while self.pc < self.size() {
            let Some(&cell) = self.store.peek(self.pc) else {
                self.pc += 1;
                continue;
            };
            let opcode = cell
                .opcode
                .ok_or(RuntimeError::NotAnInstruction { at: self.pc })?;

            match opcode {
                Opcode::Stop => return Ok(result),

                // Control transfer: set the program counter themselves.
                Opcode::Call => result = Some(self.exec_call(&cell)?),
                Opcode::Ret => result = Some(self.exec_ret()?),

                Opcode::Mult => {
                    result = Some(self.exec_mult()?);
                    self.pc += 1;
                }
                Opcode::Print => {
                    result = Some(self.exec_print(out)?);
                    self.pc += 1;
                }
                Opcode::Push => {
                    self.exec_push(&cell)?;
                    self.pc += 1;
                }
            }
        }

        Ok(result)
    }

    fn exec_mult(&mut self) -> Result<i64, RuntimeError> {
        let at = self.pc;
        let a = self.pop_value();
        let b = self.pop_value();

        let (Some(a), Some(b)) = (a, b) else {
            return Err(RuntimeError::InvalidMultiplicationOperands { at });
        };

        let product = a.wrapping_mul(b);
        self.store.push(Cell::value(product));
        Ok(product)
    }

    fn exec_call(&mut self, cell: &Cell) -> Result<i64, RuntimeError> {
        let at = self.pc;
        let address = cell
            .argument
            .ok_or(RuntimeError::MissingCallArgument { at })?;

        let target = self
            .address_in_bounds(address)
            .ok_or(RuntimeError::InvalidCallAddress { at, address })?;
        self.pc = target;
        Ok(address)
    }

    fn exec_ret(&mut self) -> Result<i64, RuntimeError> {
        let at = self.pc;
        let address = self
            .pop_value()
            .ok_or(RuntimeError::InvalidReturnValue { at })?;

        let target = self
            .address_in_bounds(address)
            .ok_or(RuntimeError::InvalidReturnAddress { at, address })?;
        self.pc = target;
        Ok(address)
    }

    fn exec_print(&mut self, out: &mut impl OutputSink) -> Result<i64, RuntimeError> {
        let at = self.pc;
        let value = self
            .pop_value()
            .ok_or(RuntimeError::InvalidPrintOperand { at })?;

        out.receive(Output::Printed(value));
        Ok(value)
    }

    fn exec_push(&mut self, cell: &Cell) -> Result<(), RuntimeError> {
        // Insertion guarantees PUSH cells carry an argument.
        let value = cell.argument.ok_or(RuntimeError::MissingArgument {
            opcode: Opcode::Push,
        })?;
        self.store.push(Cell::value(value));
        Ok(())
    }
}
