//! The cell store: a fixed addressable region plus an append-only tail.
//!
//! Addresses `[0, capacity)` are written with [`CellStore::insert`]. Values
//! produced at run time are appended past the end with [`CellStore::push`]
//! and taken back with [`CellStore::pop`]. Reads are lenient (out of range
//! is just "nothing there"); writes are strict.

use compsim_common::Cell;

use crate::error::RuntimeError;

/// Store size used when a non-positive size is requested.
pub const DEFAULT_STACK_SIZE: usize = 100;

/// Address-indexed storage for instruction and value cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStore {
    /// Slot per address; `None` marks a cell nothing was ever written to.
    cells: Vec<Option<Cell>>,
    /// Length of the addressable region, fixed at construction.
    capacity: usize,
}

impl CellStore {
    /// Create a store with `size` empty cells, or [`DEFAULT_STACK_SIZE`]
    /// cells when `size < 1`.
    pub fn new(size: i64) -> Self {
        let capacity = usize::try_from(size)
            .ok()
            .filter(|&n| n >= 1)
            .unwrap_or(DEFAULT_STACK_SIZE);
        Self {
            cells: vec![None; capacity],
            capacity,
        }
    }

    /// Size of the addressable region.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current length, including cells pushed past the addressable region.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no slot holds a cell.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Overwrite the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::AddressOutOfBounds`] if `index` is not below
    /// the current length. The store is left untouched.
    pub fn insert(&mut self, cell: Cell, index: usize) -> Result<(), RuntimeError> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(RuntimeError::AddressOutOfBounds { index, len })?;
        *slot = Some(cell);
        Ok(())
    }

    /// Append a cell past the current end.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(Some(cell));
    }

    /// Remove and return the last cell.
    ///
    /// Returns `None` when there is nothing to remove. Whether the returned
    /// cell carries an argument is a separate question answered by the cell
    /// itself.
    ///
    /// The addressable region never shrinks: once the appended tail is
    /// exhausted, popping vacates the last addressable slot instead of
    /// removing it.
    pub fn pop(&mut self) -> Option<Cell> {
        if self.cells.len() > self.capacity {
            self.cells.pop().flatten()
        } else {
            self.cells.last_mut().and_then(Option::take)
        }
    }

    /// The cell at `index`, or `None` if it is empty or out of range.
    pub fn peek(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index).and_then(Option::as_ref)
    }
}
