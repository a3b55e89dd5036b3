//! Implementation of the program tape.

use std::collections::HashMap;

use crate::{Cell, TapeAddr};

/// A sparse tape, unbounded in both directions.
///
/// Cells spring into existence holding 0 the first time they are touched;
/// negative addresses are as valid as positive ones. A fresh tape is built
/// for each execution and dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseTape {
    cells: HashMap<TapeAddr, Cell>,
}

impl SparseTape {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Read the cell at `addr`. Never-written cells read 0.
    pub fn get(&self, addr: TapeAddr) -> Cell {
        self.cells.get(&addr).copied().unwrap_or(0)
    }

    pub fn set(&mut self, addr: TapeAddr, value: Cell) {
        self.cells.insert(addr, value);
    }

    /// Add `diff` to the cell at `addr`.
    pub fn modify(&mut self, addr: TapeAddr, diff: Cell) {
        *self.cells.entry(addr).or_insert(0) += diff;
    }

    /// Number of cells that have been touched so far.
    pub fn touched(&self) -> usize {
        self.cells.len()
    }
}
