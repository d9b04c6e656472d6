//! Growable tape of integer cells
//!
//! The tape starts as a single zero cell and only ever grows, one zero cell
//! at a time, at the high end. It never shrinks. Callers address it with a
//! non-negative cursor that the tape machine keeps inside `0..len()`.

/// A single tape cell
pub type Cell = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Cell>,
}

impl Tape {
    pub fn new() -> Self {
        Tape { cells: vec![0] }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a tape has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, cursor: usize) -> Option<Cell> {
        self.cells.get(cursor).copied()
    }

    /// Make sure `cursor` addresses a cell, appending one zero cell if it sits
    /// just past the end.
    pub fn extend_to(&mut self, cursor: usize) {
        if cursor == self.cells.len() {
            self.cells.push(0);
        }
    }

    pub fn set(&mut self, cursor: usize, value: Cell) {
        self.cells[cursor] = value;
    }

    pub fn increment(&mut self, cursor: usize) {
        self.cells[cursor] = self.cells[cursor].wrapping_add(1);
    }

    pub fn decrement(&mut self, cursor: usize) {
        self.cells[cursor] = self.cells[cursor].wrapping_sub(1);
    }

    /// Approximate heap footprint, used for snapshot budgeting
    pub fn size_in_bytes(&self) -> usize {
        self.cells.len() * std::mem::size_of::<Cell>()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
