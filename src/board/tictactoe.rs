//! 3x3 tic-tac-toe board stored as a flat row-major array

use super::{Cell, Player};
use crate::error::MoveError;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Tic-tac-toe board
///
/// Index layout:
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TicTacToeBoard {
    cells: [Cell; CELL_COUNT],
}

impl TicTacToeBoard {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Get the cell at `index`. Out-of-range indices read as empty.
    #[inline]
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or_default()
    }

    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Mark an empty cell for `player`, returning the index filled
    pub fn place(&mut self, index: usize, player: Player) -> Result<usize, MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.cells[index].is_empty() {
            return Err(MoveError::Occupied(index));
        }
        self.cells[index] = Cell::Mark(player);
        Ok(index)
    }

    /// Clear a cell (search backtracking and test setup only)
    #[inline]
    pub fn remove(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Empty cell indices in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty()).collect()
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}
