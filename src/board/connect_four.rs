//! 6x7 connect-four grid with gravity placement

use super::{Cell, Player, Pos};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column enumeration order: center first, then outward.
///
/// Trying central columns first produces earlier alpha-beta cutoffs, and the
/// move selector breaks ties in this order.
pub const COLUMN_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Connect-four board
///
/// Discs in a column always form a contiguous block ending at the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConnectFourBoard {
    cells: [[Cell; COLS]; ROWS],
}

impl ConnectFourBoard {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || !self.cells[0][col].is_empty()
    }

    /// Lowest empty row in `col`, or `None` if the column is full
    pub fn available_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Drop a disc into `col`, returning the cell it landed on
    pub fn drop_disc(&mut self, col: usize, player: Player) -> Result<Pos, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange(col));
        }
        let row = self.available_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = Cell::Mark(player);
        Ok(Pos::new(row as u8, col as u8))
    }

    /// Lift the disc at `pos` back out. Only the top disc of a column may be
    /// removed, otherwise gravity would be violated.
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        debug_assert!(
            pos.row == 0 || self.cells[pos.row as usize - 1][pos.col as usize].is_empty(),
            "removing a disc from under another disc"
        );
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
    }

    /// Playable columns in [`COLUMN_ORDER`]
    pub fn legal_columns(&self) -> Vec<usize> {
        COLUMN_ORDER
            .iter()
            .copied()
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check the gravity invariant for every column
    pub fn is_settled(&self) -> bool {
        (0..COLS).all(|col| {
            let mut seen_disc = false;
            for row in 0..ROWS {
                let filled = !self.cells[row][col].is_empty();
                if seen_disc && !filled {
                    return false;
                }
                seen_disc |= filled;
            }
            true
        })
    }
}
