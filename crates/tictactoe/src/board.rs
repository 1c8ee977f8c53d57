//! The 3x3 grid and its read/write operations.
//!
//! The board knows nothing about turns or winners. It only guarantees
//! that coordinates are in range and that an occupied cell is never
//! overwritten.

use crate::{Cell, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// Errors raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Row or column outside `0..3`.
    #[display("Cell ({row}, {col}) is out of range")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a symbol.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn check(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(())
    }

    /// Returns the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Self::check(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Returns true if nobody has played at `(row, col)`.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.get(row, col).map(Cell::is_empty)
    }

    /// Places `symbol` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for bad coordinates and
    /// [`BoardError::CellOccupied`] if the cell is taken. The board is
    /// untouched on error.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), BoardError> {
        if !self.is_empty(row, col)? {
            debug!("Cell already occupied");
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[row][col] = Cell::Occupied(symbol);
        Ok(())
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Returns an owned copy of the grid for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { cells: self.cells }
    }

    /// Number of cells holding a symbol.
    pub fn occupied_count(&self) -> usize {
        self.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.iter()
            .filter(|cell| cell.symbol() == Some(symbol))
            .count()
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == SIZE * SIZE
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Direct access for coordinates known to be in range.
    pub(crate) fn cell_at(&self, (row, col): (usize, usize)) -> Cell {
        self.cells[row][col]
    }
}

/// Immutable copy of the board taken at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    cells: [[Cell; SIZE]; SIZE],
}

impl Snapshot {
    /// Returns the cell at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    Cell::Occupied(symbol) => symbol.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&line)?;
            if r + 1 < SIZE {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
