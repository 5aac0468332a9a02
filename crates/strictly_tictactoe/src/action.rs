//! Move coordinates for tic-tac-toe.
//!
//! A move is a (row, column) pair on the 3x3 grid. Moves order row-major, which
//! is the same order the board enumerates them in.

use serde::Serialize;

/// A cell coordinate, both components in `0..=2`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All 9 coordinates in row-major scan order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// Creates a move, checking that both coordinates are on the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either coordinate exceeds 2.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::at(row, col))
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0 = top).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (0 = left).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index into the board (0-8).
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Error that can occur when building or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate lies outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(Move),
}

impl std::error::Error for MoveError {}
