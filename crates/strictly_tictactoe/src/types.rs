//! Core domain types for tic-tac-toe.

use crate::action::{Move, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X, the human side. Moves first.
    #[display("X")]
    X,
    /// Player O, the minimax side. Moves second.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The character drawn for this player's mark.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Occupied(player) => write!(f, "{}", player.mark()),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order. The board is mutated in place both by
/// the game loop (committed moves) and by the search (tentative moves that are
/// always undone before the search returns).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given move's coordinates.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Every empty coordinate, row 0 before row 1 before row 2 and left to
    /// right within a row.
    ///
    /// The order is observable: the search breaks ties in favor of the move
    /// that appears first here.
    pub fn valid_moves(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|&mv| self.is_empty(mv))
            .collect()
    }

    /// Places `player`'s mark at `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark. The
    /// board is left untouched in that case.
    pub fn apply(&mut self, mv: Move, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(mv) {
            return Err(MoveError::Occupied(mv));
        }
        self.cells[mv.index()] = Cell::Occupied(player);
        Ok(())
    }

    /// Resets the cell at `mv` to empty.
    pub fn undo(&mut self, mv: Move) {
        self.cells[mv.index()] = Cell::Empty;
    }

    /// Unchecked placement used by the search, which only ever places on
    /// cells taken from [`Board::valid_moves`].
    pub(crate) fn place(&mut self, mv: Move, player: Player) {
        debug_assert!(self.is_empty(mv), "tentative move on occupied cell {mv}");
        self.cells[mv.index()] = Cell::Occupied(player);
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Infers whose turn it is from the mark counts, given that X moves first.
    ///
    /// Returns `None` for boards no alternating game can produce.
    pub fn to_move(&self) -> Option<Player> {
        let count = |p: Player| {
            self.cells
                .iter()
                .filter(|&&c| c == Cell::Occupied(p))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Single-line form accepted by [`Board::from_str`], e.g. `XO.|.X.|..O`.
    pub fn compact(&self) -> String {
        let mut out = String::with_capacity(11);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                out.push('|');
            }
            out.push(match cell {
                Cell::Empty => '.',
                Cell::Occupied(p) => p.mark(),
            });
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            writeln!(f, "{} | {} | {}", row[0], row[1], row[2])?;
            writeln!(f, "-----")?;
        }
        Ok(())
    }
}

/// Error parsing a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {ch:?} at offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset into the input.
        offset: usize,
    },

    /// The input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order. `X`/`O` (any case) are marks,
    /// `.`, `_` and `-` are empty; whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for (offset, ch) in s.char_indices() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '_' | '-' => Cell::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                ch => return Err(BoardParseError::InvalidCharacter { ch, offset }),
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongCellCount(v.len()))?;
        Ok(Self { cells })
    }
}
