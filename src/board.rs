//! Board representation and basic operations

use std::fmt;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::X => write!(f, "{}", "X".red()),
            Cell::O => write!(f, "{}", "O".blue()),
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell())
    }
}

/// A board position as zero-indexed row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Convert 1-indexed console coordinates to a board position.
    ///
    /// The conversion saturates at the `i64` extremes, so any input is
    /// range-checked without overflowing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] (carrying the zero-indexed pair)
    /// when either coordinate falls outside the board, including zero and
    /// negative input.
    pub fn from_one_based(row: i64, col: i64) -> Result<Coord, crate::Error> {
        let row = row.saturating_sub(1);
        let col = col.saturating_sub(1);
        if !(0..3).contains(&row) || !(0..3).contains(&col) {
            return Err(crate::Error::OutOfBounds { row, col });
        }
        Ok(Coord::new(row as usize, col as usize))
    }

    /// Row-major cell index (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Position of a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Coord {
        Coord::new(index / 3, index % 3)
    }
}

/// The 3x3 grid of cells
///
/// This type implements `Copy` for efficiency since it's only 9 bytes, so
/// tentative placements copy the board instead of mutating and rolling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell at a position
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Check if a position is on the board and empty.
    ///
    /// Out-of-range coordinates count as "not empty" rather than an error,
    /// so probing loops need no separate bounds check.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        coord.row < 3 && coord.col < 3 && self.cells[coord.index()] == Cell::Empty
    }

    /// Write a player's symbol at a position.
    ///
    /// No bounds or occupancy checking; callers validate first with
    /// [`Board::validate_move`].
    pub fn place(&mut self, coord: Coord, player: Player) {
        self.cells[coord.index()] = player.to_cell();
    }

    /// Place a symbol on a copy of the board and return it
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, coord: Coord, player: Player) -> Board {
        let mut next = *self;
        next.place(coord, player);
        next
    }

    /// Get all empty positions in row-major order
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Coord::from_index(i))
            .collect()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check that a move can be played, without mutating the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] when either coordinate is
    /// outside the grid and [`crate::Error::CellOccupied`] when the target
    /// cell already holds a symbol.
    pub fn validate_move(&self, coord: Coord) -> Result<(), crate::Error> {
        if coord.row >= 3 || coord.col >= 3 {
            return Err(crate::Error::OutOfBounds {
                row: coord.row as i64,
                col: coord.col as i64,
            });
        }

        if !self.is_empty_at(coord) {
            return Err(crate::Error::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }

        Ok(())
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-----------")?;
            }
            write!(
                f,
                " {} | {} | {} ",
                self.cells[row * 3],
                self.cells[row * 3 + 1],
                self.cells[row * 3 + 2]
            )?;
        }
        Ok(())
    }
}
