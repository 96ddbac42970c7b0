//! The square grid and its coordinates.
//!
//! Coordinates are zero-based `(row, col)`. In text they are written the way
//! players type them: a row letter followed by a 1-based column, so `b2` is
//! `(1, 1)`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::{Cell, Player, PlayerMap};
use crate::error::{BoardError, NotationError};

/// Side length of the reference board.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 3;

/// A grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `dir`, or `None` when that would leave the first
    /// row or column. The upper edge is checked by the board.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        self.offset(dr, dc)
    }

    /// Shift by a signed delta, or `None` below zero.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Manhattan distance.
    #[must_use]
    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Chebyshev (king-move) distance.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.row < 26 {
            write!(f, "{}{}", row_label(self.row), self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Coord {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let Some(letter) = chars.next() else {
            return Err(NotationError::Malformed(s.to_string()));
        };
        if !letter.is_ascii_alphabetic() {
            return Err(NotationError::BadRow(letter));
        }
        let row = usize::from(letter.to_ascii_lowercase() as u8 - b'a');

        let digits = chars.as_str().trim();
        if digits.is_empty() {
            return Err(NotationError::Malformed(s.to_string()));
        }
        let col: usize = digits
            .parse()
            .map_err(|_| NotationError::BadColumn(digits.to_string()))?;
        if col == 0 {
            return Err(NotationError::BadColumn(digits.to_string()));
        }

        Ok(Self::new(row, col - 1))
    }
}

fn row_label(row: usize) -> char {
    u8::try_from(row)
        .ok()
        .filter(|r| *r < 26)
        .map_or('?', |r| char::from(b'a' + r))
}

/// The four orthogonal step directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used by move generation.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Square grid of cells.
///
/// Cloning is a full deep copy; search branches never share storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Sides below [`MIN_BOARD_SIZE`] are rejected.
    pub fn new(side: usize) -> Result<Self, BoardError> {
        if side < MIN_BOARD_SIZE {
            return Err(BoardError::TooSmall(side));
        }
        Ok(Self {
            side,
            cells: vec![Cell::Empty; side * side],
        })
    }

    /// Parse a board from one string per row using `X`, `O` and `.`.
    ///
    /// ```
    /// use rust_territory::core::{Board, Coord, Player};
    ///
    /// let board = Board::from_rows(&["X..", "...", "..O"]).unwrap();
    /// assert_eq!(board.side(), 3);
    /// assert!(board.get(Coord::new(2, 2)).is_owned_by(Player::B));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let mut board = Self::new(rows.len())?;
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.as_ref().chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != board.side {
                return Err(BoardError::NotSquare {
                    row,
                    len: symbols.len(),
                    side: board.side,
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let cell = match symbol {
                    '.' => Cell::Empty,
                    other => Cell::Piece(Player::from_symbol(other).ok_or(BoardError::BadSymbol(other))?),
                };
                board.set(Coord::new(row, col), cell);
            }
        }
        Ok(board)
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Middle row/column index.
    #[must_use]
    pub fn center(&self) -> usize {
        self.side / 2
    }

    #[must_use]
    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.side && at.col < self.side
    }

    /// Cell contents. Out-of-bounds reads panic; check `in_bounds` first.
    #[must_use]
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    /// Cell contents, or `None` off the board.
    #[must_use]
    pub fn try_get(&self, at: Coord) -> Option<Cell> {
        self.in_bounds(at).then(|| self.get(at))
    }

    pub(crate) fn set(&mut self, at: Coord, cell: Cell) {
        let idx = self.index(at);
        self.cells[idx] = cell;
    }

    /// Neighbor in `dir`, if it is on the board.
    #[must_use]
    pub fn neighbor(&self, at: Coord, dir: Direction) -> Option<Coord> {
        at.step(dir).filter(|c| self.in_bounds(*c))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| Coord::new(row, col)))
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        self.coords()
            .filter_map(move |c| self.get(c).owner().map(|p| (c, p)))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |c| self.get(*c).is_empty())
    }

    /// Pieces on the board per player.
    #[must_use]
    pub fn piece_counts(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(0);
        for (_, owner) in self.pieces() {
            counts[owner] += 1;
        }
        counts
    }

    fn index(&self, at: Coord) -> usize {
        at.row * self.side + at.col
    }
}

impl std::fmt::Display for Board {
    /// Column numbers across the top, row letters down the side.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.side {
            write!(f, "  {} ", col + 1)?;
        }
        writeln!(f)?;

        for row in 0..self.side {
            write!(f, "{} ", row_label(row))?;
            for col in 0..self.side {
                write!(f, "| {} ", self.get(Coord::new(row, col)).symbol())?;
            }
            writeln!(f, "|")?;

            write!(f, "  ")?;
            for _ in 0..self.side {
                write!(f, "+---")?;
            }
            writeln!(f, "+")?;
        }
        Ok(())
    }
}
