//! Type definitions for board coordinates and piece identity
//!
//! Provides newtypes for files and ranks so that column and row indices
//! cannot be mixed up, plus the closed set of piece kinds and colors.

use std::fmt;

use crate::constants::{BOARD_SIZE, FILE_CHARS};
use crate::error::{BoardError, BoardResult};

/// Side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Rank step a pawn of this color advances by
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// The six piece kinds
///
/// Discriminants index the glyph and letter tables in [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

/// Board column, stored as index 0 (file 'a') to 7 (file 'h')
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// Create a file from a character ('a'..='h')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Create a file from a 0-based index
    pub fn from_index(index: u8) -> Option<Self> {
        (index < BOARD_SIZE).then_some(File(index))
    }

    pub fn to_char(self) -> char {
        FILE_CHARS[self.0 as usize]
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board row, stored as index 0 (rank 1) to 7 (rank 8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from a number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=BOARD_SIZE).contains(&n) {
            Some(Rank(n - 1))
        } else {
            None
        }
    }

    /// Create a rank from a 0-based index
    pub fn from_index(index: u8) -> Option<Self> {
        (index < BOARD_SIZE).then_some(Rank(index))
    }

    /// Convert rank to number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// A validated (file, rank) square
///
/// Every `Coordinate` is on the board; the only way to build one from raw
/// file/rank values is through a checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub file: File,
    pub rank: Rank,
}

impl Coordinate {
    /// Create a coordinate from a file letter and a 1-based rank number
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] if the file is not `a..=h`
    /// or the rank is not `1..=8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_board::Coordinate;
    ///
    /// let d4 = Coordinate::new('d', 4).unwrap();
    /// assert_eq!(d4.to_string(), "d4");
    /// assert!(Coordinate::new('z', 4).is_err());
    /// ```
    pub fn new(file: char, rank: u8) -> BoardResult<Self> {
        match (File::from_char(file), Rank::from_number(rank)) {
            (Some(file), Some(rank)) => Ok(Coordinate { file, rank }),
            _ => Err(BoardError::InvalidPosition { file, rank }),
        }
    }

    /// Create a coordinate from 0-based file and rank indices
    pub fn from_indices(file: u8, rank: u8) -> Option<Self> {
        Some(Coordinate {
            file: File::from_index(file)?,
            rank: Rank::from_index(rank)?,
        })
    }

    /// Convert a linear square index (`rank * 8 + file`) back to a coordinate
    pub fn from_square_index(index: usize) -> Option<Self> {
        let index = u8::try_from(index).ok()?;
        Self::from_indices(index % BOARD_SIZE, index / BOARD_SIZE)
    }

    /// Linear square index, a1 = 0, h1 = 7, a8 = 56, h8 = 63
    pub fn square_index(self) -> usize {
        self.rank.index() as usize * BOARD_SIZE as usize + self.file.index() as usize
    }

    /// Step by a file/rank delta; `None` if the result leaves the board
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = i16::from(self.file.index()) + i16::from(file_delta);
        let rank = i16::from(self.rank.index()) + i16::from(rank_delta);
        Self::from_indices(u8::try_from(file).ok()?, u8::try_from(rank).ok()?)
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|rank| {
            (0..BOARD_SIZE).map(move |file| Coordinate {
                file: File(file),
                rank: Rank(rank),
            })
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}
