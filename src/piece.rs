//! Piece values
//!
//! A [`Piece`] is a plain value: kind, color and the square it stands on.
//! Pieces never move in place; [`Piece::moved_to`] yields a new value that
//! the caller re-places on the board.
//!
//! Equality compares kind and color only, so two white rooks are equal
//! wherever they stand. Use [`Piece::same_placement`] when the square matters.

use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::constants::{BLACK_GLYPHS, PIECE_LETTERS, WHITE_GLYPHS};
use crate::move_gen::{self, Destinations};
use crate::types::{Color, Coordinate, PieceKind};

/// Handle into a board's piece registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

#[derive(Debug, Clone, Copy)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub coordinate: Coordinate,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, coordinate: Coordinate) -> Self {
        Piece {
            kind,
            color,
            coordinate,
        }
    }

    pub fn pawn(color: Color, coordinate: Coordinate) -> Self {
        Self::new(PieceKind::Pawn, color, coordinate)
    }

    pub fn knight(color: Color, coordinate: Coordinate) -> Self {
        Self::new(PieceKind::Knight, color, coordinate)
    }

    pub fn bishop(color: Color, coordinate: Coordinate) -> Self {
        Self::new(PieceKind::Bishop, color, coordinate)
    }

    pub fn rook(color: Color, coordinate: Coordinate) -> Self {
        Self::new(PieceKind::Rook, color, coordinate)
    }

    pub fn queen(color: Color, coordinate: Coordinate) -> Self {
        Self::new(PieceKind::Queen, color, coordinate)
    }

    pub fn king(color: Color, coordinate: Coordinate) -> Self {
        Self::new(PieceKind::King, color, coordinate)
    }

    /// Same piece standing on another square
    pub fn moved_to(self, coordinate: Coordinate) -> Self {
        Piece { coordinate, ..self }
    }

    /// Equality that also compares the square
    pub fn same_placement(&self, other: &Piece) -> bool {
        self == other && self.coordinate == other.coordinate
    }

    /// Unicode chess glyph (U+2654..U+265F)
    pub fn glyph(&self) -> char {
        match self.color {
            Color::White => WHITE_GLYPHS[self.kind as usize],
            Color::Black => BLACK_GLYPHS[self.kind as usize],
        }
    }

    /// Letter symbol, uppercase for White and lowercase for Black
    pub fn letter(&self) -> char {
        let letter = PIECE_LETTERS[self.kind as usize];
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    /// Candidate destinations from this piece's square given the board's occupancy
    ///
    /// The board is only read; the piece does not need to be placed on it.
    pub fn valid_moves(&self, board: &Board) -> Destinations {
        move_gen::valid_moves(self.kind, self.color, self.coordinate, board)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.color == other.color
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.color.hash(state);
    }
}
