//! Move generation
//!
//! Enumerates candidate destination squares for a piece from the board's
//! occupancy. There is no capture modelling: any occupied square, friend or
//! foe, blocks a ray and is never itself a destination.
//!
//! Sliders and steppers produce an unordered set. Pawns produce an ordered
//! sequence (one-step advance first, then two-step) so callers can compare
//! against an exact expected list.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;
pub mod tables;


use std::collections::HashSet;

use tracing::trace;

use crate::board::Board;
use crate::types::{Color, Coordinate, PieceKind};

pub use tables::{tables, MoveTables};

/// Destination squares produced by move generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destinations {
    /// Rook, bishop, queen, knight and king moves
    Unordered(HashSet<Coordinate>),
    /// Pawn advances, one-step before two-step
    Ordered(Vec<Coordinate>),
}

impl Destinations {
    pub fn len(&self) -> usize {
        match self {
            Destinations::Unordered(set) => set.len(),
            Destinations::Ordered(seq) => seq.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        match self {
            Destinations::Unordered(set) => set.contains(coordinate),
            Destinations::Ordered(seq) => seq.contains(coordinate),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &Coordinate> + '_> {
        match self {
            Destinations::Unordered(set) => Box::new(set.iter()),
            Destinations::Ordered(seq) => Box::new(seq.iter()),
        }
    }

    pub fn as_set(&self) -> Option<&HashSet<Coordinate>> {
        match self {
            Destinations::Unordered(set) => Some(set),
            Destinations::Ordered(_) => None,
        }
    }

    pub fn as_ordered(&self) -> Option<&[Coordinate]> {
        match self {
            Destinations::Unordered(_) => None,
            Destinations::Ordered(seq) => Some(seq),
        }
    }

    /// Collapse into a set, dropping pawn ordering
    pub fn into_set(self) -> HashSet<Coordinate> {
        match self {
            Destinations::Unordered(set) => set,
            Destinations::Ordered(seq) => seq.into_iter().collect(),
        }
    }
}

/// Enumerate destinations for a piece of `kind` and `color` standing on `from`
///
/// The board is consulted for occupancy only. Whether `from` itself holds
/// the piece is not checked.
pub fn valid_moves(kind: PieceKind, color: Color, from: Coordinate, board: &Board) -> Destinations {
    let destinations = match kind {
        PieceKind::Pawn => Destinations::Ordered(pawn::generate_pawn_moves(board, from, color)),
        PieceKind::Knight => collect(board, from, knight::generate_knight_moves),
        PieceKind::Bishop => collect(board, from, bishop::generate_bishop_moves),
        PieceKind::Rook => collect(board, from, rook::generate_rook_moves),
        PieceKind::Queen => collect(board, from, queen::generate_queen_moves),
        PieceKind::King => collect(board, from, king::generate_king_moves),
    };
    trace!(
        "[MOVEGEN] {:?} {:?} from {}: {} destinations",
        color,
        kind,
        from,
        destinations.len()
    );
    destinations
}

type Generator = fn(&Board, Coordinate, &mut HashSet<Coordinate>);

fn collect(board: &Board, from: Coordinate, generate: Generator) -> Destinations {
    let mut moves = HashSet::new();
    generate(board, from, &mut moves);
    Destinations::Unordered(moves)
}
